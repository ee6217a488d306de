//! Error handling and display for the CLI.

use colored::Colorize;
use pksuid::PksuidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("--count must be at least 1")]
    InvalidCount,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(id_err) = err.downcast_ref::<PksuidError>() {
        let hint = match id_err {
            PksuidError::TooShort { .. } => {
                Some("A PKSUID ends with a 27-character KSUID; binary input needs 20 to 36 bytes.")
            }
            PksuidError::TooLong { .. } => Some("Binary input cannot exceed 36 bytes."),
            PksuidError::PrefixTooLong { .. } => Some("Prefixes are limited to 16 bytes."),
            PksuidError::MalformedId(_) => {
                Some("The last 27 characters must be a base62-encoded KSUID.")
            }
            PksuidError::UnsupportedScalarType { .. } | PksuidError::InvalidPrefix { .. } => None,
        };
        if let Some(hint) = hint {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}
