//! CLI commands.

mod decode;
mod generate;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// pksuid - Generate and decode prefixed KSUIDs.
#[derive(Debug, Parser)]
#[command(name = "pksuid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t, env = "PKSUID_FORMAT")]
    format: OutputFormat,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true, env = "PKSUID_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new identifiers.
    Generate(generate::GenerateCommand),

    /// Parse a canonical identifier and show its parts.
    Inspect(inspect::InspectCommand),

    /// Decode a storage value (hex bytes, text, or NULL).
    Decode(decode::DecodeCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
