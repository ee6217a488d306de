//! Storage value decoding.
//!
//! Runs the same classification a storage layer would when reading a column.

use anyhow::{Context, Result};
use clap::Args;
use pksuid::{classify_bytes, Pksuid, Scalar};
use tracing::info;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_inspection, Inspection};

#[derive(Debug, Args)]
pub struct DecodeCommand {
    #[command(flatten)]
    input: DecodeInput,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct DecodeInput {
    /// Raw column bytes, hex-encoded.
    #[arg(long)]
    hex: Option<String>,

    /// Text column value.
    #[arg(long)]
    text: Option<String>,

    /// Decode a NULL column.
    #[arg(long)]
    null: bool,
}

impl DecodeInput {
    fn into_scalar(self) -> Result<Scalar> {
        if let Some(hex) = self.hex {
            let bytes = hex::decode(hex.trim()).map_err(CliError::from)?;
            info!(encoding = ?classify_bytes(&bytes), len = bytes.len(), "decoding byte value");
            return Ok(Scalar::Bytes(bytes));
        }
        if let Some(text) = self.text {
            return Ok(Scalar::Text(text));
        }
        Ok(Scalar::Null)
    }
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let scalar = self.input.into_scalar()?;
        let category = scalar.category();
        let id = Pksuid::from_scalar(&scalar)
            .with_context(|| format!("failed to decode {category} value"))?;
        print_inspection(&Inspection::new(&id)?, ctx.format)
    }
}
