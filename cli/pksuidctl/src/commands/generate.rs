//! Identifier generation.

use anyhow::{Context, Result};
use clap::Args;
use pksuid::{Pksuid, Prefix};
use tracing::debug;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_ids;

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Prefix to prepend, at most 16 bytes (e.g. `user_`).
    #[arg(long, default_value = "", env = "PKSUID_PREFIX")]
    prefix: String,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        if self.count == 0 {
            return Err(CliError::InvalidCount.into());
        }

        let prefix = Prefix::try_from(self.prefix.as_str())
            .with_context(|| format!("invalid prefix '{}'", self.prefix))?;
        debug!(prefix = %prefix, count = self.count, "generating identifiers");

        let ids: Vec<Pksuid> = (0..self.count).map(|_| Pksuid::new(prefix)).collect();
        print_ids(&ids, ctx.format)
    }
}
