//! Canonical string inspection.

use anyhow::{Context, Result};
use clap::Args;
use pksuid::Pksuid;

use super::CommandContext;
use crate::output::{print_inspection, Inspection};

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Identifier in canonical form (e.g. `user_208bayYfCoFfqyLD4lZaZ8BvwaF`).
    id: String,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id =
            Pksuid::parse(&self.id).with_context(|| format!("failed to parse '{}'", self.id))?;
        print_inspection(&Inspection::new(&id)?, ctx.format)
    }
}
