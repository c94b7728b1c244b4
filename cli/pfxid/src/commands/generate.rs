//! Identifier generation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_ids;

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Kind of identifier, e.g. `user`.
    kind: String,

    /// Number of identifiers to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Random bytes per identifier, overriding --size.
    #[arg(short, long)]
    bytes: Option<usize>,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let size = self.bytes.unwrap_or_else(|| ctx.generator.size());

        let ids = (0..self.count)
            .map(|_| ctx.generator.generate_with_size(self.kind.as_str(), size))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CliError::from)?;

        info!(kind = %self.kind, count = ids.len(), size, "Generated ids");
        print_ids(&ids, ctx.format);
        Ok(())
    }
}
