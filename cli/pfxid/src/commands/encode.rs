//! Encoding raw bytes with the configured alphabet.

use anyhow::Result;
use clap::Args;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_encoded, Encoded};

#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Bytes to encode, as hex (an `0x` prefix is allowed).
    hex: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let digits = self.hex.strip_prefix("0x").unwrap_or(&self.hex);
        let bytes = hex::decode(digits).map_err(CliError::from)?;

        let encoded = ctx.generator.codec().encode(&bytes);

        print_encoded(
            &Encoded {
                input: digits,
                encoded: &encoded,
            },
            ctx.format,
        );
        Ok(())
    }
}
