//! CLI commands.

mod encode;
mod generate;
mod kinds;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pfx_id::{Entropy, GeneratorConfig, IdGenerator};
use tracing::debug;

use crate::config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// pfxid - Generate prefixed random identifiers.
#[derive(Debug, Parser)]
#[command(name = "pfxid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true, env = "PFXID_CONFIG")]
    config: Option<PathBuf>,

    /// Symbols used for the encoded suffix.
    #[arg(long, global = true, env = "PFXID_ALPHABET")]
    alphabet: Option<String>,

    /// Default number of random bytes per identifier.
    #[arg(long, global = true, env = "PFXID_SIZE")]
    size: Option<usize>,

    /// Prefix for a kind, as KIND=PREFIX. May be repeated.
    #[arg(long = "prefix", global = true, value_parser = config::parse_prefix)]
    prefixes: Vec<(String, String)>,

    /// Source of random bytes.
    #[arg(long, global = true, value_enum, env = "PFXID_ENTROPY", default_value_t = EntropyChoice::Os)]
    entropy: EntropyChoice,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, env = "PFXID_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate identifiers of a kind.
    Generate(generate::GenerateCommand),

    /// Encode hex bytes with the configured alphabet.
    Encode(encode::EncodeCommand),

    /// List configured kinds and their prefixes.
    Kinds,
}

/// Where random bytes come from.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum EntropyChoice {
    /// The operating system's random source.
    #[default]
    Os,
    /// A thread-local CSPRNG seeded from the operating system.
    Thread,
}

impl EntropyChoice {
    fn entropy(self) -> Entropy {
        match self {
            EntropyChoice::Os => Entropy::os(),
            EntropyChoice::Thread => Entropy::thread_rng(),
        }
    }
}

impl Cli {
    /// Log filter for the subscriber.
    pub fn log_level(&self) -> &str {
        &self.log
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = self.context()?;

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Kinds => kinds::run(&ctx),
        }
    }

    /// Merge file config with flags and build the generator.
    fn context(&self) -> Result<CommandContext> {
        let file = config::load(self.config.as_deref())?;

        let flags = GeneratorConfig {
            alphabet: self.alphabet.clone(),
            size: self.size,
            prefixes: self.prefixes.iter().cloned().collect(),
        };
        let settings = config::with_fallback_prefixes(file.merge(flags));

        debug!(
            kinds = settings.prefixes.len(),
            size = ?settings.size,
            entropy = ?self.entropy,
            "Settings resolved"
        );

        let generator = settings
            .builder()
            .and_then(|builder| builder.entropy(self.entropy.entropy()).build())
            .map_err(CliError::from)?;

        Ok(CommandContext {
            generator,
            format: self.format,
        })
    }
}

/// Shared state for command execution.
pub struct CommandContext {
    pub generator: IdGenerator<String>,
    pub format: OutputFormat,
}
