//! pfxid - generate prefixed random identifiers from the command line.
//!
//! Configuration is read from a TOML file, environment variables and flags,
//! in increasing order of precedence.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
