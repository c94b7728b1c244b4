//! Error handling and display for the CLI.

use colored::Colorize;
use pfx_id::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --prefix {0:?}: expected KIND=PREFIX")]
    InvalidPrefixArg(String),

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Id(#[from] IdError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };

    match cli_err {
        CliError::Id(IdError::UnknownKind(_)) => {
            eprintln!(
                "\n{}",
                "Hint: Run `pfxid kinds` to list configured kinds.".yellow()
            );
        }
        CliError::Id(id_err) if id_err.is_configuration() => {
            eprintln!(
                "\n{}",
                "Hint: Check --alphabet, --size, --prefix and the config file.".yellow()
            );
        }
        CliError::InvalidPrefixArg(_) => {
            eprintln!("\n{}", "Hint: Use --prefix user=u".yellow());
        }
        _ => {}
    }
}
