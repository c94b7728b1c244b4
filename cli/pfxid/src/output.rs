//! Output formatting for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// A prefix table row.
#[derive(Debug, Serialize)]
pub struct KindRow<'a> {
    pub kind: &'a str,
    pub prefix: &'a str,
}

/// Result of the `encode` command.
#[derive(Debug, Serialize)]
pub struct Encoded<'a> {
    pub input: &'a str,
    pub encoded: &'a str,
}

/// Print generated identifiers.
pub fn print_ids(ids: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for id in ids {
                println!("{}", id);
            }
        }
        OutputFormat::Json => println!("{}", format_json(ids, "[]")),
    }
}

/// Print the prefix table.
pub fn print_kinds(rows: &[KindRow<'_>], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let width = rows.iter().map(|row| row.kind.len()).max().unwrap_or(0);
            for row in rows {
                println!("{:<width$}  {}", row.kind, row.prefix, width = width);
            }
        }
        OutputFormat::Json => println!("{}", format_json(rows, "[]")),
    }
}

/// Print an encoding result.
pub fn print_encoded(result: &Encoded<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", result.encoded),
        OutputFormat::Json => println!("{}", format_json(result, "{}")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}
