//! Configuration file loading.
//!
//! The file holds a [`GeneratorConfig`] in TOML. Without `--config`, the
//! platform config directory is checked for `pfxid.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pfx_id::GeneratorConfig;
use tracing::debug;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "pfxid.toml";

/// Kind and prefix used when nothing else is configured.
pub const FALLBACK_PREFIX: (&str, &str) = ("user", "u");

/// Get the default config file path.
fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "pfxid", "pfxid").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load config from `path`, or from the default location if it exists.
///
/// An explicit path must exist.
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                debug!("No config file found, using defaults");
                return Ok(GeneratorConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;

    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config from {:?}", path))?;

    debug!(path = %path.display(), kinds = config.prefixes.len(), "Config loaded");
    Ok(config)
}

/// Parse a `KIND=PREFIX` flag value.
pub fn parse_prefix(arg: &str) -> Result<(String, String), CliError> {
    match arg.split_once('=') {
        Some((kind, prefix)) if !kind.is_empty() => Ok((kind.to_string(), prefix.to_string())),
        _ => Err(CliError::InvalidPrefixArg(arg.to_string())),
    }
}

/// Fill in the fallback prefix table when none was configured.
pub fn with_fallback_prefixes(mut config: GeneratorConfig) -> GeneratorConfig {
    if config.prefixes.is_empty() {
        let (kind, prefix) = FALLBACK_PREFIX;
        config.prefixes.insert(kind.to_string(), prefix.to_string());
    }
    config
}
