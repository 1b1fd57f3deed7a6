pub mod config;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use lw_domain::config::Config;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "LW_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Literary works — an in-memory catalog served over HTTP.
#[derive(Debug, Parser)]
#[command(name = "literary-works", version, about)]
pub struct Cli {
    /// Enable debug logging (same as `server.debug = true`).
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path in `LW_CONFIG` (or `config.toml`
/// by default).  Returns the parsed [`Config`] and the path that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = load_config_from(Path::new(&config_path))?;
    Ok((config, config_path))
}

/// Parse `path` as TOML, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
