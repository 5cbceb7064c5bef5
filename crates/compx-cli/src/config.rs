//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config` flag
//! 2. `$COMPX_CONFIG` environment variable
//! 3. `~/.config/compx/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use compx_core::constants::DEFAULT_ROUND;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rounding: RoundingConfig,
}

/// Equality precision settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    /// Decimal places both sides of a comparison are floored to (0..=13).
    pub default_round: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            default_round: DEFAULT_ROUND,
        }
    }
}

impl Config {
    /// Push the configured precision into the process-wide setting.
    pub fn apply(&self) -> Result<()> {
        compx_core::set_default_round(self.rounding.default_round)
            .context("invalid [rounding] default_round")?;
        tracing::debug!(
            default_round = self.rounding.default_round,
            "applied rounding config"
        );
        Ok(())
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit);

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    if let Ok(p) = std::env::var("COMPX_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("compx").join("config.toml"))
}

/// Show the active config path (for `compx config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    match config_path(explicit) {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
