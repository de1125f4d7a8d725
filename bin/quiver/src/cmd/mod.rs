//! CLI command implementations.

pub mod check;
pub mod route;
pub mod serve;
pub mod suggest;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use quiver_core::Config;

/// Load the configuration file, applying `QUIVER__` environment overrides.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        bail!("Configuration file not found: {}", path.display());
    }
    Config::load_with_env(path).wrap_err("Failed to load configuration")
}

/// Join command-line words into one query.
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}
