//! Quiver CLI Library
//!
//! Developer tooling for the Quiver site runtime. The binary entry point
//! lives in `main.rs`; the commands are exposed here so they can be tested
//! and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, route, suggest, check)
//! - [`server`] - Development server with live reload
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use quiver::cmd;
//!
//! // Validate the site configuration
//! cmd::check::run(Path::new("quiver.toml"), false).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use quiver_core::{Config, QueryRouter, SuggestionGenerator};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
