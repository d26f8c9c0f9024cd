//! Logging setup.
//!
//! Domain operations emit `tracing` events; this module installs a
//! subscriber that writes them to stderr.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `config.log_level`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// `RUST_LOG` if set and valid, then `config.log_level`, then `error`.
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"))
}
