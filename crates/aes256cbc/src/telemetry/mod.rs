//! Tracing subscriber setup.
//!
//! Logs go to standard error so that standard output carries nothing but the
//! cipher result.
//!
//! # Telemetry invariants
//!
//! - **No key, IV, plaintext or recovered text** may appear in any span or
//!   log field. Lengths and the mode are fine.
//! - Level is set by `AES256CBC_LOG_LEVEL` (default `warn`); a valid
//!   `RUST_LOG` overrides it.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialise the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the configured level is invalid or a subscriber has
/// already been set.
pub fn init(cfg: &Config) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(rust_log.as_deref(), &cfg.log_level)?;

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    let installed = if cfg.json_logs() {
        builder.json().try_init()
    } else {
        builder.without_time().try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))?;

    if let Some(reason) = rejected {
        debug!(%reason, "ignoring invalid RUST_LOG, using AES256CBC_LOG_LEVEL");
    }
    Ok(())
}

/// Pick `RUST_LOG` when it parses, else the configured level.
///
/// The second element carries the parse error of a rejected `RUST_LOG`.
fn select_filter(rust_log: Option<&str>, log_level: &str) -> Result<(EnvFilter, Option<String>)> {
    let rejected = match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => return Ok((filter, None)),
        Some(Err(e)) => Some(e.to_string()),
        None => None,
    };
    let filter = EnvFilter::try_new(log_level)
        .map_err(|e| anyhow::anyhow!("invalid log level {log_level:?}: {e}"))?;
    Ok((filter, rejected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_used_without_rust_log() {
        let (filter, rejected) = select_filter(None, "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
        assert!(rejected.is_none());
    }

    #[test]
    fn valid_rust_log_wins() {
        let (filter, rejected) = select_filter(Some("debug"), "warn").unwrap();
        assert_eq!(filter.to_string(), "debug");
        assert!(rejected.is_none());
    }

    #[test]
    fn invalid_rust_log_falls_back_with_reason() {
        let (filter, rejected) = select_filter(Some("aes256cbc=loud"), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
        assert!(rejected.is_some());
    }

    #[test]
    fn invalid_configured_level_is_error() {
        assert!(select_filter(None, "aes256cbc=loud").is_err());
    }
}
