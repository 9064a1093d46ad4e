//! Logging configuration loaded from the environment.
//!
//! Only diagnostics are configurable. The cipher operation itself takes all of
//! its inputs from positional arguments.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "AES256CBC";

/// Validated logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing filter directive (e.g. `"warn"`, `"aes256cbc=debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format: `"text"` or `"json"`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".into()
}
fn default_log_format() -> String {
    "text".into()
}

impl Config {
    /// Load and validate configuration from `AES256CBC_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Whether log lines should be emitted as JSON objects.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("{ENV_PREFIX}_LOG_LEVEL must not be empty");
        }
        if !matches!(self.log_format.as_str(), "text" | "json") {
            anyhow::bail!(
                "{ENV_PREFIX}_LOG_FORMAT must be \"text\" or \"json\", got {:?}",
                self.log_format
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(log_level: &str, log_format: &str) -> Config {
        Config {
            log_level: log_level.into(),
            log_format: log_format.into(),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_log_level(), "warn");
        assert_eq!(default_log_format(), "text");
    }

    #[test]
    fn validate_accepts_known_formats() {
        assert!(cfg("info", "text").validate().is_ok());
        assert!(cfg("aes256cbc=debug", "json").validate().is_ok());
        assert!(cfg("info", "json").json_logs());
        assert!(!cfg("info", "text").json_logs());
    }

    #[test]
    fn validate_rejects_unknown_format() {
        assert!(cfg("info", "yaml").validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_level() {
        assert!(cfg("  ", "text").validate().is_err());
    }
}
