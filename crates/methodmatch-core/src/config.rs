//! Configuration file for methodmatch.
//!
//! ```toml
//! [settings]
//! presets = ["recommended"]
//! fail-on = "error"
//!
//! [[matcher]]
//! id = "no-exit"
//! types = ["java.lang.System"]
//! names = ["exit"]
//! any-parameters = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::declarative::{self, LoadError, MatcherGroup};
use crate::types::Severity;

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The `[settings]` table.
    pub settings: Settings,
    matchers: Vec<MatcherGroup>,
}

/// The `[settings]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Preset names or codes to enable. `None` leaves the choice to the caller.
    #[serde(default)]
    pub presets: Option<Vec<String>>,

    /// Severity threshold for a failing check (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFileDto {
    #[serde(default)]
    settings: Settings,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a `[[matcher]]` table
    /// does not build.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let dto: SettingsFileDto = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        let matchers = declarative::load_matchers_from_toml(content)?;
        Ok(Self {
            settings: dto.settings,
            matchers,
        })
    }

    /// Matcher groups declared in the file.
    #[must_use]
    pub fn matchers(&self) -> &[MatcherGroup] {
        &self.matchers
    }

    /// Threshold at which findings fail a check.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.settings.fail_on.unwrap_or(Severity::Error)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A `[[matcher]]` table is invalid.
    #[error("Invalid matcher definition: {0}")]
    Matchers(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.presets.is_none());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.matchers().is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[settings]
presets = ["security", "S3864"]
fail-on = "warning"

[[matcher]]
id = "no-exit"
types = ["java.lang.System"]
names = ["exit"]
any-parameters = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(
            config.settings.presets,
            Some(vec!["security".to_string(), "S3864".to_string()])
        );
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(config.matchers().len(), 1);
        assert_eq!(config.matchers()[0].id().as_str(), "no-exit");
    }

    #[test]
    fn test_bad_fail_on_is_parse_error() {
        let err = Config::parse("[settings]\nfail-on = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_bad_matcher_is_reported() {
        let err = Config::parse("[[matcher]]\nid = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Matchers(_)));
        assert!(err.to_string().contains("matcher[0]"));
    }
}
