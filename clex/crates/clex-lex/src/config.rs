//! Scanner configuration.
//!
//! [`ScanConfig`] can be built in code or read from TOML. Every field has a
//! default, so an empty document is a valid configuration:
//!
//! ```toml
//! error_mode = "collect"
//! unicode_identifiers = false
//! skip_bom = true
//! max_errors = 100
//! ```
//!
//! Reading the document from disk is left to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on collected errors.
pub const DEFAULT_MAX_ERRORS: usize = 100;

/// Errors raised while loading or saving a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value outside its range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// What the scanner does after a lexical error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stop at the first error.
    #[default]
    FailFast,
    /// Report the error, skip the rejected text and keep scanning.
    Collect,
}

/// Scanner options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Error policy.
    #[serde(default)]
    pub error_mode: ErrorMode,

    /// Accept Unicode letters and digits in identifiers.
    #[serde(default)]
    pub unicode_identifiers: bool,

    /// Treat a leading byte-order mark as trivia.
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// In collect mode, stop scanning after this many errors.
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_errors() -> usize {
    DEFAULT_MAX_ERRORS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::default(),
            unicode_identifiers: false,
            skip_bom: true,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl ScanConfig {
    /// Default options with errors collected instead of fatal.
    pub fn collect() -> Self {
        Self {
            error_mode: ErrorMode::Collect,
            ..Self::default()
        }
    }

    /// Set the error policy.
    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Allow or forbid Unicode identifiers.
    pub fn with_unicode_identifiers(mut self, enabled: bool) -> Self {
        self.unicode_identifiers = enabled;
        self
    }

    /// Set the collected error cap.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Returns true if errors are collected.
    pub fn collects_errors(&self) -> bool {
        self.error_mode == ErrorMode::Collect
    }

    /// Checks field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_errors == 0 {
            return Err(ConfigError::Invalid(
                "max_errors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::{ErrorMode, ScanConfig};
    ///
    /// let config = ScanConfig::from_toml_str("error_mode = \"collect\"").unwrap();
    /// assert_eq!(config.error_mode, ErrorMode::Collect);
    /// assert!(config.skip_bom);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
