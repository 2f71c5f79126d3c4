//! Configuration module for s3t.
//!
//! Typed configuration mapped to the YAML file, with loading, validation,
//! defaults, and a builder for programmatic use. Command-line flags are
//! applied on top with [`Config::with_overrides`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration for s3t.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub aws: AwsConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the AWS client.
///
/// Every field is optional; unset fields fall back to the SDK's default
/// provider chain (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    /// Named profile from the shared AWS config files.
    pub profile: Option<String>,
    pub region: Option<String>,
    /// Custom endpoint, e.g. a local emulator.
    pub endpoint_url: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if the file exists.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
    pub fn load_if_present(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/s3t/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("s3t")
            .join("config.yaml")
    }

    /// Returns a copy with every `Some` override replacing the file value.
    pub fn with_overrides(mut self, overrides: AwsConfig) -> Self {
        if overrides.profile.is_some() {
            self.aws.profile = overrides.profile;
        }
        if overrides.region.is_some() {
            self.aws.region = overrides.region;
        }
        if overrides.endpoint_url.is_some() {
            self.aws.endpoint_url = overrides.endpoint_url;
        }
        self
    }
}

/// A single problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path to the offending field, e.g. `"aws.region"`.
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("aws.profile", &self.aws.profile),
            ("aws.region", &self.aws.region),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(ConfigValidationError {
                    field: field.into(),
                    message: "must not be empty when set".into(),
                });
            }
        }

        if let Some(url) = &self.aws.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(ConfigValidationError {
                    field: "aws.endpoint_url".into(),
                    message: format!("must start with http:// or https://, got '{url}'"),
                });
            }
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ConfigValidationError {
                field: "logging.level".into(),
                message: format!(
                    "must be one of {:?}, got '{}'",
                    VALID_LOG_LEVELS, self.logging.level
                ),
            });
        }

        errors
    }
}

/// Fluent builder for [`Config`].
///
/// # Example
///
/// ```
/// use s3t_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .aws_region("eu-west-1")
///     .logging_level("debug")
///     .build();
/// assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aws_profile(mut self, profile: impl Into<String>) -> Self {
        self.config.aws.profile = Some(profile.into());
        self
    }

    pub fn aws_region(mut self, region: impl Into<String>) -> Self {
        self.config.aws.region = Some(region.into());
        self
    }

    pub fn aws_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.aws.endpoint_url = Some(url.into());
        self
    }

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step.
    pub fn build_validated(self) -> Result<Config, Vec<ConfigValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}
