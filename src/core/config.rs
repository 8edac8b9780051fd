//! Configuration file management.
//!
//! Handles reading, writing, and validating `.stagehand.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::AppName;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.stagehand.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Application identity
    pub app: App,
    /// Required environment keys
    #[serde(default)]
    pub env: EnvSpec,
    /// Secret store selection
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[app]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Application name, the first segment of every secret identifier
    pub name: AppName,
    /// AWS region for the Secrets Manager client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// `[env]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvSpec {
    /// Keys that must be present and non-empty, in check order.
    ///
    /// Empty means the resolved secret is used verbatim.
    #[serde(default)]
    pub required: Vec<String>,
}

/// `[store]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Secret file for the `file` backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Secret store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Aws,
    File,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::File => "file",
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub app: Option<AppName>,
    pub region: Option<String>,
    pub required: Vec<String>,
    pub store_file: Option<PathBuf>,
}

impl Config {
    /// Create a configuration for `app` with no required keys and the AWS backend
    pub fn new(app: impl Into<AppName>) -> Self {
        Self {
            app: App {
                name: app.into(),
                region: None,
            },
            env: EnvSpec::default(),
            store: StoreConfig::default(),
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.stagehand.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load and validate configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            app = %config.app.name,
            required = config.env.required.len(),
            backend = config.store.backend.name(),
            "config loaded"
        );

        config.validate()?;
        Ok(config)
    }

    /// Load the config file if present, then apply command-line overrides.
    ///
    /// A missing file is fine as long as `--app` supplies the name.
    pub fn load_with(overrides: Overrides) -> Result<Self> {
        let mut config = if Self::exists() {
            Self::load()?
        } else {
            match &overrides.app {
                Some(app) => Self::new(app.clone()),
                None => return Err(ConfigError::NotInitialized.into()),
            }
        };

        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides in place. Required keys are appended, skipping ones
    /// already listed.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(app) = overrides.app {
            self.app.name = app;
        }
        if let Some(region) = overrides.region {
            self.app.region = Some(region);
        }
        for key in overrides.required {
            if !self.env.required.contains(&key) {
                self.env.required.push(key);
            }
        }
        if let Some(path) = overrides.store_file {
            self.store.backend = Backend::File;
            self.store.path = Some(path);
        }
    }

    /// Save configuration to `.stagehand.toml`
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - App name is non-empty and has no `/`
    /// - Required keys are valid environment variable names, without duplicates
    /// - The file backend has a path
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        validation::validate_app_name(&self.app.name)?;

        if let Some(region) = &self.app.region {
            if region.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "app.region",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        validation::validate_required_keys(&self.env.required)?;

        if self.store.backend == Backend::File && self.store.path.is_none() {
            return Err(ConfigError::MissingField { field: "store.path" }.into());
        }

        Ok(())
    }
}
