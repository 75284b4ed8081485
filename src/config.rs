//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/animals/animals.toml`
//! 3. Environment variables: `ANIMALS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Animal known by a freshly created knowledge base.
pub const DEFAULT_ANIMAL: &str = "platypus";

/// Indentation of the saved knowledge base, in spaces.
pub const DEFAULT_INDENT: usize = 4;

/// Widest accepted indentation.
pub const MAX_INDENT: usize = 16;

/// Unified configuration for animals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Animal a new knowledge base starts with (default: "platypus")
    pub default_animal: String,
    /// Spaces per indentation level in the saved file (default: 4)
    pub indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_animal: DEFAULT_ANIMAL.into(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified, keep the lower layer".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_animal: Option<String>,
    pub indent: Option<usize>,
}

/// Get the XDG config directory for animals.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "animals").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("animals.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay values wins if specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_animal: overlay
                .default_animal
                .clone()
                .unwrap_or_else(|| self.default_animal.clone()),
            indent: overlay.indent.unwrap_or(self.indent),
        }
    }

    /// Load settings with layered precedence from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional TOML file taking the place of the global config;
    ///   skipped if it does not exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file`
    /// 3. Environment variables: `ANIMALS_*` prefix
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply ANIMALS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(Environment::with_prefix("ANIMALS"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("default_animal") {
            settings.default_animal = val;
        }
        if let Ok(val) = config.get_int("indent") {
            settings.indent = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("indent must not be negative: {val}"),
            })?;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.default_animal.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "default_animal must not be empty".to_string(),
            });
        }
        if self.indent > MAX_INDENT {
            return Err(ApplicationError::Config {
                message: format!("indent must be at most {MAX_INDENT}: {}", self.indent),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
