//! Layered configuration loading.
//!
//! Precedence (highest to lowest):
//! 1. Environment variables (`HASHEMBED_HASHER`, `HASHEMBED_RENAMER`,
//!    `HASHEMBED_INTEGRITY`, `HASHEMBED_ALLOWED_EXTENSIONS`)
//! 2. TOML config file
//! 3. Defaults

use super::{merge, sources, AssetConfig};
use crate::error::ConfigLoadError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "HASHEMBED";

/// Loads an [`AssetConfig`] from defaults, an optional file, and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            file: None,
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file if it exists
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read environment variables with this prefix instead of `HASHEMBED`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore the environment entirely
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Load from `path` (if present) and `HASHEMBED_*` variables
    pub fn load(path: impl AsRef<Path>) -> Result<AssetConfig, ConfigLoadError> {
        Self::new().with_file(path.as_ref()).load_config()
    }

    /// Build and validate the layered configuration
    pub fn load_config(&self) -> Result<AssetConfig, ConfigLoadError> {
        let mut builder = merge::builder_with_defaults()?;

        if let Some(file) = &self.file {
            builder = sources::add_file(builder, file)?;
        }
        if let Some(prefix) = &self.env_prefix {
            builder = sources::add_environment(builder, prefix)?;
        }

        let config: AssetConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            hasher = ?config.hasher,
            renamer = ?config.renamer,
            "Loaded asset configuration"
        );
        Ok(config)
    }
}
