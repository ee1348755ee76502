//! Merge rules: defaults first, then file, then environment.

use crate::config::DEFAULT_ALLOWED_EXTENSIONS;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with the default values applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let extensions: Vec<String> = DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect();

    Config::builder()
        .set_default("hasher", "sha256")?
        .set_default("renamer", "extension")?
        .set_default("integrity", true)?
        .set_default("allowed_extensions", extensions)
}
