//! Configuration System
//!
//! Two layers:
//!
//! - [`HashConfig`] is what the indexer consumes: live hasher and renamer
//!   strategies plus the extension allow-list.
//! - [`AssetConfig`] is the declarative form (TOML file, environment), which
//!   names built-in strategies and resolves into a [`HashConfig`].
//!
//! Any field left unset takes its default.

use crate::error::ConfigLoadError;
use crate::tree::hasher::{Blake3Hasher, Crc32Hasher, FileHasher, Sha256Hasher};
use crate::tree::renamer::{ExtensionRenamer, FileRenamer, FullNameRenamer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod loader;
mod merge;
mod sources;

pub use loader::{ConfigLoader, ENV_PREFIX};

/// Extensions given a synthetic name when none are configured
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &["js", "json", "png", "bmp", "jpeg", "jpg", "css", "ico"];

/// Runtime configuration for building an index
#[derive(Clone)]
pub struct HashConfig {
    hasher: Arc<dyn FileHasher>,
    renamer: Arc<dyn FileRenamer>,
    allowed_extensions: Vec<String>,
    integrity: bool,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            hasher: Arc::new(Sha256Hasher),
            renamer: Arc::new(ExtensionRenamer),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            integrity: true,
        }
    }
}

impl HashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hasher used to name files
    pub fn with_hasher<H: FileHasher + 'static>(mut self, hasher: H) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    /// Set a shared hasher
    pub fn with_shared_hasher(mut self, hasher: Arc<dyn FileHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Set the renamer that builds synthetic paths
    pub fn with_renamer<R: FileRenamer + 'static>(mut self, renamer: R) -> Self {
        self.renamer = Arc::new(renamer);
        self
    }

    /// Set a shared renamer
    pub fn with_shared_renamer(mut self, renamer: Arc<dyn FileRenamer>) -> Self {
        self.renamer = renamer;
        self
    }

    /// Replace the extension allow-list
    ///
    /// A leading dot is accepted and stripped (`.css` == `css`). Empty values
    /// and duplicates are dropped, first occurrence wins. Matching is
    /// case-sensitive. An empty list indexes nothing.
    pub fn with_allowed_extensions<I, T>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut allowed: Vec<String> = Vec::new();
        for ext in extensions {
            let ext: String = ext.into();
            let ext = ext.trim().trim_start_matches('.');
            if !ext.is_empty() && !allowed.iter().any(|a| a == ext) {
                allowed.push(ext.to_string());
            }
        }
        self.allowed_extensions = allowed;
        self
    }

    /// Enable or disable the integrity table
    pub fn with_integrity(mut self, enabled: bool) -> Self {
        self.integrity = enabled;
        self
    }

    pub fn hasher(&self) -> &dyn FileHasher {
        self.hasher.as_ref()
    }

    pub fn renamer(&self) -> &dyn FileRenamer {
        self.renamer.as_ref()
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn integrity_enabled(&self) -> bool {
        self.integrity
    }

    /// Whether files with this extension get a synthetic name
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.iter().any(|allowed| allowed == ext)
    }
}

impl fmt::Debug for HashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashConfig")
            .field("hasher", &self.hasher.algorithm())
            .field("allowed_extensions", &self.allowed_extensions)
            .field("integrity", &self.integrity)
            .finish_non_exhaustive()
    }
}

/// Built-in hashers selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    #[default]
    Sha256,
    Crc32,
    Blake3,
}

impl HasherKind {
    pub fn build(self) -> Arc<dyn FileHasher> {
        match self {
            HasherKind::Sha256 => Arc::new(Sha256Hasher),
            HasherKind::Crc32 => Arc::new(Crc32Hasher),
            HasherKind::Blake3 => Arc::new(Blake3Hasher),
        }
    }
}

/// Built-in renamers selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenamerKind {
    #[default]
    Extension,
    FullName,
}

impl RenamerKind {
    pub fn build(self) -> Arc<dyn FileRenamer> {
        match self {
            RenamerKind::Extension => Arc::new(ExtensionRenamer),
            RenamerKind::FullName => Arc::new(FullNameRenamer),
        }
    }
}

/// Declarative configuration
///
/// ```toml
/// hasher = "crc32"
/// renamer = "full-name"
/// allowed_extensions = ["css", "js"]
/// integrity = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default)]
    pub hasher: Option<HasherKind>,

    #[serde(default)]
    pub renamer: Option<RenamerKind>,

    /// Extensions given a synthetic name (defaults when unset)
    #[serde(default)]
    pub allowed_extensions: Option<Vec<String>>,

    /// Maintain the integrity table (default: true)
    #[serde(default)]
    pub integrity: Option<bool>,
}

impl AssetConfig {
    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigLoadError> {
        let config: AssetConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(extensions) = &self.allowed_extensions {
            for ext in extensions {
                let trimmed = ext.trim().trim_start_matches('.');
                if trimmed.is_empty() {
                    return Err(ConfigLoadError::Invalid(format!(
                        "Empty entry in allowed_extensions: {:?}",
                        ext
                    )));
                }
                if trimmed.contains('/') || trimmed.contains('.') {
                    return Err(ConfigLoadError::Invalid(format!(
                        "Extension must be a single name without separators or dots: {:?}",
                        ext
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve into a runtime configuration, filling unset fields with defaults
    pub fn into_hash_config(self) -> HashConfig {
        let mut config = HashConfig::default()
            .with_shared_hasher(self.hasher.unwrap_or_default().build())
            .with_shared_renamer(self.renamer.unwrap_or_default().build())
            .with_integrity(self.integrity.unwrap_or(true));

        if let Some(extensions) = self.allowed_extensions {
            config = config.with_allowed_extensions(extensions);
        }
        config
    }
}

impl From<AssetConfig> for HashConfig {
    fn from(config: AssetConfig) -> Self {
        config.into_hash_config()
    }
}
