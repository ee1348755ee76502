//! Serializable export of an asset index
//!
//! Build steps and HTTP layers often want the original -> hashed mapping as a
//! JSON document (an "asset manifest") rather than a live index.

use crate::tree::builder::PathIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of original paths to their hashed aliases, sorted by original path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Hasher that produced the synthetic names
    pub algorithm: String,
    pub assets: BTreeMap<String, ManifestEntry>,
}

/// One indexed asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub hashed: String,
    /// Base64 SHA-256 of the content, when the integrity table is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
}

impl AssetManifest {
    pub fn from_index(index: &PathIndex) -> Self {
        let assets = index
            .iter()
            .map(|(original, hashed)| {
                let entry = ManifestEntry {
                    hashed: hashed.to_string(),
                    integrity: index.integrity(original).map(str::to_string),
                };
                (original.to_string(), entry)
            })
            .collect();

        Self {
            algorithm: index.algorithm().to_string(),
            assets,
        }
    }

    /// Hashed alias of an original path
    pub fn hashed(&self, original: &str) -> Option<&str> {
        self.assets.get(original).map(|entry| entry.hashed.as_str())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
