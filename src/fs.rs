//! Hashed file system facade
//!
//! [`HashedFs`] wraps an immutable [`AssetStore`] together with the lookup
//! tables built from it. Every indexed file is readable both by its original
//! path and by its synthetic (content-hashed) path.
//!
//! ```
//! use hashembed::{HashedFs, MemoryStore};
//!
//! let store = MemoryStore::builder()
//!     .file("testdata/test.css", "body { width: 100%; }\n")
//!     .build()?;
//! let assets = HashedFs::generate(store)?;
//!
//! let hashed = assets.reverse("testdata/test.css");
//! assert_eq!(
//!     hashed,
//!     "testdata/test.8d77f04c3be2abcd554f262130ba6c30f277318e66588b6a0d95f476c4ae7c48.css"
//! );
//! assert_eq!(assets.forward(hashed), "testdata/test.css");
//! assert_eq!(assets.read_file(hashed)?, b"body { width: 100%; }\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::HashConfig;
use crate::error::{IndexError, StoreResult};
use crate::manifest::AssetManifest;
use crate::store::{AssetStore, DirEntry};
use crate::tree::builder::{IndexBuilder, PathIndex};

/// Content-hashed view over an immutable store
///
/// The tables are built once, at construction, and never change afterwards,
/// so a `HashedFs` can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct HashedFs<S> {
    store: S,
    index: PathIndex,
}

impl<S: AssetStore> HashedFs<S> {
    /// Index `store` with the default configuration
    pub fn generate(store: S) -> Result<Self, IndexError> {
        Self::generate_with(store, &HashConfig::default())
    }

    /// Index `store` with the given configuration
    pub fn generate_with(store: S, config: &HashConfig) -> Result<Self, IndexError> {
        let index = IndexBuilder::new(config).build(&store)?;
        Ok(Self { store, index })
    }

    /// Convert a synthetic path into the original path
    ///
    /// Paths that were never produced by indexing are returned unchanged.
    pub fn forward<'a>(&'a self, path: &'a str) -> &'a str {
        self.index.forward(path).unwrap_or(path)
    }

    /// Convert an original path into its synthetic path
    ///
    /// Paths that were not indexed are returned unchanged.
    pub fn reverse<'a>(&'a self, path: &'a str) -> &'a str {
        self.index.reverse(path).unwrap_or(path)
    }

    /// Base64 SHA-256 of an indexed original path, or `""` if untracked
    pub fn integrity(&self, path: &str) -> &str {
        self.index.integrity(path).unwrap_or("")
    }

    /// Value for an HTML `integrity` attribute, e.g. `sha256-jXfw...`
    pub fn integrity_attribute(&self, path: &str) -> Option<String> {
        self.index
            .integrity(path)
            .map(|digest| format!("sha256-{}", digest))
    }

    /// Open a file by original or synthetic path
    pub fn open(&self, name: &str) -> StoreResult<S::File> {
        self.store.open(self.forward(name))
    }

    /// Read a file by original or synthetic path
    pub fn read_file(&self, name: &str) -> StoreResult<Vec<u8>> {
        self.store.read_file(self.forward(name))
    }

    /// List a directory of the underlying store
    ///
    /// Listings are not hash-aware: only physical entries are returned.
    pub fn read_dir(&self, name: &str) -> StoreResult<Vec<DirEntry>> {
        self.store.read_dir(name)
    }

    /// Name of the hasher used for synthetic paths
    pub fn algorithm(&self) -> &str {
        self.index.algorithm()
    }

    /// Whether an original path was indexed
    pub fn contains(&self, original: &str) -> bool {
        self.index.reverse(original).is_some()
    }

    /// Number of indexed files
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over `(original, synthetic)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index.iter()
    }

    /// Export the index as a serializable manifest
    pub fn manifest(&self) -> AssetManifest {
        AssetManifest::from_index(&self.index)
    }

    pub fn index(&self) -> &PathIndex {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
