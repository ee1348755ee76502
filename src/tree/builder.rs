//! Index builder: hashes qualifying files and records their synthetic paths

use crate::config::HashConfig;
use crate::error::IndexError;
use crate::store::AssetStore;
use crate::tree::entry::TreeEntry;
use crate::tree::hasher;
use crate::tree::walker::Walker;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Lookup tables produced by one indexing pass
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    /// synthetic path -> original path
    forward: HashMap<String, String>,
    /// original path -> synthetic path
    reverse: HashMap<String, String>,
    /// original path -> base64 SHA-256 of the content
    integrity: HashMap<String, String>,
    /// Name of the hasher that produced the synthetic names
    algorithm: String,
}

impl PathIndex {
    /// Synthetic -> original lookup
    pub fn forward(&self, path: &str) -> Option<&str> {
        self.forward.get(path).map(String::as_str)
    }

    /// Original -> synthetic lookup
    pub fn reverse(&self, path: &str) -> Option<&str> {
        self.reverse.get(path).map(String::as_str)
    }

    /// Original -> integrity digest lookup
    pub fn integrity(&self, path: &str) -> Option<&str> {
        self.integrity.get(path).map(String::as_str)
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Number of indexed original paths
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Iterate over `(original, synthetic)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.reverse
            .iter()
            .map(|(original, hashed)| (original.as_str(), hashed.as_str()))
    }
}

/// Builds a [`PathIndex`] from a store in a single synchronous pass
pub struct IndexBuilder<'a> {
    config: &'a HashConfig,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(config: &'a HashConfig) -> Self {
        Self { config }
    }

    /// Walk the store and build the lookup tables
    ///
    /// Any store, hasher or renamer failure aborts the pass; a partial index
    /// is never returned. When two files map to the same synthetic path the
    /// last one written wins.
    #[instrument(skip_all, fields(hasher = %self.config.hasher().algorithm()))]
    pub fn build<S: AssetStore + ?Sized>(&self, store: &S) -> Result<PathIndex, IndexError> {
        let start = Instant::now();
        info!("Starting asset index build");

        let mut index = PathIndex {
            algorithm: self.config.hasher().algorithm().to_string(),
            ..PathIndex::default()
        };
        let mut skipped = 0usize;

        let summary = Walker::new(store).walk(|entry| {
            let (_, ext) = entry.name_and_extension();
            if !self.config.allows_extension(ext) {
                debug!(path = %entry.full_path(), "Skipping file with unlisted extension");
                skipped += 1;
                return Ok(());
            }
            self.index_file(store, entry, &mut index)
        })?;

        let duration = start.elapsed();
        info!(
            directories = summary.directories,
            files = summary.files,
            indexed = index.len(),
            skipped,
            duration_ms = duration.as_millis(),
            "Asset index build completed"
        );

        Ok(index)
    }

    fn index_file<S: AssetStore + ?Sized>(
        &self,
        store: &S,
        entry: &TreeEntry,
        index: &mut PathIndex,
    ) -> Result<(), IndexError> {
        let full_path = entry.full_path();

        let content = store.read_file(&full_path).map_err(|e| {
            error!(path = %full_path, "Failed to read file: {}", e);
            IndexError::Store(e)
        })?;

        let digest = self
            .config
            .hasher()
            .hash(&content)
            .map_err(|source| IndexError::Hasher {
                path: full_path.clone(),
                source,
            })?;

        let hashed_path = self
            .config
            .renamer()
            .rename(entry, &digest)
            .map_err(|source| IndexError::Renamer {
                path: full_path.clone(),
                source,
            })?;
        trace!(path = %full_path, hashed = %hashed_path, "Hashed file");

        if self.config.integrity_enabled() {
            let integrity = BASE64.encode(hasher::compute_sha256(&content));
            index.integrity.insert(full_path.clone(), integrity);
        }

        if let Some(previous) = index.forward.insert(hashed_path.clone(), full_path.clone()) {
            debug!(
                hashed = %hashed_path,
                previous = %previous,
                current = %full_path,
                "Synthetic path collision, keeping the later file"
            );
        }
        index.reverse.insert(full_path, hashed_path);

        Ok(())
    }
}
