//! Directory-backed store
//!
//! Serves a directory on disk through the [`AssetStore`] interface. The
//! directory is expected not to change while an index built over it is alive.

use crate::error::{StoreError, StoreResult};
use crate::store::{io_error, AssetStore, DirEntry};
use crate::tree::path;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only view of a directory tree
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at `root`, which must be an existing directory
    pub fn new(root: impl AsRef<Path>) -> StoreResult<Self> {
        let display = root.as_ref().display().to_string();
        let root = dunce::canonicalize(root.as_ref()).map_err(|e| io_error(&display, e))?;
        if !root.is_dir() {
            return Err(StoreError::NotADirectory(display));
        }
        Ok(Self { root })
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> StoreResult<(String, PathBuf)> {
        let clean = path::clean_verbatim_path(path)?;
        let mut full = self.root.clone();
        for segment in clean.split(path::SEPARATOR).filter(|s| !s.is_empty()) {
            full.push(segment);
        }
        Ok((clean, full))
    }

    fn resolve_file(&self, path: &str) -> StoreResult<(String, PathBuf)> {
        let (clean, full) = self.resolve(path)?;
        let metadata = fs::metadata(&full).map_err(|e| io_error(&clean, e))?;
        if metadata.is_dir() {
            return Err(StoreError::IsADirectory(clean));
        }
        Ok((clean, full))
    }
}

impl AssetStore for DirStore {
    type File = fs::File;

    fn open(&self, path: &str) -> StoreResult<fs::File> {
        let (clean, full) = self.resolve_file(path)?;
        fs::File::open(&full).map_err(|e| io_error(&clean, e))
    }

    fn read_file(&self, path: &str) -> StoreResult<Vec<u8>> {
        let (clean, full) = self.resolve_file(path)?;
        fs::read(&full).map_err(|e| io_error(&clean, e))
    }

    fn read_dir(&self, path: &str) -> StoreResult<Vec<DirEntry>> {
        let (clean, full) = self.resolve(path)?;
        let metadata = fs::metadata(&full).map_err(|e| io_error(&clean, e))?;
        if !metadata.is_dir() {
            return Err(StoreError::NotADirectory(clean));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&full).map_err(|e| io_error(&clean, e))? {
            let entry = entry.map_err(|e| io_error(&clean, e))?;
            let name = entry.file_name().into_string().map_err(|raw| {
                StoreError::InvalidPath(format!("Non UTF-8 entry in {:?}: {:?}", clean, raw))
            })?;

            // Follow symlinks so links to files behave like files
            let metadata = fs::metadata(entry.path())
                .map_err(|e| io_error(&path::join_path(&clean, &name), e))?;
            if metadata.is_dir() {
                entries.push(DirEntry::dir(name));
            } else {
                entries.push(DirEntry::file(name, metadata.len()));
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
