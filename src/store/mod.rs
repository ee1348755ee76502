//! Immutable Asset Store
//!
//! The read-only byte store the index is built over. Paths are slash-separated
//! and relative; the root directory is addressed by `""` or `"."`.
//!
//! Two backends ship with the crate. [`MemoryStore`] holds an in-memory
//! snapshot, which is the embedded-asset case. [`DirStore`] reads a directory
//! on disk and is mostly useful during development.

pub mod dir;
pub mod memory;

pub use dir::DirStore;
pub use memory::{MemoryFile, MemoryStore, MemoryStoreBuilder};

use crate::error::{StoreError, StoreResult};
use std::io::Read;
use std::sync::Arc;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name of the entry
    pub name: String,
    pub is_dir: bool,
    /// Content length in bytes (0 for directories)
    pub len: u64,
}

impl DirEntry {
    pub fn file(name: impl Into<String>, len: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            len,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            len: 0,
        }
    }
}

/// Read-only store interface
///
/// Implementations must be safe for concurrent reads; nothing in this crate
/// ever writes through a store.
pub trait AssetStore: Send + Sync {
    /// Readable handle returned by [`AssetStore::open`]
    type File: Read + Send;

    /// Open a file for streaming reads
    fn open(&self, path: &str) -> StoreResult<Self::File>;

    /// Read the full content of a file
    fn read_file(&self, path: &str) -> StoreResult<Vec<u8>>;

    /// List a directory, in the store's natural order
    fn read_dir(&self, path: &str) -> StoreResult<Vec<DirEntry>>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    type File = S::File;

    fn open(&self, path: &str) -> StoreResult<Self::File> {
        (**self).open(path)
    }

    fn read_file(&self, path: &str) -> StoreResult<Vec<u8>> {
        (**self).read_file(path)
    }

    fn read_dir(&self, path: &str) -> StoreResult<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    type File = S::File;

    fn open(&self, path: &str) -> StoreResult<Self::File> {
        (**self).open(path)
    }

    fn read_file(&self, path: &str) -> StoreResult<Vec<u8>> {
        (**self).read_file(path)
    }

    fn read_dir(&self, path: &str) -> StoreResult<Vec<DirEntry>> {
        (**self).read_dir(path)
    }
}

/// Map an I/O error at `path` to a store error, keeping `NotFound` distinct
pub(crate) fn io_error(path: &str, err: std::io::Error) -> StoreError {
    if err.kind() == std::io::ErrorKind::NotFound {
        StoreError::NotFound(path.to_string())
    } else {
        StoreError::Io {
            path: path.to_string(),
            source: err,
        }
    }
}
