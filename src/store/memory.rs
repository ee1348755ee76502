//! In-memory immutable store
//!
//! Holds a complete snapshot of an asset tree. Build it from bytes compiled
//! into the binary (`include_bytes!`) or load a directory once at startup.

use crate::error::{StoreError, StoreResult};
use crate::store::{io_error, AssetStore, DirEntry};
use crate::tree::path;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Read-only in-memory asset tree
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, Arc<[u8]>>,
    /// Directory path -> listing sorted by name. The root is `""`.
    dirs: BTreeMap<String, Vec<DirEntry>>,
}

impl MemoryStore {
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }

    /// Snapshot a directory on disk, with its contents at the store root
    pub fn from_dir(dir: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_dir_at(dir, "")
    }

    /// Snapshot a directory on disk, with its contents mounted under `mount`
    ///
    /// `from_dir_at("assets", "static")` makes `assets/app.js` readable as
    /// `static/app.js`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn from_dir_at(dir: impl AsRef<Path>, mount: &str) -> StoreResult<Self> {
        let dir = dir.as_ref();
        let mut builder = Self::builder();
        if !mount.is_empty() {
            builder = builder.dir(mount);
        }

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| dir.display().to_string());
                io_error(&at, e.into())
            })?;
            if entry.depth() == 0 {
                continue;
            }

            let relative = relative_store_path(dir, entry.path())?;
            let store_path = path::join_path(mount, &relative);

            if entry.file_type().is_dir() {
                builder = builder.dir(store_path);
            } else if entry.file_type().is_file() {
                let content = std::fs::read(entry.path())
                    .map_err(|e| io_error(&entry.path().display().to_string(), e))?;
                builder = builder.file(store_path, content);
            }
        }

        let store = builder.build()?;
        debug!(file_count = store.len(), "Loaded directory snapshot");
        Ok(store)
    }

    /// Number of files in the store
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn lookup_file(&self, path: &str) -> StoreResult<(String, &Arc<[u8]>)> {
        let clean = path::clean_store_path(path)?;
        match self.files.get(&clean) {
            Some(data) => Ok((clean, data)),
            None if self.dirs.contains_key(&clean) => Err(StoreError::IsADirectory(clean)),
            None => Err(StoreError::NotFound(clean)),
        }
    }
}

impl AssetStore for MemoryStore {
    type File = MemoryFile;

    fn open(&self, path: &str) -> StoreResult<MemoryFile> {
        let (clean, data) = self.lookup_file(path)?;
        let name = match clean.rsplit_once(path::SEPARATOR) {
            Some((_, name)) => name.to_string(),
            None => clean,
        };
        Ok(MemoryFile {
            name,
            cursor: Cursor::new(Arc::clone(data)),
        })
    }

    fn read_file(&self, path: &str) -> StoreResult<Vec<u8>> {
        let (_, data) = self.lookup_file(path)?;
        Ok(data.to_vec())
    }

    fn read_dir(&self, path: &str) -> StoreResult<Vec<DirEntry>> {
        let clean = path::clean_store_path(path)?;
        match self.dirs.get(&clean) {
            Some(entries) => Ok(entries.clone()),
            None if self.files.contains_key(&clean) => Err(StoreError::NotADirectory(clean)),
            None => Err(StoreError::NotFound(clean)),
        }
    }
}

/// Builder for [`MemoryStore`]
///
/// Paths are validated in [`MemoryStoreBuilder::build`]; parent directories
/// are created implicitly.
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    files: Vec<(String, Arc<[u8]>)>,
    dirs: Vec<String>,
}

impl MemoryStoreBuilder {
    /// Add a file; a later file with the same path replaces an earlier one
    pub fn file(mut self, path: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.files.push((path.into(), Arc::from(content.as_ref())));
        self
    }

    /// Add a (possibly empty) directory
    pub fn dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.push(path.into());
        self
    }

    pub fn build(self) -> StoreResult<MemoryStore> {
        let mut files: BTreeMap<String, Arc<[u8]>> = BTreeMap::new();
        let mut dir_paths: BTreeSet<String> = BTreeSet::new();
        dir_paths.insert(String::new());

        for (raw, data) in self.files {
            let clean = path::clean_store_path(&raw)?;
            if clean.is_empty() {
                return Err(StoreError::InvalidPath(format!(
                    "File path must not be the store root: {:?}",
                    raw
                )));
            }
            insert_ancestors(&clean, &mut dir_paths);
            files.insert(clean, data);
        }

        for raw in self.dirs {
            let clean = path::clean_store_path(&raw)?;
            insert_ancestors(&clean, &mut dir_paths);
            dir_paths.insert(clean);
        }

        if let Some(conflict) = dir_paths.iter().find(|d| files.contains_key(*d)) {
            return Err(StoreError::InvalidPath(format!(
                "Path is both a file and a directory: {}",
                conflict
            )));
        }

        let mut dirs: BTreeMap<String, Vec<DirEntry>> = dir_paths
            .iter()
            .map(|d| (d.clone(), Vec::new()))
            .collect();

        for dir in dir_paths.iter().filter(|d| !d.is_empty()) {
            let (parent, name) = split_parent(dir);
            if let Some(listing) = dirs.get_mut(parent) {
                listing.push(DirEntry::dir(name));
            }
        }
        for (file, data) in &files {
            let (parent, name) = split_parent(file);
            if let Some(listing) = dirs.get_mut(parent) {
                listing.push(DirEntry::file(name, data.len() as u64));
            }
        }
        for listing in dirs.values_mut() {
            listing.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(MemoryStore { files, dirs })
    }
}

/// Readable handle onto a file held by a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    cursor: Cursor<Arc<[u8]>>,
}

impl MemoryFile {
    /// Base name of the opened file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total content length in bytes
    pub fn len(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.cursor.seek(pos)
    }
}

fn split_parent(path: &str) -> (&str, &str) {
    match path.rsplit_once(path::SEPARATOR) {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

fn insert_ancestors(path: &str, dirs: &mut BTreeSet<String>) {
    let mut current = path;
    while let Some((parent, _)) = current.rsplit_once(path::SEPARATOR) {
        dirs.insert(parent.to_string());
        current = parent;
    }
}

fn relative_store_path(root: &Path, full: &Path) -> StoreResult<String> {
    let relative = full.strip_prefix(root).map_err(|_| {
        StoreError::InvalidPath(format!("{} is outside {}", full.display(), root.display()))
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        let segment = component.as_os_str().to_str().ok_or_else(|| {
            StoreError::InvalidPath(format!("Non UTF-8 path: {}", full.display()))
        })?;
        segments.push(segment);
    }
    Ok(segments.join("/"))
}
