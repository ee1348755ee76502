//! Tree entries annotated with the root path they were discovered under

use crate::store::DirEntry;
use crate::tree::path;

/// One node of the store (file or directory) together with its root path.
///
/// Renamers receive this to build synthetic paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    name: String,
    root_path: String,
    is_dir: bool,
}

impl TreeEntry {
    /// Create an entry from its base name and the root path it lives under
    pub fn new(name: impl Into<String>, root_path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            root_path: root_path.into(),
            is_dir,
        }
    }

    /// Wrap a store listing entry found under `root_path`
    pub fn from_dir_entry(entry: &DirEntry, root_path: &str) -> Self {
        Self::new(entry.name.clone(), root_path, entry.is_dir)
    }

    /// Base name of the entry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root path the entry was found under (empty at the tree root)
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Base name split into `(stem, extension)` on the last dot
    pub fn name_and_extension(&self) -> (&str, &str) {
        path::split_extension(&self.name)
    }

    /// Full store path of the entry
    pub fn full_path(&self) -> String {
        path::join_path(&self.root_path, &self.name)
    }
}
