//! Depth-first walker over an asset store

use crate::error::IndexError;
use crate::store::AssetStore;
use crate::tree::entry::TreeEntry;
use tracing::error;

/// Counts gathered during a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

/// Recursive walker over the directories of a store
///
/// Starts at the store root (empty root path) and descends into every
/// directory, carrying the parent's full path as the root path of its
/// children. Any listing failure aborts the walk.
pub struct Walker<'a, S: AssetStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: AssetStore + ?Sized> Walker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Walk the whole store, calling `visit` for every file entry
    pub fn walk<F>(&self, mut visit: F) -> Result<WalkSummary, IndexError>
    where
        F: FnMut(&TreeEntry) -> Result<(), IndexError>,
    {
        let mut summary = WalkSummary::default();
        self.walk_dir("", &mut visit, &mut summary)?;
        Ok(summary)
    }

    fn walk_dir<F>(
        &self,
        root_path: &str,
        visit: &mut F,
        summary: &mut WalkSummary,
    ) -> Result<(), IndexError>
    where
        F: FnMut(&TreeEntry) -> Result<(), IndexError>,
    {
        let entries = self.store.read_dir(root_path).map_err(|e| {
            error!(path = %root_path, "Failed to list directory: {}", e);
            IndexError::Store(e)
        })?;
        summary.directories += 1;

        for dir_entry in &entries {
            let entry = TreeEntry::from_dir_entry(dir_entry, root_path);
            if entry.is_dir() {
                self.walk_dir(&entry.full_path(), visit, summary)?;
            } else {
                summary.files += 1;
                visit(&entry)?;
            }
        }

        Ok(())
    }
}
