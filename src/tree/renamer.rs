//! Renamers build the synthetic path for a hashed file

use crate::error::StrategyError;
use crate::tree::entry::TreeEntry;
use crate::tree::path;

/// Strategy that turns an entry and its digest into a synthetic path
pub trait FileRenamer: Send + Sync {
    fn rename(&self, entry: &TreeEntry, digest: &str) -> Result<String, StrategyError>;
}

impl<F> FileRenamer for F
where
    F: Fn(&TreeEntry, &str) -> Result<String, StrategyError> + Send + Sync,
{
    fn rename(&self, entry: &TreeEntry, digest: &str) -> Result<String, StrategyError> {
        self(entry, digest)
    }
}

/// Inject the digest before the extension
///
/// `my/path/test.css` -> `my/path/test.$digest.css`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionRenamer;

impl FileRenamer for ExtensionRenamer {
    fn rename(&self, entry: &TreeEntry, digest: &str) -> Result<String, StrategyError> {
        let (stem, ext) = entry.name_and_extension();
        let name = with_extension(&format!("{}.{}", stem, digest), ext);
        Ok(path::join_path(entry.root_path(), &name))
    }
}

/// Replace the stem with the digest
///
/// `my/path/test.css` -> `my/path/$digest.css`
#[derive(Debug, Clone, Copy, Default)]
pub struct FullNameRenamer;

impl FileRenamer for FullNameRenamer {
    fn rename(&self, entry: &TreeEntry, digest: &str) -> Result<String, StrategyError> {
        let (_, ext) = entry.name_and_extension();
        Ok(path::join_path(entry.root_path(), &with_extension(digest, ext)))
    }
}

fn with_extension(base: &str, ext: &str) -> String {
    if ext.is_empty() {
        base.to_string()
    } else {
        format!("{}.{}", base, ext)
    }
}
