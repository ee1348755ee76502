//! Path normalization and splitting utilities for slash-separated store paths

use crate::error::StoreError;
use unicode_normalization::UnicodeNormalization;

/// Separator used by every store path, regardless of platform.
pub const SEPARATOR: char = '/';

/// Normalize a path string for lookups (without store access)
///
/// Normalizes Unicode to NFC and removes trailing slashes (except root).
pub fn normalize_path_string(path: &str) -> String {
    let normalized: String = path.nfc().collect();

    let mut result = normalized;
    if result.len() > 1 {
        while result.ends_with(SEPARATOR) {
            result.pop();
        }
    }

    result
}

/// Clean a store path into its canonical relative form
///
/// This function:
/// 1. Normalizes Unicode to NFC
/// 2. Drops empty and `.` segments (so `./a//b/` becomes `a/b`)
/// 3. Rejects `..` segments
///
/// The store root cleans to the empty string.
pub fn clean_store_path(path: &str) -> Result<String, StoreError> {
    clean_segments(&normalize_path_string(path), path)
}

/// Clean a path without touching its Unicode form
///
/// Filesystems may hold names in any normalization form, so paths that are
/// resolved on disk keep the exact code points they were listed with.
pub fn clean_verbatim_path(path: &str) -> Result<String, StoreError> {
    clean_segments(path, path)
}

fn clean_segments(path: &str, original: &str) -> Result<String, StoreError> {
    let mut segments = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(StoreError::InvalidPath(format!(
                    "Parent segments are not allowed: {}",
                    original
                )))
            }
            other => segments.push(other),
        }
    }

    Ok(segments.join("/"))
}

/// Join a root path and an entry name; an empty root yields just the name.
pub fn join_path(root: &str, name: &str) -> String {
    if root.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", root, SEPARATOR, name)
    }
}

/// Split a base name into `(stem, extension)` on the last dot.
///
/// The extension is returned without its dot. A name without a dot has an
/// empty extension; `.hidden` splits into `("", "hidden")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => (name, ""),
    }
}
