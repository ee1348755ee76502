//! Hashembed: Content-Hashed Access to Embedded Assets
//!
//! Wraps an immutable asset tree and makes every qualifying file reachable
//! through a second, content-hashed path (`app.js` -> `app.<digest>.js`).
//! Because the name changes whenever the content does, hashed assets can be
//! served with very long client-side cache lifetimes.
//!
//! The index is built once by [`HashedFs::generate`]; afterwards
//! [`HashedFs::forward`] and [`HashedFs::reverse`] translate between the two
//! names, and reads through either name hit the same bytes.

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod store;
pub mod tree;

pub use config::{AssetConfig, ConfigLoader, HashConfig, HasherKind, RenamerKind};
pub use error::{ConfigLoadError, IndexError, StoreError, StoreResult, StrategyError};
pub use fs::HashedFs;
pub use manifest::{AssetManifest, ManifestEntry};
pub use store::{AssetStore, DirEntry, DirStore, MemoryFile, MemoryStore, MemoryStoreBuilder};
pub use tree::entry::TreeEntry;
pub use tree::hasher::{Blake3Hasher, Crc32Hasher, FileHasher, Sha256Hasher};
pub use tree::renamer::{ExtensionRenamer, FileRenamer, FullNameRenamer};
