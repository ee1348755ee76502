//! Asset Tree Indexing
//!
//! Walks an immutable store once and derives a content-hashed alias for every
//! qualifying file. Hashers and renamers are pluggable strategies.

pub mod builder;
pub mod entry;
pub mod hasher;
pub mod path;
pub mod renamer;
pub mod walker;
