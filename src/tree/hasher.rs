//! Content hashers used to derive synthetic asset names
//!
//! A hasher maps file bytes to a digest string. The indexer does not care
//! about the digest's format or length, so any implementation of
//! [`FileHasher`] (including a plain closure) can be plugged in.

use crate::error::StrategyError;
use sha2::{Digest, Sha256};

/// Strategy that turns file content into a digest string
pub trait FileHasher: Send + Sync {
    /// Hash the full content of a file
    fn hash(&self, content: &[u8]) -> Result<String, StrategyError>;

    /// Short algorithm name, e.g. `sha256`
    fn algorithm(&self) -> &str;
}

impl<F> FileHasher for F
where
    F: Fn(&[u8]) -> Result<String, StrategyError> + Send + Sync,
{
    fn hash(&self, content: &[u8]) -> Result<String, StrategyError> {
        self(content)
    }

    fn algorithm(&self) -> &str {
        "custom"
    }
}

/// SHA-256 over the full content, lowercase hex (64 chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl FileHasher for Sha256Hasher {
    fn hash(&self, content: &[u8]) -> Result<String, StrategyError> {
        Ok(hex::encode(compute_sha256(content)))
    }

    fn algorithm(&self) -> &str {
        "sha256"
    }
}

/// IEEE CRC-32 checksum, lowercase hex without zero padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Hasher;

impl FileHasher for Crc32Hasher {
    fn hash(&self, content: &[u8]) -> Result<String, StrategyError> {
        Ok(format!("{:x}", crc32fast::hash(content)))
    }

    fn algorithm(&self) -> &str {
        "crc32"
    }
}

/// BLAKE3 over the full content, lowercase hex (64 chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl FileHasher for Blake3Hasher {
    fn hash(&self, content: &[u8]) -> Result<String, StrategyError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(content);
        Ok(hasher.finalize().to_hex().to_string())
    }

    fn algorithm(&self) -> &str {
        "blake3"
    }
}

/// Compute the raw SHA-256 digest of file bytes
///
/// Shared by [`Sha256Hasher`] and the integrity table.
pub fn compute_sha256(content: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.finalize().into()
}
