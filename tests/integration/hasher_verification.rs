//! Hasher Implementation Verification Tests
//!
//! Verifies the built-in hashers against their reference crates and checks
//! that the synthetic names they produce follow the content.

use super::test_utils::*;
use hashembed::{Blake3Hasher, Crc32Hasher, FileHasher, HashConfig, HashedFs, Sha256Hasher};
use sha2::{Digest, Sha256};

/// Test that the SHA-256 hasher matches sha2 directly
#[test]
fn test_sha256_matches_sha2() {
    let content = TEST_CSS.as_bytes();

    let mut reference = Sha256::new();
    reference.update(content);
    let expected = hex::encode(reference.finalize());

    assert_eq!(Sha256Hasher.hash(content).unwrap(), expected);
    assert_eq!(expected, TEST_CSS_SHA256);
}

/// Test that the CRC-32 hasher matches crc32fast directly
#[test]
fn test_crc32_matches_crc32fast() {
    let content = TEST_CSS.as_bytes();
    let expected = format!("{:x}", crc32fast::hash(content));

    assert_eq!(Crc32Hasher.hash(content).unwrap(), expected);
    assert_eq!(expected, TEST_CSS_CRC32);
}

/// Test that the BLAKE3 hasher matches blake3 directly
#[test]
fn test_blake3_matches_blake3() {
    let content = TEST_CSS.as_bytes();

    let mut reference = blake3::Hasher::new();
    reference.update(content);
    let expected = reference.finalize().to_hex().to_string();

    assert_eq!(Blake3Hasher.hash(content).unwrap(), expected);
}

/// Test that digests have the documented shape
#[test]
fn test_digest_format() {
    let content = b"any content at all";

    let sha = Sha256Hasher.hash(content).unwrap();
    assert_eq!(sha.len(), 64);
    assert!(sha.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let crc = Crc32Hasher.hash(content).unwrap();
    assert!(!crc.is_empty() && crc.len() <= 8);
    assert!(crc.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

/// Test that the blake3 hasher drives synthetic names end to end
#[test]
fn test_blake3_synthetic_names() {
    let config = HashConfig::new().with_hasher(Blake3Hasher);
    let assets = HashedFs::generate_with(embedded_store(), &config).unwrap();

    let expected = format!(
        "testdata/test.{}.css",
        blake3::hash(TEST_CSS.as_bytes()).to_hex()
    );
    assert_eq!(assets.reverse("testdata/test.css"), expected);
    assert_eq!(assets.algorithm(), "blake3");
}
