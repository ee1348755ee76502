//! Property-based tests for hasher determinism

use hashembed::{Blake3Hasher, Crc32Hasher, FileHasher, Sha256Hasher};
use proptest::prelude::*;

/// Test that every built-in hasher is deterministic
#[test]
fn test_hasher_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let hashers: [&dyn FileHasher; 3] = [&Sha256Hasher, &Crc32Hasher, &Blake3Hasher];

    runner
        .run(&any::<Vec<u8>>(), |content| {
            for hasher in hashers {
                let first = hasher.hash(&content).unwrap();
                let second = hasher.hash(&content).unwrap();
                prop_assert_eq!(first, second);
            }
            Ok(())
        })
        .unwrap();
}

/// Test that strong digests differ for different content
#[test]
fn test_sha256_distinguishes_content_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>()),
            |(content1, content2)| {
                prop_assume!(content1 != content2);
                let hash1 = Sha256Hasher.hash(&content1).unwrap();
                let hash2 = Sha256Hasher.hash(&content2).unwrap();
                prop_assert_ne!(hash1, hash2);
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    #[test]
    fn crc32_digest_is_unpadded_lowercase_hex(content in any::<Vec<u8>>()) {
        let digest = Crc32Hasher.hash(&content).unwrap();
        prop_assert!(!digest.is_empty() && digest.len() <= 8);
        prop_assert!(digest == "0" || !digest.starts_with('0'));
        prop_assert_eq!(u32::from_str_radix(&digest, 16).unwrap(), crc32fast::hash(&content));
    }
}
