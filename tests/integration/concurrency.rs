//! Shared read access to a built index

use super::test_utils::*;
use hashembed::HashedFs;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_lookups_and_reads() {
    let assets = Arc::new(HashedFs::generate(embedded_store()).unwrap());
    let hashed = assets.reverse("testdata/test.css").to_string();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let assets = Arc::clone(&assets);
            let hashed = hashed.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(assets.forward(&hashed), "testdata/test.css");
                    assert_eq!(assets.read_file(&hashed).unwrap(), TEST_CSS.as_bytes());
                    assert_eq!(assets.integrity("testdata/test.css"), TEST_CSS_INTEGRITY);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
