//! Properties of the forward/reverse tables over generated trees

use hashembed::{
    Crc32Hasher, FullNameRenamer, HashConfig, HashedFs, MemoryStore, Sha256Hasher,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Generated files: path -> content. Directories never contain a dot and
/// file names always do, so no path is both a file and a directory.
fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let dir = prop::collection::vec("[a-z]{1,5}", 0..3).prop_map(|parts| parts.join("/"));
    let name = "[a-z0-9_]{1,8}";
    let ext = prop::sample::select(vec!["css", "js", "png", "txt", "html"]);
    let content = prop::collection::vec(any::<u8>(), 0..64);

    prop::collection::btree_map(
        (dir, name, ext).prop_map(|(dir, name, ext)| {
            let file = format!("{}.{}", name, ext);
            if dir.is_empty() {
                file
            } else {
                format!("{}/{}", dir, file)
            }
        }),
        content,
        1..16,
    )
}

fn build_store(files: &BTreeMap<String, Vec<u8>>) -> MemoryStore {
    files
        .iter()
        .fold(MemoryStore::builder(), |builder, (path, content)| {
            builder.file(path.clone(), content)
        })
        .build()
        .unwrap()
}

fn is_allowed(path: &str) -> bool {
    ["css", "js", "png"].iter().any(|ext| path.ends_with(&format!(".{}", ext)))
}

proptest! {
    #[test]
    fn round_trip_for_indexed_paths(files in tree_strategy()) {
        let assets = HashedFs::generate(build_store(&files)).unwrap();

        for (path, content) in &files {
            let hashed = assets.reverse(path);
            if is_allowed(path) {
                prop_assert_ne!(hashed, path.as_str());
                prop_assert_eq!(assets.forward(hashed), path.as_str());
                prop_assert_eq!(&assets.read_file(hashed).unwrap(), content);
                prop_assert!(!assets.integrity(path).is_empty());
            } else {
                prop_assert_eq!(hashed, path.as_str());
                prop_assert_eq!(assets.integrity(path), "");
            }
        }
    }

    #[test]
    fn disallowed_extensions_never_indexed(files in tree_strategy()) {
        let assets = HashedFs::generate(build_store(&files)).unwrap();
        let expected = files.keys().filter(|p| is_allowed(p)).count();

        prop_assert_eq!(assets.len(), expected);
        for (original, hashed) in assets.iter() {
            prop_assert!(is_allowed(original));
            prop_assert!(is_allowed(hashed));
        }
    }

    #[test]
    fn unknown_paths_are_identity(files in tree_strategy(), probe in "zz_[a-z]{1,8}/[a-z]{1,8}\\.(css|js)") {
        let config = HashConfig::new().with_hasher(Crc32Hasher).with_renamer(FullNameRenamer);
        let assets = HashedFs::generate_with(build_store(&files), &config).unwrap();

        prop_assert_eq!(assets.forward(&probe), probe.as_str());
        prop_assert_eq!(assets.reverse(&probe), probe.as_str());
        prop_assert_eq!(assets.integrity(&probe), "");
    }

    #[test]
    fn generation_is_deterministic(files in tree_strategy()) {
        let config = HashConfig::new().with_hasher(Sha256Hasher);
        let first = HashedFs::generate_with(build_store(&files), &config).unwrap();
        let second = HashedFs::generate_with(build_store(&files), &config).unwrap();

        prop_assert_eq!(first.manifest(), second.manifest());
    }
}
