//! Integration tests for index determinism

use hashembed::{Crc32Hasher, DirStore, FullNameRenamer, HashConfig, HashedFs};
use std::fs;
use tempfile::TempDir;

fn write_tree(root: &std::path::Path) {
    fs::create_dir_all(root.join("css")).unwrap();
    fs::create_dir_all(root.join("js").join("vendor")).unwrap();
    fs::write(root.join("css").join("site.css"), "body {}").unwrap();
    fs::write(root.join("js").join("app.js"), "main()").unwrap();
    fs::write(root.join("js").join("vendor").join("lib.js"), "lib()").unwrap();
    fs::write(root.join("index.html"), "<html></html>").unwrap();
}

/// Test that the same tree produces the same index
#[test]
fn test_same_tree_same_index() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path());

    let first = HashedFs::generate(DirStore::new(temp_dir.path()).unwrap()).unwrap();
    let second = HashedFs::generate(DirStore::new(temp_dir.path()).unwrap()).unwrap();

    assert_eq!(first.manifest(), second.manifest());
    assert_eq!(first.len(), 3);
}

/// Test that a content change changes the synthetic path of that file only
#[test]
fn test_content_change_changes_only_that_path() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path());
    let before = HashedFs::generate(DirStore::new(temp_dir.path()).unwrap()).unwrap();

    fs::write(temp_dir.path().join("js").join("app.js"), "main(2)").unwrap();
    let after = HashedFs::generate(DirStore::new(temp_dir.path()).unwrap()).unwrap();

    assert_ne!(before.reverse("js/app.js"), after.reverse("js/app.js"));
    assert_eq!(before.reverse("css/site.css"), after.reverse("css/site.css"));
    assert_eq!(
        before.reverse("js/vendor/lib.js"),
        after.reverse("js/vendor/lib.js")
    );
}

/// Test that identical content in different directories keeps distinct aliases
#[test]
fn test_identical_content_in_different_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a").join("same.css"), "x").unwrap();
    fs::write(root.join("b").join("same.css"), "x").unwrap();

    let config = HashConfig::new()
        .with_hasher(Crc32Hasher)
        .with_renamer(FullNameRenamer);
    let assets = HashedFs::generate_with(DirStore::new(root).unwrap(), &config).unwrap();

    let a = assets.reverse("a/same.css");
    let b = assets.reverse("b/same.css");
    assert_ne!(a, b);
    assert_eq!(assets.forward(a), "a/same.css");
    assert_eq!(assets.forward(b), "b/same.css");
}
