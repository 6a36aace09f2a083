use std::fs;
use std::path::Path;

use tempfile::tempdir;

use crate::config::RunMode;
use crate::registry::catalog;

/// Tests discovery against a root directory that does not exist.
///
/// Expected: empty sequence, no panic
#[test]
fn returns_empty_for_missing_root() {
    let paths = catalog::discover(
        Path::new("/definitely/not/a/real/handler/dir"),
        RunMode::Development,
    );

    assert!(paths.is_empty());
}

/// Tests recursive discovery of the development manifest family.
///
/// Expected: toml files found at every depth, json files ignored
#[test]
fn discovers_matching_files_recursively() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("welcome.toml"), "").unwrap();
    fs::write(dir.path().join("welcome.json"), "").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("farewell.toml"), "").unwrap();
    fs::write(dir.path().join("nested").join("notes.txt"), "").unwrap();

    let paths = catalog::discover(dir.path(), RunMode::Development);

    assert_eq!(paths.len(), 2);
    assert!(paths
        .iter()
        .all(|p| p.extension().and_then(|e| e.to_str()) == Some("toml")));
    assert!(paths.iter().any(|p| p.ends_with("nested/farewell.toml")));
}

/// Tests that production mode selects the json family instead.
///
/// Expected: only json files returned
#[test]
fn production_mode_selects_json_family() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("welcome.toml"), "").unwrap();
    fs::write(dir.path().join("welcome.json"), "").unwrap();
    fs::write(dir.path().join("farewell.json"), "").unwrap();

    let paths = catalog::discover(dir.path(), RunMode::Production);

    assert_eq!(paths.len(), 2);
    assert!(paths
        .iter()
        .all(|p| p.extension().and_then(|e| e.to_str()) == Some("json")));
}

/// Tests deterministic traversal order.
///
/// Expected: files returned sorted by file name within a directory
#[test]
fn returns_deterministic_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("c.toml"), "").unwrap();
    fs::write(dir.path().join("a.toml"), "").unwrap();
    fs::write(dir.path().join("b.toml"), "").unwrap();

    let paths = catalog::discover(dir.path(), RunMode::Development);

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.toml", "b.toml", "c.toml"]);
}
