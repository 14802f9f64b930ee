use std::fs;

use site_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("public");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn writes_nested_routes_and_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("events/page/2/index.html", "one").unwrap();
    assert_eq!(first, temp.path().join("events/page/2/index.html"));
    assert_eq!(fs::read_to_string(&first).unwrap(), "one");

    let second = writer.write("events/page/2/index.html", "two").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "two");

    let leftovers: Vec<_> = fs::read_dir(temp.path().join("events/page/2"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn refuses_paths_outside_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("site");
    let writer = AtomicFileWriter::new(root);

    for bad in ["../escape.html", "/etc/index.html", ""] {
        let err = writer.write(bad, "x").unwrap_err();
        assert!(matches!(err, PersistError::InvalidPath(_)), "{bad}");
    }
    assert!(!temp.path().join("escape.html").exists());
}

#[test]
fn no_partial_file_when_root_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("index.html", "data").is_err());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
