//! Tests for the RealFileSystem implementation

use dirlayout::infrastructure::traits::{FileSystem, RealFileSystem};
use tempfile::TempDir;

#[test]
fn given_nested_path_when_create_dir_all_then_creates_parents() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b").join("c");
    let fs = RealFileSystem;

    fs.create_dir_all(&nested).unwrap();

    assert!(fs.is_dir(&nested));
    assert!(fs.exists(&temp.path().join("a")));
}

#[test]
fn given_existing_directory_when_create_dir_all_then_succeeds() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;

    fs.create_dir_all(temp.path()).unwrap();
    fs.create_dir_all(temp.path()).unwrap();

    assert!(fs.is_dir(temp.path()));
}

#[test]
fn given_file_when_checking_is_dir_then_false() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.txt");
    std::fs::write(&file, "x").unwrap();
    let fs = RealFileSystem;

    assert!(fs.exists(&file));
    assert!(!fs.is_dir(&file));
    assert!(fs.create_dir_all(&file).is_err());
}
