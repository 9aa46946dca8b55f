//! Tests for LayoutService against the real filesystem

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use walkdir::WalkDir;

use dirlayout::application::services::LayoutService;
use dirlayout::application::ApplicationError;
use dirlayout::config::Settings;
use dirlayout::infrastructure::{RealFileSystem, ServiceContainer};

/// All directories under `root`, relative to it.
fn dirs_under(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn service() -> LayoutService {
    LayoutService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_layout_when_applying_then_creates_every_directory() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let report = service()
        .apply("[a:2 > x, b] > c", temp.path())
        .unwrap();

    // Assert
    let expected: BTreeSet<PathBuf> = [
        "a 1", "a 1/x", "a 1/x/c", "a 2", "a 2/x", "a 2/x/c", "b", "b/c",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(dirs_under(temp.path()), expected);
    assert_eq!(report.created.len(), 8);
}

#[test]
fn given_materialized_layout_when_applying_again_then_idempotent() {
    // Arrange
    let temp = TempDir::new().unwrap();
    service().apply("site:3 > tree:2 > [src, docs]", temp.path()).unwrap();
    let before = dirs_under(temp.path());

    // Act
    let report = service()
        .apply("site:3 > tree:2 > [src, docs]", temp.path())
        .unwrap();

    // Assert
    assert_eq!(dirs_under(temp.path()), before);
    assert!(report.created.is_empty());
    assert_eq!(report.existing, 3 + 6 + 12);
    assert_eq!(report.total(), before.len());
}

#[test]
fn given_missing_base_when_applying_then_creates_parents() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("not").join("yet");

    service().apply("leaf", &base).unwrap();

    assert!(base.join("leaf").is_dir());
}

#[test]
fn given_file_in_the_way_when_applying_then_reports_failing_path() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b"), "not a directory").unwrap();

    // Act
    let err = service().apply("[a, b, c]", temp.path()).unwrap_err();

    // Assert
    match err {
        ApplicationError::OperationFailed { path, .. } => assert_eq!(path, temp.path().join("b")),
        other => panic!("unexpected error: {other:?}"),
    }
    // a was created before the failure, c never attempted
    assert!(temp.path().join("a").is_dir());
    assert!(!temp.path().join("c").exists());
}

#[test]
fn given_container_when_applying_then_uses_settings_output_dir() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default().with_overrides(Some(temp.path().to_path_buf()), false);
    let container = ServiceContainer::new(settings);

    let service = container.layout_service();
    let tree = service.plan("x:2").unwrap();
    service.materialize(&tree, &container.settings.output_dir).unwrap();

    assert!(temp.path().join("x 1").is_dir());
    assert!(temp.path().join("x 2").is_dir());
}
