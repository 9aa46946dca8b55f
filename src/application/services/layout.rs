//! Layout service
//!
//! Turns a layout string into a directory tree and creates it on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{expand, parse, DirectoryTree};
use crate::infrastructure::traits::FileSystem;

/// Outcome of materializing a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Directories created by this run, in walk order
    pub created: Vec<PathBuf>,
    /// Directories that were already present
    pub existing: usize,
}

impl MaterializeReport {
    /// All directories the tree maps to, created or not.
    pub fn total(&self) -> usize {
        self.created.len() + self.existing
    }
}

/// Service for planning and creating directory layouts.
pub struct LayoutService {
    fs: Arc<dyn FileSystem>,
}

impl LayoutService {
    /// Create a new layout service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse and expand a layout string without touching the filesystem.
    #[instrument(level = "debug", skip(self))]
    pub fn plan(&self, layout: &str) -> ApplicationResult<DirectoryTree> {
        let expr = parse(layout)?;
        debug!("plan: parsed {} parts", expr.parts.len());
        let tree = expand(&expr)?;
        debug!("plan: {} directories, depth {}", tree.dir_count(), tree.depth());
        Ok(tree)
    }

    /// Plan a layout and create it under `base`.
    pub fn apply(&self, layout: &str, base: &Path) -> ApplicationResult<MaterializeReport> {
        let tree = self.plan(layout)?;
        self.materialize(&tree, base)
    }

    /// Create every directory of `tree` under `base`, depth first.
    ///
    /// Existing directories are left alone, so re-running is a no-op.
    /// Stops at the first failure; directories created before it are kept.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn materialize(&self, tree: &DirectoryTree, base: &Path) -> ApplicationResult<MaterializeReport> {
        let mut report = MaterializeReport::default();
        self.materialize_node(tree, base, &mut report)?;
        info!(
            "materialize: created {} directories, {} already present",
            report.created.len(),
            report.existing
        );
        Ok(report)
    }

    fn materialize_node(
        &self,
        node: &DirectoryTree,
        base: &Path,
        report: &mut MaterializeReport,
    ) -> ApplicationResult<()> {
        let path = if node.is_container() {
            base.to_path_buf()
        } else {
            let dir = base.join(node.name.trim());
            if self.fs.is_dir(&dir) {
                report.existing += 1;
            } else {
                self.fs
                    .create_dir_all(&dir)
                    .with_path_context("create directory", &dir)?;
                debug!("created: {}", dir.display());
                report.created.push(dir.clone());
            }
            dir
        };

        for child in &node.children {
            self.materialize_node(child, &path, report)?;
        }
        Ok(())
    }
}
