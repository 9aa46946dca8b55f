//! Directory tree value and the expansion of an [`Expression`] into it.

use std::path::PathBuf;

use tracing::{debug, instrument, trace};

use crate::domain::ast::{Expression, Level, Part};
use crate::domain::count::Count;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::parser::parse;

/// Ordered tree of directory names.
///
/// A node with an empty name is a container: it groups its children without
/// becoming a directory itself. Every node exclusively owns its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    pub name: String,
    pub children: Vec<DirectoryTree>,
}

impl DirectoryTree {
    /// A named node without children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// An unnamed node grouping `children`.
    pub fn container(children: Vec<DirectoryTree>) -> Self {
        Self {
            name: String::new(),
            children,
        }
    }

    pub fn is_container(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of directory levels below and including this node.
    /// Containers do not count as a level.
    pub fn depth(&self) -> usize {
        let own = usize::from(!self.is_container());
        own + self.children.iter().map(DirectoryTree::depth).max().unwrap_or(0)
    }

    /// Number of directories this tree materializes.
    pub fn dir_count(&self) -> usize {
        let own = usize::from(!self.is_container());
        own + self.children.iter().map(DirectoryTree::dir_count).sum::<usize>()
    }

    /// Relative paths of all leaves in depth-first order, names trimmed.
    pub fn leaf_paths(&self) -> Vec<PathBuf> {
        let mut leaves = Vec::new();
        self.collect_leaves(PathBuf::new(), &mut leaves);
        leaves
    }

    fn collect_leaves(&self, base: PathBuf, leaves: &mut Vec<PathBuf>) {
        let path = if self.is_container() {
            base
        } else {
            base.join(self.name.trim())
        };

        if self.children.is_empty() {
            if !self.is_container() {
                leaves.push(path);
            }
        } else {
            for child in &self.children {
                child.collect_leaves(path.clone(), leaves);
            }
        }
    }
}

/// Hang `subtree` under every leaf reachable from `nodes`.
///
/// Each leaf gets its own copy; the last leaf takes ownership of the original.
fn attach_to_leaves(nodes: &mut [DirectoryTree], subtree: Vec<DirectoryTree>) {
    let mut stack: Vec<&mut DirectoryTree> = nodes.iter_mut().rev().collect();
    let mut leaves = Vec::new();
    while let Some(node) = stack.pop() {
        if node.children.is_empty() {
            leaves.push(node);
        } else {
            stack.extend(node.children.iter_mut().rev());
        }
    }

    if let Some((last, rest)) = leaves.split_last_mut() {
        for leaf in rest {
            leaf.children = subtree.clone();
        }
        last.children = subtree;
    }
}

/// Expand a parsed expression into a directory tree.
///
/// Returns a container whose children are the expansion of the first part,
/// with the expansion of the remaining parts attached under every leaf.
#[instrument(level = "debug", skip(expr), fields(parts = expr.parts.len()))]
pub fn expand(expr: &Expression) -> DomainResult<DirectoryTree> {
    let top = expand_parts(&expr.parts)?;
    debug!("expand: {} top nodes", top.len());
    Ok(DirectoryTree::container(top))
}

/// Expand every part left to right, then nest them right to left.
fn expand_parts(parts: &[Part]) -> DomainResult<Vec<DirectoryTree>> {
    let levels = parts.iter().map(expand_part).collect::<DomainResult<Vec<_>>>()?;

    let mut suffix: Option<Vec<DirectoryTree>> = None;
    for mut nodes in levels.into_iter().rev() {
        if let Some(rest) = suffix.take() {
            attach_to_leaves(&mut nodes, rest);
        }
        suffix = Some(nodes);
    }
    Ok(suffix.unwrap_or_default())
}

/// Expand a single part into its sibling nodes.
fn expand_part(part: &Part) -> DomainResult<Vec<DirectoryTree>> {
    match part {
        Part::Level(level) => expand_level(level),
        Part::List(items) => {
            let mut siblings = Vec::new();
            for item in items {
                siblings.extend(expand_parts(&item.parts)?);
            }
            Ok(siblings)
        }
    }
}

fn expand_level(level: &Level) -> DomainResult<Vec<DirectoryTree>> {
    let Some(raw) = &level.count else {
        return Ok(vec![DirectoryTree::leaf(&level.name)]);
    };

    let count = Count::interpret(raw).map_err(|reason| DomainError::Expansion {
        name: level.name.clone(),
        count: raw.clone(),
        reason: reason.to_string(),
    })?;
    trace!("expand_level: {} -> {:?}", level, count);

    Ok(count
        .labels()
        .into_iter()
        .map(|label| DirectoryTree::leaf(format!("{} {}", level.name, label)))
        .collect())
}

/// Parse and expand a layout string in one step.
pub fn build_directory_tree(input: &str) -> DomainResult<DirectoryTree> {
    let expr = parse(input)?;
    expand(&expr)
}
