/*
Read-only views of parsed and expanded layouts as termtree trees,
used by the CLI's --ast and --preview output.
 */
use termtree::Tree;

use crate::domain::ast::{Expression, Part};
use crate::domain::tree::DirectoryTree;

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for Expression {
    fn to_term_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.parts.iter().map(|p| p.to_term_tree()).collect();
        Tree::new("expression".to_string()).with_leaves(leaves)
    }
}

impl ToTermTree for Part {
    fn to_term_tree(&self) -> Tree<String> {
        match self {
            Part::Level(level) => Tree::new(format!("level {level}")),
            Part::List(items) => {
                let leaves: Vec<_> = items.iter().map(|e| e.to_term_tree()).collect();
                Tree::new("list".to_string()).with_leaves(leaves)
            }
        }
    }
}

impl ToTermTree for DirectoryTree {
    fn to_term_tree(&self) -> Tree<String> {
        let root = if self.is_container() {
            ".".to_string()
        } else {
            self.name.trim().to_string()
        };
        Tree::new(root).with_leaves(self.child_trees())
    }
}

impl DirectoryTree {
    /// Render with `label` as the root, e.g. the output directory.
    pub fn to_term_tree_with_root(&self, label: impl Into<String>) -> Tree<String> {
        Tree::new(label.into()).with_leaves(self.child_trees())
    }

    fn child_trees(&self) -> Vec<Tree<String>> {
        // Nested containers are transparent, lift their children
        let mut leaves = Vec::new();
        for child in &self.children {
            if child.is_container() {
                leaves.extend(child.child_trees());
            } else {
                leaves.push(child.to_term_tree());
            }
        }
        leaves
    }
}
