//! dirlayout: generate directory trees from a one-line layout expression
//!
//! `site:2 > [src, docs > img]` expands to `site 1/src`, `site 1/docs/img`,
//! `site 2/src` and `site 2/docs/img`.
//!
//! Architecture:
//! - `domain`: layout language (lexer, parser, AST) and tree expansion, pure
//! - `application`: services wiring domain logic to the filesystem
//! - `infrastructure`: I/O boundary traits and DI container
//! - `cli`: argument parsing and command dispatch
//! - `config`: layered settings

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build_directory_tree, expand, parse, DirectoryTree, DomainError, Expression};
