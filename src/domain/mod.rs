//! Domain layer: layout language and directory tree expansion
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod ast;
pub mod count;
pub mod error;
pub mod parser;
pub mod render;
pub mod token;
pub mod tree;

pub use ast::{Expression, Level, Part};
pub use count::{Count, CountError};
pub use error::{DomainError, DomainResult};
pub use parser::{parse, Parser};
pub use render::ToTermTree;
pub use token::{tokenize, Lexer, Token, TokenKind};
pub use tree::{build_directory_tree, expand, DirectoryTree};
