//! Lexer for layout expressions.
//!
//! Rules are tried in order at the current offset; the first one that matches
//! wins and consumes its whole (greedy) match. Whitespace is elided.

use std::fmt;

use regex::Regex;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident,
    /// `[0-9]+`
    Number,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `>`
    GreaterThan,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// Matched by the lexer but never emitted.
    Whitespace,
}

/// A single token with its kind, text, and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    /// True for tokens usable as a level name or count.
    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Ident | TokenKind::Number)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})@{}", self.kind, self.text, self.position)
    }
}

/// Ordered lexer rules.
pub struct Lexer {
    rules: Vec<(TokenKind, Regex)>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        let rules = [
            (TokenKind::Ident, r"^[a-zA-Z_][a-zA-Z0-9_]*"),
            (TokenKind::Number, r"^[0-9]+"),
            (TokenKind::Colon, r"^:"),
            (TokenKind::Comma, r"^,"),
            (TokenKind::GreaterThan, r"^>"),
            (TokenKind::OpenBracket, r"^\["),
            (TokenKind::CloseBracket, r"^\]"),
            (TokenKind::Whitespace, r"^\s+"),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("static token pattern")))
        .collect();

        Self { rules }
    }

    /// Split `input` into tokens, dropping whitespace.
    ///
    /// Fails on the first character no rule matches.
    #[instrument(level = "trace", skip(self))]
    pub fn tokenize(&self, input: &str) -> DomainResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < input.len() {
            let rest = &input[position..];
            let (kind, len) = self
                .rules
                .iter()
                .find_map(|(kind, re)| re.find(rest).map(|m| (*kind, m.end())))
                .ok_or_else(|| {
                    let found = rest.chars().next().map(|c| format!("'{c}'")).unwrap_or_default();
                    DomainError::syntax(position, "a name, count or one of ': , > [ ]'", found)
                })?;

            if kind != TokenKind::Whitespace {
                let token = Token {
                    kind,
                    text: rest[..len].to_string(),
                    position,
                };
                trace!("token: {}", token);
                tokens.push(token);
            }
            position += len;
        }

        Ok(tokens)
    }
}

/// Tokenize with a freshly built lexer.
pub fn tokenize(input: &str) -> DomainResult<Vec<Token>> {
    Lexer::new().tokenize(input)
}
