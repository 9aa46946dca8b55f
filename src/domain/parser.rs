//! Recursive-descent parser for layout expressions.
//!
//! ```text
//! Expression := Part ( ">" Part )*
//! Part       := List | Level
//! List       := "[" Expression ( "," Expression )* "]"
//! Level      := Name ( ":" Count )?
//! ```

use tracing::{debug, instrument};

use crate::domain::ast::{Expression, Level, Part};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::token::{Lexer, Token, TokenKind};

const END_OF_INPUT: &str = "end of input";

/// Deepest bracket nesting accepted.
pub const MAX_DEPTH: usize = 256;

/// Parser over a token stream.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    /// Byte length of the source, reported for errors at EOF
    input_len: usize,
    /// Current bracket nesting
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, input_len: usize) -> Self {
        Self {
            tokens,
            position: 0,
            input_len,
            depth: 0,
        }
    }

    /// Parse a complete layout string. The whole input must be consumed.
    #[instrument(level = "debug")]
    pub fn parse(input: &str) -> DomainResult<Expression> {
        let tokens = Lexer::new().tokenize(input)?;
        debug!("parse: {} tokens", tokens.len());

        let mut parser = Parser::new(tokens, input.len());
        let expr = parser.parse_expression()?;

        if let Some(token) = parser.peek() {
            return Err(DomainError::syntax(
                token.position,
                "'>' or end of input",
                format!("'{}'", token.text),
            ));
        }
        Ok(expr)
    }

    fn parse_expression(&mut self) -> DomainResult<Expression> {
        let mut parts = vec![self.parse_part()?];
        while self.eat(TokenKind::GreaterThan).is_some() {
            parts.push(self.parse_part()?);
        }
        Ok(Expression::new(parts))
    }

    fn parse_part(&mut self) -> DomainResult<Part> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::OpenBracket) => self.parse_list(),
            Some(TokenKind::Ident | TokenKind::Number) => self.parse_level(),
            _ => Err(self.unexpected("a name or '['")),
        }
    }

    fn parse_list(&mut self) -> DomainResult<Part> {
        let open = self.expect(TokenKind::OpenBracket, "'['")?;
        if self.depth == MAX_DEPTH {
            return Err(DomainError::syntax(
                open.position,
                format!("nesting depth <= {MAX_DEPTH}"),
                "'['",
            ));
        }
        self.depth += 1;

        let mut items = vec![self.parse_expression()?];
        loop {
            if self.eat(TokenKind::Comma).is_some() {
                items.push(self.parse_expression()?);
            } else if self.eat(TokenKind::CloseBracket).is_some() {
                self.depth -= 1;
                return Ok(Part::List(items));
            } else {
                return Err(self.unexpected("',', '>' or ']'"));
            }
        }
    }

    fn parse_level(&mut self) -> DomainResult<Part> {
        let name = self.expect_word("a name")?;
        let count = match self.eat(TokenKind::Colon) {
            Some(_) => Some(self.expect_word("a count")?),
            None => None,
        };
        Ok(Part::Level(Level { name, count }))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.position += 1;
                Some(token)
            }
            _ => None,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> DomainResult<Token> {
        self.eat(kind).ok_or_else(|| self.unexpected(expected))
    }

    /// Consume an identifier or number and return its text.
    fn expect_word(&mut self, expected: &str) -> DomainResult<String> {
        match self.peek() {
            Some(token) if token.is_word() => {
                let text = token.text.clone();
                self.position += 1;
                Ok(text)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &str) -> DomainError {
        match self.peek() {
            Some(token) => DomainError::syntax(token.position, expected, format!("'{}'", token.text)),
            None => DomainError::syntax(self.input_len, expected, END_OF_INPUT),
        }
    }
}

/// Parse a layout string into an [`Expression`].
pub fn parse(input: &str) -> DomainResult<Expression> {
    Parser::parse(input)
}
