//! Abstract syntax tree for layout expressions.

use std::fmt;

use itertools::Itertools;

/// A `>`-separated sequence of parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    pub parts: Vec<Part>,
}

/// One unit of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// `name` or `name:count`
    Level(Level),
    /// `[expr, expr, ...]`
    List(Vec<Expression>),
}

/// A named directory, optionally fanned out by a count.
///
/// The count is kept as raw text; whether it is a repeat or a letter range
/// is decided during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    pub count: Option<String>,
}

impl Expression {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Level {
    pub fn new(name: impl Into<String>, count: Option<&str>) -> Self {
        Self {
            name: name.into(),
            count: count.map(str::to_string),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join(" > "))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Level(level) => write!(f, "{level}"),
            Part::List(items) => write!(f, "[{}]", items.iter().join(", ")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.count {
            Some(count) => write!(f, "{}:{}", self.name, count),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_expression_when_displayed_then_renders_canonical_text() {
        let expr = Expression::new(vec![
            Part::List(vec![
                Expression::new(vec![
                    Part::Level(Level::new("a", Some("2"))),
                    Part::Level(Level::new("x", None)),
                ]),
                Expression::new(vec![Part::Level(Level::new("b", None))]),
            ]),
            Part::Level(Level::new("c", None)),
        ]);

        assert_eq!(expr.to_string(), "[a:2 > x, b] > c");
    }

    #[test]
    fn given_default_expression_then_is_empty() {
        assert!(Expression::default().is_empty());
        assert_eq!(Expression::default().to_string(), "");
    }
}
