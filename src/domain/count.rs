//! Interpretation of a level's count.
//!
//! A count is either a digit run (repeat N times) or a single ASCII letter
//! (range from `a`/`A` up to that letter). The character class decides which,
//! not the length of the text.

use std::fmt;

/// Interpreted count of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// `name:N` fans out to `name 1` .. `name N`
    Repeat(usize),
    /// `name:c` fans out to `name a` .. `name c`
    Range { start: char, end: char },
}

/// Why a raw count could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// Digits that do not fit in `usize`
    TooLarge,
    /// Neither a digit run nor a single letter
    NotNumberOrLetter,
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::TooLarge => write!(f, "count is too large"),
            CountError::NotNumberOrLetter => {
                write!(f, "expected a non-negative integer or a single letter")
            }
        }
    }
}

impl Count {
    pub fn interpret(raw: &str) -> Result<Count, CountError> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<usize>()
                .map(Count::Repeat)
                .map_err(|_| CountError::TooLarge);
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(end), None) if end.is_ascii_lowercase() => Ok(Count::Range { start: 'a', end }),
            (Some(end), None) if end.is_ascii_uppercase() => Ok(Count::Range { start: 'A', end }),
            _ => Err(CountError::NotNumberOrLetter),
        }
    }

    /// Number of siblings this count produces.
    pub fn len(&self) -> usize {
        match *self {
            Count::Repeat(n) => n,
            Count::Range { start, end } => (end as usize) - (start as usize) + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suffixes appended to the level name, in ascending order.
    pub fn labels(&self) -> Vec<String> {
        match *self {
            Count::Repeat(n) => (1..=n).map(|i| i.to_string()).collect(),
            Count::Range { start, end } => (start..=end).map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", Count::Repeat(3))]
    #[case("0", Count::Repeat(0))]
    #[case("007", Count::Repeat(7))]
    #[case("d", Count::Range { start: 'a', end: 'd' })]
    #[case("C", Count::Range { start: 'A', end: 'C' })]
    #[case("a", Count::Range { start: 'a', end: 'a' })]
    fn given_valid_raw_count_when_interpreting_then_returns_count(
        #[case] raw: &str,
        #[case] expected: Count,
    ) {
        assert_eq!(Count::interpret(raw), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("_")]
    #[case("a1")]
    #[case("")]
    fn given_malformed_raw_count_when_interpreting_then_rejected(#[case] raw: &str) {
        assert_eq!(Count::interpret(raw), Err(CountError::NotNumberOrLetter));
    }

    #[test]
    fn given_huge_number_when_interpreting_then_too_large() {
        assert_eq!(
            Count::interpret("99999999999999999999999999"),
            Err(CountError::TooLarge)
        );
    }

    #[test]
    fn given_counts_when_listing_labels_then_ascending() {
        assert_eq!(Count::Repeat(3).labels(), vec!["1", "2", "3"]);
        assert!(Count::Repeat(0).labels().is_empty());
        assert_eq!(Count::interpret("D").unwrap().labels(), vec!["A", "B", "C", "D"]);
        assert_eq!(Count::interpret("f").unwrap().len(), 6);
    }
}
