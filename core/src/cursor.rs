//! Forward-only cursor over the input tokens.
//!
//! The cursor only moves forward. Tokens handed out by [`Cursor::consume`]
//! are behind the cursor afterwards and can never become match candidates.

use crate::descriptor::Arity;
use crate::error::{ParseError, Result};

pub(crate) struct Cursor<'a> {
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Starts after the first `skip` tokens; skipping past the end yields an
    /// exhausted cursor.
    pub(crate) fn new(tokens: &'a [&'a str], skip: usize) -> Self {
        Self {
            tokens,
            position: skip.min(tokens.len()),
        }
    }

    /// The current candidate token.
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    /// Tokens after the current one.
    pub(crate) fn following(&self) -> usize {
        self.tokens.len().saturating_sub(self.position + 1)
    }

    /// Steps over the current token, returning it.
    pub(crate) fn skip(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Takes the current token plus the parameters `param_count` asks for.
    ///
    /// The returned slice always starts with the matched token. On error the
    /// cursor does not move.
    pub(crate) fn consume(&mut self, param_count: isize) -> Result<&'a [&'a str]> {
        let Some(identifier) = self.peek() else {
            return Ok(&[]);
        };
        let available = self.following();
        let wanted = Arity::from_count(param_count, identifier)?.resolve(available);
        if wanted > available {
            return Err(ParseError::InsufficientArguments {
                identifier: identifier.to_string(),
                expected: wanted,
                available,
            });
        }
        let start = self.position;
        self.position += wanted + 1;
        Ok(&self.tokens[start..self.position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::REST;

    #[test]
    fn test_skip_beyond_end_is_exhausted() {
        let tokens = ["prog"];
        let cursor = Cursor::new(&tokens, 3);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_consume_takes_identifier_and_parameters() {
        let tokens = ["prog", "--count", "3", "file"];
        let mut cursor = Cursor::new(&tokens, 1);

        assert_eq!(cursor.consume(1).unwrap(), ["--count", "3"]);
        assert_eq!(cursor.peek(), Some("file"));
    }

    #[test]
    fn test_consume_rest_takes_everything() {
        let tokens = ["--", "r1", "r2", "r3"];
        let mut cursor = Cursor::new(&tokens, 0);

        assert_eq!(cursor.consume(REST).unwrap(), ["--", "r1", "r2", "r3"]);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_consume_rest_at_end_is_empty_capture() {
        let tokens = ["a", "--"];
        let mut cursor = Cursor::new(&tokens, 1);

        assert_eq!(cursor.consume(REST).unwrap(), ["--"]);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_consume_short_input_does_not_move() {
        let tokens = ["--pair", "x"];
        let mut cursor = Cursor::new(&tokens, 0);

        let err = cursor.consume(2).unwrap_err();
        assert_eq!(
            err,
            ParseError::InsufficientArguments {
                identifier: "--pair".to_string(),
                expected: 2,
                available: 1,
            }
        );
        assert_eq!(cursor.peek(), Some("--pair"));
    }

    #[test]
    fn test_consume_invalid_count() {
        let tokens = ["--odd"];
        let mut cursor = Cursor::new(&tokens, 0);

        assert!(matches!(
            cursor.consume(-2),
            Err(ParseError::InvalidArity { count: -2, .. })
        ));
    }

    #[test]
    fn test_skip_advances_by_one() {
        let tokens = ["a", "b"];
        let mut cursor = Cursor::new(&tokens, 0);

        assert_eq!(cursor.skip(), Some("a"));
        assert_eq!(cursor.skip(), Some("b"));
        assert_eq!(cursor.skip(), None);
    }
}
