//! Character cursor over a single definition string.
//!
//! The cursor is the only mutable state of a parse. It owns a read position
//! into an immutable `&str` and tracks both the byte position (for slicing)
//! and the character offset (for diagnostics).

use crate::error::ReadError;

/// A saved cursor position.
///
/// Marks are cheap to copy and are used to slice the source between two
/// points or to report where a token started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    byte: usize,
    offset: usize,
}

impl Mark {
    /// Zero-based character offset of this mark.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Cursor over a definition string.
///
/// Readers receive the cursor by exclusive reference and never keep it past
/// their own call.
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// Definition string being read.
    source: &'src str,
    /// Current byte position.
    pos: usize,
    /// Current character offset.
    offset: usize,
    /// Total number of characters in `source`.
    len: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            offset: 0,
            len: source.chars().count(),
        }
    }

    /// The full definition string.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Zero-based character offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Number of unread characters.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.len - self.offset
    }

    /// Check if all input has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Peek at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Read the next character.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::OutOfInput`] if no characters remain.
    pub fn read(&mut self) -> Result<char, ReadError> {
        self.advance().ok_or(ReadError::OutOfInput {
            offset: self.offset,
            expected: "another character",
        })
    }

    /// Advance by one character and return it, or `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.offset += 1;
        Some(c)
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `expected` (ASCII, compared case-insensitively) if the input
    /// continues with it.
    pub fn eat_ignore_ascii_case(&mut self, expected: &str) -> bool {
        let rest = self.source[self.pos..].as_bytes();
        if rest.len() < expected.len() || !rest[..expected.len()].eq_ignore_ascii_case(expected.as_bytes()) {
            return false;
        }
        for _ in expected.chars() {
            self.advance();
        }
        true
    }

    /// Skip whitespace (space, tab, CR, LF). Never fails.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Consume characters while `pred` holds and return them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.source[start..self.pos]
    }

    /// Save the current position.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark {
            byte: self.pos,
            offset: self.offset,
        }
    }

    /// Source text between `mark` and the current position.
    #[must_use]
    pub fn slice_from(&self, mark: Mark) -> &'src str {
        &self.source[mark.byte..self.pos]
    }

    /// The word starting at `mark`: everything up to the next whitespace or
    /// structural character. Does not move the cursor.
    ///
    /// Used to quote the offending token in diagnostics.
    #[must_use]
    pub fn word_at(&self, mark: Mark) -> &'src str {
        let rest = &self.source[mark.byte..];
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| is_whitespace(c) || is_structural(c))
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Unread remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }
}

/// Whitespace accepted between tokens.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters that end a bare token.
#[must_use]
pub const fn is_structural(c: char) -> bool {
    matches!(c, '(' | ')' | '$' | '\'' | '{' | '}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.peek(), None);
        assert!(matches!(
            cursor.read(),
            Err(ReadError::OutOfInput { offset: 0, .. })
        ));
    }

    #[test]
    fn test_read_and_position() {
        let mut cursor = Cursor::new("( 1");
        assert_eq!(cursor.read(), Ok('('));
        assert_eq!(cursor.position(), 1);
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.read(), Ok('1'));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_skip_whitespace_at_end() {
        let mut cursor = Cursor::new(" \t\r\n");
        cursor.skip_whitespace();
        assert!(cursor.is_eof());
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_positions_count_characters_not_bytes() {
        let mut cursor = Cursor::new("'é' x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_take_while_and_slice() {
        let mut cursor = Cursor::new("2.5.13.1 NAME");
        let mark = cursor.mark();
        let oid = cursor.take_while(|c| c.is_ascii_digit() || c == '.');
        assert_eq!(oid, "2.5.13.1");
        assert_eq!(cursor.slice_from(mark), "2.5.13.1");
        assert_eq!(cursor.rest(), " NAME");
    }

    #[test]
    fn test_word_at_stops_at_structural() {
        let cursor = Cursor::new("cn$sn )");
        assert_eq!(cursor.word_at(cursor.mark()), "cn");
        let cursor = Cursor::new("x)");
        assert_eq!(cursor.word_at(cursor.mark()), "x");
    }

    #[test]
    fn test_eat_ignore_ascii_case() {
        let mut cursor = Cursor::new("5c27");
        assert!(cursor.eat_ignore_ascii_case("5C"));
        assert!(!cursor.eat_ignore_ascii_case("5c"));
        assert!(cursor.eat_ignore_ascii_case("27"));
        assert!(cursor.is_eof());
        assert!(!cursor.eat_ignore_ascii_case("27"));
    }
}
