//! Token readers.
//!
//! Composable read operations layered on the [`Cursor`]. Every reader skips
//! leading whitespace itself, consumes exactly the token it reads and leaves
//! trailing whitespace alone.

mod extension;
mod list;
mod oid;
mod string;

pub use extension::read_extension_values;
pub use list::{read_oids, read_rule_ids};
pub use oid::{read_leading_oid, read_noidlen, read_numeric_oid, read_oid, read_rule_id};
pub use string::{read_name_descriptors, read_quoted_string};

use crate::cursor::{is_structural, is_whitespace, Cursor};
use crate::error::{ReadError, ReadResult};

/// A keyword read by [`read_token_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenName<'src> {
    /// The keyword as written.
    pub text: &'src str,
    /// Character offset of its first character.
    pub offset: usize,
}

impl TokenName<'_> {
    /// Check if this is a vendor extension keyword (`X-` prefix).
    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.text
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
    }
}

/// Characters allowed inside a keyword.
pub(crate) const fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Read the next keyword of a definition body.
///
/// Returns `Ok(None)` after consuming the closing parenthesis of the
/// definition.
///
/// # Errors
///
/// - [`ReadError::OutOfInput`] if the value ends before the closing
///   parenthesis.
/// - [`ReadError::MalformedKeyword`] if the next token does not start with a
///   letter.
pub fn read_token_name<'src>(cursor: &mut Cursor<'src>) -> ReadResult<Option<TokenName<'src>>> {
    cursor.skip_whitespace();
    let offset = cursor.position();
    match cursor.peek() {
        None => Err(ReadError::OutOfInput {
            offset,
            expected: "a closing parenthesis",
        }),
        Some(')') => {
            cursor.advance();
            Ok(None)
        }
        Some(c) if c.is_ascii_alphabetic() => {
            let text = cursor.take_while(is_keyword_char);
            Ok(Some(TokenName { text, offset }))
        }
        Some(found) => Err(ReadError::MalformedKeyword { offset, found }),
    }
}

/// Read a bare word value such as an attribute usage.
///
/// # Errors
///
/// Returns [`ReadError::OutOfInput`] at end of input and
/// [`ReadError::MalformedKeyword`] if the word does not start with a letter.
pub fn read_keyword_value<'src>(cursor: &mut Cursor<'src>) -> ReadResult<TokenName<'src>> {
    cursor.skip_whitespace();
    let offset = cursor.position();
    match cursor.peek() {
        None => Err(ReadError::OutOfInput {
            offset,
            expected: "a keyword value",
        }),
        Some(c) if c.is_ascii_alphabetic() => {
            let text = cursor.take_while(is_keyword_char);
            Ok(TokenName { text, offset })
        }
        Some(found) => Err(ReadError::MalformedKeyword { offset, found }),
    }
}

/// Check that a token ends at a delimiter.
///
/// Returns the offset of the first illegal character, if any.
pub(crate) fn illegal_terminator(cursor: &Cursor<'_>) -> Option<usize> {
    match cursor.peek() {
        None => None,
        Some(c) if is_whitespace(c) || is_structural(c) => None,
        Some(_) => Some(cursor.position()),
    }
}
