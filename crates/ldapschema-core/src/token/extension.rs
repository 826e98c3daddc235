//! Extension property reader.

use crate::cursor::Cursor;
use crate::error::{Found, ReadError, ReadResult};
use super::read_quoted_string;
use alloc::vec::Vec;
use alloc::string::String;

/// Read the values of an extension property (`qdstrings`): one quoted
/// string, or a parenthesized, whitespace-separated list of quoted strings.
///
/// # Errors
///
/// - [`ReadError::ExpectedQuote`] if a value is not quoted.
/// - [`ReadError::UnterminatedQuote`] if a value never closes.
/// - [`ReadError::MalformedList`] for an empty or unclosed list.
pub fn read_extension_values(cursor: &mut Cursor<'_>) -> ReadResult<Vec<String>> {
    cursor.skip_whitespace();
    let open = cursor.position();
    if !cursor.eat('(') {
        return Ok(alloc::vec![read_quoted_string(cursor)?]);
    }

    let mut values = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(')') => {
                cursor.advance();
                break;
            }
            Some('\'') => values.push(read_quoted_string(cursor)?),
            None => {
                return Err(ReadError::MalformedList {
                    offset: open,
                    reason: "the closing parenthesis is missing",
                })
            }
            Some(c) => {
                return Err(ReadError::ExpectedQuote {
                    offset: cursor.position(),
                    found: Found::Char(c),
                })
            }
        }
    }

    if values.is_empty() {
        return Err(ReadError::MalformedList {
            offset: open,
            reason: "the list is empty",
        });
    }
    Ok(values)
}
