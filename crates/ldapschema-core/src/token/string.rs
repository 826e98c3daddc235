//! Quoted string and name descriptor readers.

use crate::cursor::Cursor;
use crate::error::{Found, ReadError, ReadResult};
use crate::options::DecodeOptions;
use alloc::string::String;
use alloc::vec::Vec;

/// Read a single-quoted string (`qdstring`).
///
/// The escapes `\27` (quote) and `\5C` (backslash) are decoded; hex digits
/// are case-insensitive. Any other backslash is kept as written.
///
/// # Errors
///
/// - [`ReadError::ExpectedQuote`] if the next non-whitespace character is not
///   a single quote.
/// - [`ReadError::UnterminatedQuote`] if the value ends before the closing
///   quote.
pub fn read_quoted_string(cursor: &mut Cursor<'_>) -> ReadResult<String> {
    cursor.skip_whitespace();
    let offset = cursor.position();
    if !cursor.eat('\'') {
        return Err(ReadError::ExpectedQuote {
            offset,
            found: Found::from(cursor.peek()),
        });
    }

    let mut value = String::new();
    loop {
        match cursor.advance() {
            None => return Err(ReadError::UnterminatedQuote { offset }),
            Some('\'') => return Ok(value),
            Some('\\') if cursor.eat_ignore_ascii_case("27") => value.push('\''),
            Some('\\') => {
                // `\5C` and a lone backslash both stand for a backslash.
                cursor.eat_ignore_ascii_case("5c");
                value.push('\\');
            }
            Some(c) => value.push(c),
        }
    }
}

/// Read one name or a parenthesized, whitespace-separated list of names
/// (`qdescrs`).
///
/// # Errors
///
/// - [`ReadError::ExpectedQuote`] if a name is not quoted.
/// - [`ReadError::MalformedName`] if a name is not a keystring and
///   [`allow_malformed_names`](DecodeOptions::allow_malformed_names) is off.
/// - [`ReadError::MalformedList`] for an empty or unclosed list.
pub fn read_name_descriptors(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> ReadResult<Vec<String>> {
    cursor.skip_whitespace();
    let open = cursor.position();
    if !cursor.eat('(') {
        return Ok(alloc::vec![read_name(cursor, options)?]);
    }

    let mut names = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(')') => {
                cursor.advance();
                break;
            }
            Some('\'') => names.push(read_name(cursor, options)?),
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

    if names.is_empty() {
        return Err(ReadError::MalformedList {
            offset: open,
            reason: "the list is empty",
        });
    }
    Ok(names)
}

/// Read one quoted name descriptor (`qdescr`).
fn read_name(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<String> {
    cursor.skip_whitespace();
    let offset = cursor.position();
    let name = read_quoted_string(cursor)?;
    let valid = if options.allow_malformed_names {
        !name.is_empty()
    } else {
        is_keystring(&name)
    };
    if valid {
        Ok(name)
    } else {
        Err(ReadError::MalformedName { offset, name })
    }
}

/// Check `keystring = leadkeychar *keychar`.
pub(crate) fn is_keystring(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn quoted(source: &str) -> ReadResult<String> {
        read_quoted_string(&mut Cursor::new(source))
    }

    fn names(source: &str) -> ReadResult<Vec<String>> {
        read_name_descriptors(&mut Cursor::new(source), &DecodeOptions::default())
    }

    #[test]
    fn test_quoted_string() {
        assert_eq!(quoted("'hello'"), Ok("hello".into()));
        assert_eq!(quoted("  'with spaces' )"), Ok("with spaces".into()));
        assert_eq!(quoted("''"), Ok(String::new()));
    }

    #[test]
    fn test_quoted_string_escapes() {
        assert_eq!(quoted(r"'O\27Reilly'"), Ok("O'Reilly".into()));
        assert_eq!(quoted(r"'C:\5cdir'"), Ok(r"C:\dir".into()));
        assert_eq!(quoted(r"'a\5Cb'"), Ok(r"a\b".into()));
        assert_eq!(quoted(r"'keep\n'"), Ok(r"keep\n".into()));
    }

    #[test]
    fn test_quoted_string_non_ascii() {
        assert_eq!(quoted("'Übersicht'"), Ok("Übersicht".into()));
    }

    #[test]
    fn test_quoted_string_missing_quote() {
        assert_eq!(
            quoted(" test"),
            Err(ReadError::ExpectedQuote {
                offset: 1,
                found: Found::Char('t'),
            })
        );
        assert_eq!(
            quoted(""),
            Err(ReadError::ExpectedQuote {
                offset: 0,
                found: Found::End,
            })
        );
    }

    #[test]
    fn test_quoted_string_unterminated() {
        assert_eq!(
            quoted("  'never closed )"),
            Err(ReadError::UnterminatedQuote { offset: 2 })
        );
    }

    #[test]
    fn test_single_name() {
        assert_eq!(names(" 'cn' DESC"), Ok(vec!["cn".into()]));
    }

    #[test]
    fn test_name_list() {
        assert_eq!(
            names("( 'cn' 'commonName' )"),
            Ok(vec!["cn".into(), "commonName".into()])
        );
        assert_eq!(names("('a''b')"), Ok(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_empty_name_list() {
        assert_eq!(
            names(" ( )"),
            Err(ReadError::MalformedList {
                offset: 1,
                reason: "the list is empty",
            })
        );
    }

    #[test]
    fn test_unclosed_name_list() {
        assert_eq!(
            names("( 'cn' "),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "the closing parenthesis is missing",
            })
        );
    }

    #[test]
    fn test_unquoted_name() {
        assert_eq!(
            names("cn"),
            Err(ReadError::ExpectedQuote {
                offset: 0,
                found: Found::Char('c'),
            })
        );
        assert_eq!(
            names("( 'cn' sn )"),
            Err(ReadError::ExpectedQuote {
                offset: 7,
                found: Found::Char('s'),
            })
        );
    }

    #[test]
    fn test_malformed_name() {
        assert_eq!(
            names(" 'my_name'"),
            Err(ReadError::MalformedName {
                offset: 1,
                name: "my_name".into(),
            })
        );
        assert!(matches!(names("'1abc'"), Err(ReadError::MalformedName { .. })));
        assert!(matches!(names("''"), Err(ReadError::MalformedName { .. })));

        let lenient = DecodeOptions::default().with_malformed_names(true);
        assert_eq!(
            read_name_descriptors(&mut Cursor::new("'my_name'"), &lenient),
            Ok(vec!["my_name".into()])
        );
        assert!(read_name_descriptors(&mut Cursor::new("''"), &lenient).is_err());
    }

    #[test]
    fn test_keystring() {
        assert!(is_keystring("cn"));
        assert!(is_keystring("x-my-attr2"));
        assert!(!is_keystring(""));
        assert!(!is_keystring("2cn"));
        assert!(!is_keystring("-cn"));
        assert!(!is_keystring("c n"));
    }
}
