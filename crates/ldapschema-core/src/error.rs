//! Decode failures.
//!
//! Token readers and drivers fail with [`ReadError`], which carries the
//! offending text and its zero-based character offset. The driver wraps it
//! into a [`DefinitionError`] that also names the definition kind and quotes
//! the whole value; its `Display` output is the diagnostic shown to
//! directory administrators.

use crate::definition::ElementKind;
use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// What a reader found where it expected something else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    /// A character.
    Char(char),
    /// The end of the value.
    End,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Self::End, Self::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "a '{c}' character"),
            Self::End => write!(f, "the end of the value"),
        }
    }
}

/// A failure detected while reading one definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The value is empty or contains only whitespace.
    #[error("it was empty or contained only whitespace")]
    EmptyValue,

    /// The first non-whitespace character is not `(`.
    #[error("an open parenthesis was expected at position {offset} but instead a '{found}' character was found")]
    ExpectedOpenParen {
        /// Offset of the offending character.
        offset: usize,
        /// The character found.
        found: char,
    },

    /// An OID token violates the numericoid/descr grammar.
    #[error("the OID \"{text}\" at position {offset} is malformed: {reason}")]
    MalformedOid {
        /// Offset where the problem was detected.
        offset: usize,
        /// The offending token.
        text: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A quoted string never closes.
    #[error("the quoted string starting at position {offset} is not terminated")]
    UnterminatedQuote {
        /// Offset of the opening quote.
        offset: usize,
    },

    /// A single quote was required but absent.
    #[error("a single quote was expected at position {offset} but instead {found} was found")]
    ExpectedQuote {
        /// Offset where the quote was expected.
        offset: usize,
        /// What was there instead.
        found: Found,
    },

    /// A parenthesized list is empty or unbalanced.
    #[error("the list starting at position {offset} is malformed: {reason}")]
    MalformedList {
        /// Offset of the list (its opening parenthesis, if any).
        offset: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A mandatory field is absent at the end of the definition.
    #[error("it does not specify {field}")]
    MissingRequiredField {
        /// Description of the missing field.
        field: &'static str,
    },

    /// The value ended while a reader still needed input.
    #[error("the end of the value was reached at position {offset} while {expected} was expected")]
    OutOfInput {
        /// Offset of the end of the value.
        offset: usize,
        /// What the reader was looking for.
        expected: &'static str,
    },

    /// A keyword does not start with a letter.
    #[error("a keyword was expected at position {offset} but instead a '{found}' character was found")]
    MalformedKeyword {
        /// Offset of the offending character.
        offset: usize,
        /// The character found.
        found: char,
    },

    /// An unrecognized keyword without the `X-` prefix, with unknown
    /// keywords disallowed.
    #[error("the keyword \"{keyword}\" at position {offset} is not allowed")]
    UnknownKeyword {
        /// Offset of the keyword.
        offset: usize,
        /// The keyword as written.
        keyword: String,
    },

    /// A name descriptor is not a valid keystring.
    #[error("the name \"{name}\" at position {offset} contains illegal characters")]
    MalformedName {
        /// Offset of the quoted name.
        offset: usize,
        /// The name as written (unquoted).
        name: String,
    },

    /// A DIT structure rule id is not a valid number.
    #[error("the rule ID \"{text}\" at position {offset} is malformed")]
    MalformedRuleId {
        /// Offset of the rule id.
        offset: usize,
        /// The offending token.
        text: String,
    },

    /// A `{len}` syntax length bound is malformed.
    #[error("the syntax length bound \"{text}\" at position {offset} is malformed")]
    InvalidLength {
        /// Offset of the opening brace.
        offset: usize,
        /// The offending text.
        text: String,
    },

    /// An attribute usage is not one of the four defined values.
    #[error("the attribute usage \"{usage}\" at position {offset} is not recognized")]
    InvalidUsage {
        /// Offset of the usage value.
        offset: usize,
        /// The usage as written.
        usage: String,
    },

    /// Two fields that exclude each other are both present.
    #[error("{first} may not be combined with {second}")]
    ConflictingFields {
        /// The first field.
        first: &'static str,
        /// The field it conflicts with.
        second: &'static str,
    },

    /// Non-whitespace text follows the closing parenthesis.
    #[error("unexpected characters \"{text}\" were found at position {offset} after the closing parenthesis")]
    TrailingCharacters {
        /// Offset of the first trailing character.
        offset: usize,
        /// The trailing text.
        text: String,
    },
}

impl ReadError {
    /// Character offset the failure points at, if it has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyValue | Self::MissingRequiredField { .. } | Self::ConflictingFields { .. } => {
                None
            }
            Self::ExpectedOpenParen { offset, .. }
            | Self::MalformedOid { offset, .. }
            | Self::UnterminatedQuote { offset }
            | Self::ExpectedQuote { offset, .. }
            | Self::MalformedList { offset, .. }
            | Self::OutOfInput { offset, .. }
            | Self::MalformedKeyword { offset, .. }
            | Self::UnknownKeyword { offset, .. }
            | Self::MalformedName { offset, .. }
            | Self::MalformedRuleId { offset, .. }
            | Self::InvalidLength { offset, .. }
            | Self::InvalidUsage { offset, .. }
            | Self::TrailingCharacters { offset, .. } => Some(*offset),
        }
    }
}

/// A rejected schema definition.
///
/// The `Display` form is the diagnostic appended to the caller's reason
/// buffer by [`Syntax::value_is_acceptable`](crate::Syntax::value_is_acceptable).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("The provided value \"{value}\" could not be parsed as {} because {source}", .kind.description())]
pub struct DefinitionError {
    /// Kind of definition being decoded.
    pub kind: ElementKind,
    /// The whole definition string.
    pub value: String,
    /// The underlying failure.
    pub source: ReadError,
}

impl DefinitionError {
    /// Wrap a read failure for the given kind and value.
    #[must_use]
    pub fn new(kind: ElementKind, value: &str, source: ReadError) -> Self {
        Self {
            kind,
            value: value.into(),
            source,
        }
    }

    /// Character offset the failure points at, if it has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.source.offset()
    }
}

/// Result type for token readers and drivers.
pub type ReadResult<T> = Result<T, ReadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_expected_open_paren_message() {
        let err = ReadError::ExpectedOpenParen {
            offset: 0,
            found: '*',
        };
        let message = err.to_string();
        assert!(message.contains("position 0"));
        assert!(message.contains("'*'"));
    }

    #[test]
    fn test_found_display() {
        assert_eq!(Found::Char('x').to_string(), "a 'x' character");
        assert_eq!(Found::from(None).to_string(), "the end of the value");
    }

    #[test]
    fn test_definition_error_quotes_value() {
        let err = DefinitionError::new(
            ElementKind::MatchingRuleUse,
            "( 2.5.13.1 )",
            ReadError::MissingRequiredField { field: "APPLIES" },
        );
        let message = format!("{err}");
        assert!(message.starts_with("The provided value \"( 2.5.13.1 )\""));
        assert!(message.contains("matching rule use description"));
        assert!(message.ends_with("it does not specify APPLIES"));
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_offsets() {
        let err = ReadError::MalformedList {
            offset: 17,
            reason: "the list is empty",
        };
        assert_eq!(err.offset(), Some(17));
        assert_eq!(ReadError::EmptyValue.offset(), None);
    }
}
