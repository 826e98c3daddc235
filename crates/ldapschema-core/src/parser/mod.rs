//! Generic definition driver.
//!
//! Every kind shares the same outer grammar:
//!
//! ```text
//! ( identifier *( keyword value ) )
//! ```
//!
//! The driver reads the parentheses and keywords and hands each keyword to
//! the kind's [`Field`] table. Keywords the table does not know become
//! extension properties.

mod field;

pub use field::{Field, FieldReader};
pub(crate) use field::{mark_obsolete, read_description, read_names};

use crate::cursor::Cursor;
use crate::definition::SchemaElement;
use crate::error::{DefinitionError, ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::token::{read_extension_values, read_token_name};
use alloc::string::ToString;

/// Decode one definition of kind `E`.
///
/// # Errors
///
/// Returns a [`DefinitionError`] quoting `value` if it is not a valid
/// definition of that kind.
pub fn decode<E: SchemaElement>(value: &str, options: &DecodeOptions) -> Result<E, DefinitionError> {
    let mut cursor = Cursor::new(value);
    read_definition(&mut cursor, options).map_err(|source| DefinitionError::new(E::KIND, value, source))
}

/// Read a whole definition from `cursor`.
///
/// # Errors
///
/// Returns the first [`ReadError`] encountered.
pub fn read_definition<E: SchemaElement>(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> ReadResult<E> {
    cursor.skip_whitespace();
    if cursor.remaining() == 0 {
        return Err(ReadError::EmptyValue);
    }

    let offset = cursor.position();
    let found = cursor.read()?;
    if found != '(' {
        return Err(ReadError::ExpectedOpenParen { offset, found });
    }

    let mut def = E::read_identifier(cursor, options)?;

    while let Some(token) = read_token_name(cursor)? {
        if let Some(field) = field::lookup(E::FIELDS, token.text) {
            tracing::trace!(kind = ?E::KIND, keyword = token.text, "reading field");
            field.read(cursor, &mut def, options)?;
        } else if token.is_extension() || options.allow_unknown_keywords {
            tracing::trace!(kind = ?E::KIND, keyword = token.text, "reading extension property");
            let values = read_extension_values(cursor)?;
            def.common_mut().extensions.insert(token.text, values);
        } else {
            return Err(ReadError::UnknownKeyword {
                offset: token.offset,
                keyword: token.text.to_string(),
            });
        }
    }

    cursor.skip_whitespace();
    if !cursor.is_eof() {
        return Err(ReadError::TrailingCharacters {
            offset: cursor.position(),
            text: cursor.rest().to_string(),
        });
    }

    def.finish()?;
    Ok(def)
}
