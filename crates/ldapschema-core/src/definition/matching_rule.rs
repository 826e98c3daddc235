//! Matching rule definitions.

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::read_leading_oid;
use alloc::string::{String, ToString};

/// A matching rule and the syntax of its assertion values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchingRule {
    /// Matching rule OID.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `SYNTAX`: assertion syntax OID. Never empty in a decoded definition.
    pub syntax: String,
}

impl SchemaElement for MatchingRule {
    const KIND: ElementKind = ElementKind::MatchingRule;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("desc", read_description::<Self>),
        Field::new("name", read_names::<Self>),
        Field::new("obsolete", mark_obsolete::<Self>),
        Field::new("syntax", read_syntax),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            oid: read_leading_oid(cursor, options)?.to_string(),
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.syntax.is_empty() {
            return Err(ReadError::MissingRequiredField {
                field: "an assertion syntax (SYNTAX)",
            });
        }
        Ok(())
    }
}

fn read_syntax(
    cursor: &mut Cursor<'_>,
    def: &mut MatchingRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.syntax = read_leading_oid(cursor, options)?.to_string();
    Ok(())
}
