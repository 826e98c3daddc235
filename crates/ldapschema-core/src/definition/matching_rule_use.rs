//! Matching rule use definitions.
//!
//! ```text
//! ( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn $ description ) )
//! ```

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_leading_oid, read_oids};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The attribute types a matching rule applies to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchingRuleUse {
    /// OID of the matching rule.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `APPLIES`: the attribute types the rule may be used with. Never
    /// empty in a decoded definition.
    pub applies: Vec<String>,
}

impl SchemaElement for MatchingRuleUse {
    const KIND: ElementKind = ElementKind::MatchingRuleUse;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("applies", read_applies),
        Field::new("desc", read_description::<Self>),
        Field::new("name", read_names::<Self>),
        Field::new("obsolete", mark_obsolete::<Self>),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            oid: read_leading_oid(cursor, options)?.to_string(),
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.applies.is_empty() {
            return Err(ReadError::MissingRequiredField {
                field: "the attribute types it applies to (APPLIES)",
            });
        }
        Ok(())
    }
}

fn read_applies(
    cursor: &mut Cursor<'_>,
    def: &mut MatchingRuleUse,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.applies = read_oids(cursor, options)?;
    Ok(())
}
