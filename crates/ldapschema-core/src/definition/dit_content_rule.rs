//! DIT content rule definitions.

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::ReadResult;
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_leading_oid, read_oids};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Content permitted in entries of one structural object class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DitContentRule {
    /// OID of the structural object class the rule governs.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `AUX`: permitted auxiliary classes.
    pub auxiliaries: Vec<String>,
    /// `MUST`: additionally required attribute types.
    pub required: Vec<String>,
    /// `MAY`: additionally permitted attribute types.
    pub optional: Vec<String>,
    /// `NOT`: precluded attribute types.
    pub prohibited: Vec<String>,
}

impl SchemaElement for DitContentRule {
    const KIND: ElementKind = ElementKind::DitContentRule;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("aux", read_auxiliaries),
        Field::new("desc", read_description::<Self>),
        Field::new("may", read_optional),
        Field::new("must", read_required),
        Field::new("name", read_names::<Self>),
        Field::new("not", read_prohibited),
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
        Ok(())
    }
}

fn read_auxiliaries(
    cursor: &mut Cursor<'_>,
    def: &mut DitContentRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.auxiliaries = read_oids(cursor, options)?;
    Ok(())
}

fn read_required(
    cursor: &mut Cursor<'_>,
    def: &mut DitContentRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.required = read_oids(cursor, options)?;
    Ok(())
}

fn read_optional(
    cursor: &mut Cursor<'_>,
    def: &mut DitContentRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.optional = read_oids(cursor, options)?;
    Ok(())
}

fn read_prohibited(
    cursor: &mut Cursor<'_>,
    def: &mut DitContentRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.prohibited = read_oids(cursor, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;
    use crate::parser::read_definition;
    use alloc::vec;

    fn rule(value: &str) -> ReadResult<DitContentRule> {
        read_definition(&mut Cursor::new(value), &DecodeOptions::default())
    }

    #[test]
    fn test_all_lists() {
        let def = rule(
            "( 2.5.6.6 NAME 'personContentRule' AUX ( strongAuthenticationUser $ certificationAuthority ) \
             MUST userPassword MAY ( mail $ telephoneNumber ) NOT seeAlso )",
        )
        .unwrap();
        assert_eq!(def.oid, "2.5.6.6");
        assert_eq!(
            def.auxiliaries,
            vec!["strongAuthenticationUser", "certificationAuthority"]
        );
        assert_eq!(def.required, vec!["userPassword"]);
        assert_eq!(def.optional, vec!["mail", "telephoneNumber"]);
        assert_eq!(def.prohibited, vec!["seeAlso"]);
    }

    #[test]
    fn test_no_required_fields() {
        let def = rule("( 2.5.6.6 )").unwrap();
        assert!(def.auxiliaries.is_empty());
        assert!(def.common.names.is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert!(matches!(
            rule("( 2.5.6.6 NOT ( ) )"),
            Err(ReadError::MalformedList {
                reason: "the list is empty",
                ..
            })
        ));
    }
}
