//! LDAP syntax definitions.

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::ReadResult;
use crate::options::DecodeOptions;
use crate::parser::{read_description, Field};
use crate::token::read_leading_oid;
use alloc::string::{String, ToString};

/// An LDAP syntax: an OID, an optional description and extensions.
///
/// The grammar has no `NAME` or `OBSOLETE`; [`CommonFields::names`] stays
/// empty and [`CommonFields::obsolete`] false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdapSyntax {
    /// Syntax OID.
    pub oid: String,
    /// Description and extensions.
    pub common: CommonFields,
}

impl SchemaElement for LdapSyntax {
    const KIND: ElementKind = ElementKind::LdapSyntax;

    const FIELDS: &'static [Field<Self>] = &[Field::new("desc", read_description::<Self>)];

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
