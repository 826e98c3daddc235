//! Name form definitions.

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_leading_oid, read_oid, read_oids};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The RDN attribute types allowed for entries of a structural class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameForm {
    /// Name form OID.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `OC`: the structural object class. Never empty in a decoded
    /// definition.
    pub structural_class: String,
    /// `MUST`: mandatory RDN attribute types. Never empty in a decoded
    /// definition.
    pub required: Vec<String>,
    /// `MAY`: optional RDN attribute types.
    pub optional: Vec<String>,
}

impl SchemaElement for NameForm {
    const KIND: ElementKind = ElementKind::NameForm;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("desc", read_description::<Self>),
        Field::new("may", read_optional),
        Field::new("must", read_required),
        Field::new("name", read_names::<Self>),
        Field::new("obsolete", mark_obsolete::<Self>),
        Field::new("oc", read_structural_class),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            oid: read_leading_oid(cursor, options)?.to_string(),
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.structural_class.is_empty() {
            return Err(ReadError::MissingRequiredField {
                field: "a structural object class (OC)",
            });
        }
        if self.required.is_empty() {
            return Err(ReadError::MissingRequiredField {
                field: "any required naming attributes (MUST)",
            });
        }
        Ok(())
    }
}

fn read_structural_class(
    cursor: &mut Cursor<'_>,
    def: &mut NameForm,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.structural_class = read_oid(cursor, options)?.to_string();
    Ok(())
}

fn read_required(
    cursor: &mut Cursor<'_>,
    def: &mut NameForm,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.required = read_oids(cursor, options)?;
    Ok(())
}

fn read_optional(
    cursor: &mut Cursor<'_>,
    def: &mut NameForm,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.optional = read_oids(cursor, options)?;
    Ok(())
}
