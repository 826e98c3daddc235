//! Object class definitions.
//!
//! ```text
//! ( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn )
//!   MAY ( userPassword $ telephoneNumber $ seeAlso $ description ) )
//! ```

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_leading_oid, read_oids};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// OID of the `top` object class.
const TOP_OID: &str = "2.5.6.0";

/// Object class kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectClassKind {
    /// `ABSTRACT`
    Abstract,
    /// `STRUCTURAL`
    #[default]
    Structural,
    /// `AUXILIARY`
    Auxiliary,
}

impl ObjectClassKind {
    /// The keyword introducing this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Abstract => "ABSTRACT",
            Self::Structural => "STRUCTURAL",
            Self::Auxiliary => "AUXILIARY",
        }
    }
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An object class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectClass {
    /// Object class OID.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `SUP`: superior classes. `top` unless specified, except for `top`
    /// itself.
    pub superiors: Vec<String>,
    /// Kind, `STRUCTURAL` unless specified.
    pub kind: ObjectClassKind,
    /// `MUST`: required attribute types.
    pub required: Vec<String>,
    /// `MAY`: optional attribute types.
    pub optional: Vec<String>,
    /// Whether a kind keyword was present.
    #[cfg_attr(feature = "serde", serde(skip))]
    kind_declared: bool,
}

impl ObjectClass {
    /// Check if this is the `top` class.
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.oid == TOP_OID || self.common.has_name("top")
    }

    fn set_kind(&mut self, kind: ObjectClassKind) -> ReadResult<()> {
        if self.kind_declared && self.kind != kind {
            return Err(ReadError::ConflictingFields {
                first: self.kind.keyword(),
                second: kind.keyword(),
            });
        }
        self.kind = kind;
        self.kind_declared = true;
        Ok(())
    }
}

impl SchemaElement for ObjectClass {
    const KIND: ElementKind = ElementKind::ObjectClass;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("abstract", mark_abstract),
        Field::new("auxiliary", mark_auxiliary),
        Field::new("desc", read_description::<Self>),
        Field::new("may", read_optional),
        Field::new("must", read_required),
        Field::new("name", read_names::<Self>),
        Field::new("obsolete", mark_obsolete::<Self>),
        Field::new("structural", mark_structural),
        Field::new("sup", read_superiors),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            oid: read_leading_oid(cursor, options)?.to_string(),
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.superiors.is_empty() && !self.is_top() {
            self.superiors.push("top".to_string());
        }
        Ok(())
    }
}

fn read_superiors(
    cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.superiors = read_oids(cursor, options)?;
    Ok(())
}

fn read_required(
    cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.required = read_oids(cursor, options)?;
    Ok(())
}

fn read_optional(
    cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.optional = read_oids(cursor, options)?;
    Ok(())
}

fn mark_abstract(
    _cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.set_kind(ObjectClassKind::Abstract)
}

fn mark_structural(
    _cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.set_kind(ObjectClassKind::Structural)
}

fn mark_auxiliary(
    _cursor: &mut Cursor<'_>,
    def: &mut ObjectClass,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.set_kind(ObjectClassKind::Auxiliary)
}
