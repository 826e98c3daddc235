//! DIT structure rule definitions.
//!
//! Unlike every other kind, a structure rule is identified by an integer
//! rule id rather than an OID:
//!
//! ```text
//! ( 2 DESC 'organization under country' FORM orgNameForm SUP 1 )
//! ```

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_oid, read_rule_id, read_rule_ids};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A DIT structure rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DitStructureRule {
    /// Rule id.
    pub rule_id: u32,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `FORM`: the name form. Never empty in a decoded definition.
    pub name_form: String,
    /// `SUP`: superior rule ids.
    pub superiors: Vec<u32>,
}

impl SchemaElement for DitStructureRule {
    const KIND: ElementKind = ElementKind::DitStructureRule;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("desc", read_description::<Self>),
        Field::new("form", read_form),
        Field::new("name", read_names::<Self>),
        Field::new("obsolete", mark_obsolete::<Self>),
        Field::new("sup", read_superiors),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, _options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            rule_id: read_rule_id(cursor)?,
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.name_form.is_empty() {
            return Err(ReadError::MissingRequiredField { field: "a name form (FORM)" });
        }
        Ok(())
    }
}

fn read_form(
    cursor: &mut Cursor<'_>,
    def: &mut DitStructureRule,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.name_form = read_oid(cursor, options)?.to_string();
    Ok(())
}

fn read_superiors(
    cursor: &mut Cursor<'_>,
    def: &mut DitStructureRule,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.superiors = read_rule_ids(cursor)?;
    Ok(())
}
