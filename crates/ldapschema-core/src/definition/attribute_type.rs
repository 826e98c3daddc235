//! Attribute type definitions.
//!
//! ```text
//! ( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name )
//! ( 2.5.18.1 NAME 'createTimestamp' EQUALITY generalizedTimeMatch
//!   SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 SINGLE-VALUE
//!   NO-USER-MODIFICATION USAGE directoryOperation )
//! ```

use super::{common_accessors, CommonFields, ElementKind, SchemaElement};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use crate::parser::{mark_obsolete, read_description, read_names, Field};
use crate::token::{read_keyword_value, read_leading_oid, read_noidlen, read_oid};
use alloc::string::{String, ToString};
use core::fmt;

/// Application of an attribute type (`USAGE`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeUsage {
    /// `userApplications`
    #[default]
    UserApplications,
    /// `directoryOperation`
    DirectoryOperation,
    /// `distributedOperation`
    DistributedOperation,
    /// `dSAOperation`
    DsaOperation,
}

impl AttributeUsage {
    /// Parse a usage keyword (case-insensitive).
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        [
            Self::UserApplications,
            Self::DirectoryOperation,
            Self::DistributedOperation,
            Self::DsaOperation,
        ]
        .into_iter()
        .find(|usage| usage.as_str().eq_ignore_ascii_case(text))
    }

    /// The usage keyword as defined by RFC 4512.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserApplications => "userApplications",
            Self::DirectoryOperation => "directoryOperation",
            Self::DistributedOperation => "distributedOperation",
            Self::DsaOperation => "dSAOperation",
        }
    }

    /// Check if this is one of the three operational usages.
    #[must_use]
    pub const fn is_operational(self) -> bool {
        !matches!(self, Self::UserApplications)
    }
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeType {
    /// Attribute type OID.
    pub oid: String,
    /// Names, description, obsolete flag and extensions.
    pub common: CommonFields,
    /// `SUP`: the supertype.
    pub superior: Option<String>,
    /// `EQUALITY` matching rule.
    pub equality: Option<String>,
    /// `ORDERING` matching rule.
    pub ordering: Option<String>,
    /// `SUBSTR` matching rule.
    pub substring: Option<String>,
    /// `SYNTAX` OID.
    pub syntax: Option<String>,
    /// Upper bound from `SYNTAX oid{len}`.
    pub syntax_length: Option<u32>,
    /// `SINGLE-VALUE`
    pub single_value: bool,
    /// `COLLECTIVE`
    pub collective: bool,
    /// `NO-USER-MODIFICATION`
    pub no_user_modification: bool,
    /// `USAGE`, `userApplications` unless specified.
    pub usage: AttributeUsage,
}

impl SchemaElement for AttributeType {
    const KIND: ElementKind = ElementKind::AttributeType;

    const FIELDS: &'static [Field<Self>] = &[
        Field::new("collective", mark_collective),
        Field::new("desc", read_description::<Self>),
        Field::new("equality", read_equality),
        Field::new("name", read_names::<Self>),
        Field::new("no-user-modification", mark_no_user_modification),
        Field::new("obsolete", mark_obsolete::<Self>),
        Field::new("ordering", read_ordering),
        Field::new("single-value", mark_single_value),
        Field::new("substr", read_substring),
        Field::new("sup", read_superior),
        Field::new("syntax", read_syntax),
        Field::new("usage", read_usage),
    ];

    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self> {
        Ok(Self {
            oid: read_leading_oid(cursor, options)?.to_string(),
            ..Self::default()
        })
    }

    common_accessors!();

    fn finish(&mut self) -> ReadResult<()> {
        if self.superior.is_none() && self.syntax.is_none() {
            return Err(ReadError::MissingRequiredField {
                field: "either a superior type or a syntax (SUP or SYNTAX)",
            });
        }
        if self.collective && self.usage.is_operational() {
            return Err(ReadError::ConflictingFields {
                first: "COLLECTIVE",
                second: "an operational USAGE",
            });
        }
        if self.no_user_modification && !self.usage.is_operational() {
            return Err(ReadError::ConflictingFields {
                first: "NO-USER-MODIFICATION",
                second: "USAGE userApplications",
            });
        }
        Ok(())
    }
}

fn read_superior(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.superior = Some(read_oid(cursor, options)?.to_string());
    Ok(())
}

fn read_equality(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.equality = Some(read_oid(cursor, options)?.to_string());
    Ok(())
}

fn read_ordering(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.ordering = Some(read_oid(cursor, options)?.to_string());
    Ok(())
}

fn read_substring(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    options: &DecodeOptions,
) -> ReadResult<()> {
    def.substring = Some(read_oid(cursor, options)?.to_string());
    Ok(())
}

fn mark_single_value(
    _cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.single_value = true;
    Ok(())
}

fn mark_collective(
    _cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.collective = true;
    Ok(())
}

fn mark_no_user_modification(
    _cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.no_user_modification = true;
    Ok(())
}

fn read_syntax(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    options: &DecodeOptions,
) -> ReadResult<()> {
    let (oid, length) = read_noidlen(cursor, options)?;
    def.syntax = Some(oid);
    def.syntax_length = length;
    Ok(())
}

fn read_usage(
    cursor: &mut Cursor<'_>,
    def: &mut AttributeType,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    let token = read_keyword_value(cursor)?;
    def.usage = AttributeUsage::from_keyword(token.text).ok_or_else(|| {
        ReadError::InvalidUsage {
            offset: token.offset,
            usage: token.text.to_string(),
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_definition;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn attr(value: &str) -> ReadResult<AttributeType> {
        read_definition(&mut Cursor::new(value), &DecodeOptions::default())
    }

    #[test]
    fn test_common_name() {
        let def = attr("( 2.5.4.3 NAME ( 'cn' 'commonName' ) DESC 'RFC4519: common name(s) for which the entity is known by' SUP name )").unwrap();
        assert_eq!(def.oid, "2.5.4.3");
        assert_eq!(def.common.names, vec!["cn", "commonName"]);
        assert_eq!(def.superior.as_deref(), Some("name"));
        assert_eq!(def.syntax, None);
        assert_eq!(def.usage, AttributeUsage::UserApplications);
    }

    #[test]
    fn test_operational_attribute() {
        let def = attr(
            "( 2.5.18.1 NAME 'createTimestamp' EQUALITY generalizedTimeMatch \
             ORDERING generalizedTimeOrderingMatch \
             SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 \
             SINGLE-VALUE NO-USER-MODIFICATION USAGE directoryOperation )",
        )
        .unwrap();
        assert_eq!(
            def,
            AttributeType {
                oid: "2.5.18.1".into(),
                common: CommonFields {
                    names: vec!["createTimestamp".into()],
                    ..CommonFields::default()
                },
                equality: Some("generalizedTimeMatch".into()),
                ordering: Some("generalizedTimeOrderingMatch".into()),
                syntax: Some("1.3.6.1.4.1.1466.115.121.1.24".into()),
                single_value: true,
                no_user_modification: true,
                usage: AttributeUsage::DirectoryOperation,
                ..AttributeType::default()
            }
        );
    }

    #[test]
    fn test_syntax_length() {
        let def = attr("( 2.5.4.41 NAME 'name' SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} )").unwrap();
        assert_eq!(def.syntax.as_deref(), Some("1.3.6.1.4.1.1466.115.121.1.15"));
        assert_eq!(def.syntax_length, Some(32768));
        assert_eq!(def.substring.as_deref(), Some("caseIgnoreSubstringsMatch"));
    }

    #[test]
    fn test_requires_superior_or_syntax() {
        assert_eq!(
            attr("( 2.5.4.3 NAME 'cn' )"),
            Err(ReadError::MissingRequiredField {
                field: "either a superior type or a syntax (SUP or SYNTAX)",
            })
        );
        assert!(attr("( 2.5.4.3 SUP name SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )").is_ok());
    }

    #[test]
    fn test_usage_values() {
        let def = attr("( 1.2.3 SUP name USAGE DSAOPERATION )").unwrap();
        assert_eq!(def.usage, AttributeUsage::DsaOperation);
        assert_eq!(
            attr("( 1.2.3 SUP name USAGE everyone )"),
            Err(ReadError::InvalidUsage {
                offset: 23,
                usage: "everyone".into(),
            })
        );
    }

    #[test]
    fn test_conflicting_fields() {
        assert_eq!(
            attr("( 1.2.3 SUP name COLLECTIVE USAGE dSAOperation )"),
            Err(ReadError::ConflictingFields {
                first: "COLLECTIVE",
                second: "an operational USAGE",
            })
        );
        assert_eq!(
            attr("( 1.2.3 SUP name NO-USER-MODIFICATION )"),
            Err(ReadError::ConflictingFields {
                first: "NO-USER-MODIFICATION",
                second: "USAGE userApplications",
            })
        );
        assert!(attr("( 1.2.3 SUP name COLLECTIVE )").unwrap().collective);
    }

    #[test]
    fn test_usage_predicates() {
        assert!(!AttributeUsage::UserApplications.is_operational());
        assert!(AttributeUsage::DistributedOperation.is_operational());
        assert_eq!(AttributeUsage::DsaOperation.to_string(), "dSAOperation");
        assert_eq!(AttributeUsage::from_keyword("nope"), None);
    }
}
