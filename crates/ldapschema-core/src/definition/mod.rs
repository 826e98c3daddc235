//! Parsed schema definitions.
//!
//! One record type per definition kind. Every record embeds the
//! [`CommonFields`] shared by all kinds (names, description, obsolete flag,
//! extension properties) next to its kind-specific fields. Values keep the
//! casing they were written with; only keywords are matched
//! case-insensitively.

mod attribute_type;
mod dit_content_rule;
mod dit_structure_rule;
mod ldap_syntax;
mod matching_rule;
mod matching_rule_use;
mod name_form;
mod object_class;

pub use attribute_type::{AttributeType, AttributeUsage};
pub use dit_content_rule::DitContentRule;
pub use dit_structure_rule::DitStructureRule;
pub use ldap_syntax::LdapSyntax;
pub use matching_rule::MatchingRule;
pub use matching_rule_use::MatchingRuleUse;
pub use name_form::NameForm;
pub use object_class::{ObjectClass, ObjectClassKind};

use crate::cursor::Cursor;
use crate::error::ReadResult;
use crate::options::DecodeOptions;
use crate::parser::Field;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The eight kinds of subschema definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// `AttributeTypeDescription`
    AttributeType,
    /// `ObjectClassDescription`
    ObjectClass,
    /// `MatchingRuleDescription`
    MatchingRule,
    /// `MatchingRuleUseDescription`
    MatchingRuleUse,
    /// `SyntaxDescription`
    LdapSyntax,
    /// `DITContentRuleDescription`
    DitContentRule,
    /// `DITStructureRuleDescription`
    DitStructureRule,
    /// `NameFormDescription`
    NameForm,
}

impl ElementKind {
    /// All kinds, in subschema attribute order.
    pub const ALL: [Self; 8] = [
        Self::AttributeType,
        Self::ObjectClass,
        Self::MatchingRule,
        Self::MatchingRuleUse,
        Self::LdapSyntax,
        Self::DitContentRule,
        Self::DitStructureRule,
        Self::NameForm,
    ];

    /// Phrase naming a value of this kind in diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AttributeType => "an attribute type description",
            Self::ObjectClass => "an object class description",
            Self::MatchingRule => "a matching rule description",
            Self::MatchingRuleUse => "a matching rule use description",
            Self::LdapSyntax => "an LDAP syntax description",
            Self::DitContentRule => "a DIT content rule description",
            Self::DitStructureRule => "a DIT structure rule description",
            Self::NameForm => "a name form description",
        }
    }

    /// RFC 4517 name of the syntax whose values are definitions of this kind.
    #[must_use]
    pub const fn syntax_name(self) -> &'static str {
        match self {
            Self::AttributeType => "Attribute Type Description",
            Self::ObjectClass => "Object Class Description",
            Self::MatchingRule => "Matching Rule Description",
            Self::MatchingRuleUse => "Matching Rule Use Description",
            Self::LdapSyntax => "LDAP Syntax Description",
            Self::DitContentRule => "DIT Content Rule Description",
            Self::DitStructureRule => "DIT Structure Rule Description",
            Self::NameForm => "Name Form Description",
        }
    }

    /// RFC 4517 OID of that syntax.
    #[must_use]
    pub const fn syntax_oid(self) -> &'static str {
        match self {
            Self::AttributeType => "1.3.6.1.4.1.1466.115.121.1.3",
            Self::ObjectClass => "1.3.6.1.4.1.1466.115.121.1.37",
            Self::MatchingRule => "1.3.6.1.4.1.1466.115.121.1.30",
            Self::MatchingRuleUse => "1.3.6.1.4.1.1466.115.121.1.31",
            Self::LdapSyntax => "1.3.6.1.4.1.1466.115.121.1.54",
            Self::DitContentRule => "1.3.6.1.4.1.1466.115.121.1.16",
            Self::DitStructureRule => "1.3.6.1.4.1.1466.115.121.1.17",
            Self::NameForm => "1.3.6.1.4.1.1466.115.121.1.35",
        }
    }

    /// Subschema subentry attribute holding definitions of this kind.
    #[must_use]
    pub const fn schema_attribute(self) -> &'static str {
        match self {
            Self::AttributeType => "attributeTypes",
            Self::ObjectClass => "objectClasses",
            Self::MatchingRule => "matchingRules",
            Self::MatchingRuleUse => "matchingRuleUse",
            Self::LdapSyntax => "ldapSyntaxes",
            Self::DitContentRule => "dITContentRules",
            Self::DitStructureRule => "dITStructureRules",
            Self::NameForm => "nameForms",
        }
    }

    /// Look up a kind by its subschema attribute name (case-insensitive).
    #[must_use]
    pub fn from_schema_attribute(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.schema_attribute().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.syntax_name())
    }
}

/// One extension property: an `X-` (or unrecognized) keyword and its values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    /// Keyword as first written.
    pub name: String,
    /// Values in order of appearance.
    pub values: Vec<String>,
}

/// Extension properties of a definition, in order of first appearance.
///
/// Keys compare case-insensitively. A repeated key appends its values to
/// the existing entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extensions {
    entries: Vec<Extension>,
}

impl Extensions {
    /// Create an empty property map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add values under `name`, merging with an existing entry.
    pub fn insert(&mut self, name: &str, values: Vec<String>) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.values.extend(values),
            None => self.entries.push(Extension {
                name: name.into(),
                values,
            }),
        }
    }

    /// Values of the property `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.values.as_slice())
    }

    /// Number of distinct properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the properties in order of first appearance.
    pub fn iter(&self) -> core::slice::Iter<'_, Extension> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a Extension;
    type IntoIter = core::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fields shared by every definition kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonFields {
    /// `NAME` descriptors, original casing preserved.
    pub names: Vec<String>,
    /// `DESC` text.
    pub description: Option<String>,
    /// `OBSOLETE` flag.
    pub obsolete: bool,
    /// Extension properties.
    pub extensions: Extensions,
}

impl CommonFields {
    /// Check if `name` is one of the definition's names (case-insensitive).
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// The first name, if any.
    #[must_use]
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// A definition kind the generic driver can decode.
///
/// Implementors describe their grammar as data: how to read the primary
/// identifier, a keyword table and a final check run at the closing
/// parenthesis.
pub trait SchemaElement: Sized + 'static {
    /// Kind reported in diagnostics.
    const KIND: ElementKind;

    /// Field handlers, keyed by lowercase keyword, sorted by keyword.
    const FIELDS: &'static [Field<Self>];

    /// Read the primary identifier after the opening parenthesis and
    /// create an otherwise empty definition.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is malformed or missing.
    fn read_identifier(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Self>;

    /// Shared fields.
    fn common(&self) -> &CommonFields;

    /// Shared fields, mutably.
    fn common_mut(&mut self) -> &mut CommonFields;

    /// Apply defaults and check required fields once the whole definition
    /// has been read.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MissingRequiredField`](crate::ReadError::MissingRequiredField)
    /// or [`ReadError::ConflictingFields`](crate::ReadError::ConflictingFields).
    fn finish(&mut self) -> ReadResult<()>;
}

/// A decoded definition of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// An attribute type.
    AttributeType(AttributeType),
    /// An object class.
    ObjectClass(ObjectClass),
    /// A matching rule.
    MatchingRule(MatchingRule),
    /// A matching rule use.
    MatchingRuleUse(MatchingRuleUse),
    /// An LDAP syntax.
    LdapSyntax(LdapSyntax),
    /// A DIT content rule.
    DitContentRule(DitContentRule),
    /// A DIT structure rule.
    DitStructureRule(DitStructureRule),
    /// A name form.
    NameForm(NameForm),
}

impl Element {
    /// Kind of this definition.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::AttributeType(_) => ElementKind::AttributeType,
            Self::ObjectClass(_) => ElementKind::ObjectClass,
            Self::MatchingRule(_) => ElementKind::MatchingRule,
            Self::MatchingRuleUse(_) => ElementKind::MatchingRuleUse,
            Self::LdapSyntax(_) => ElementKind::LdapSyntax,
            Self::DitContentRule(_) => ElementKind::DitContentRule,
            Self::DitStructureRule(_) => ElementKind::DitStructureRule,
            Self::NameForm(_) => ElementKind::NameForm,
        }
    }

    /// Shared fields of this definition.
    #[must_use]
    pub fn common(&self) -> &CommonFields {
        match self {
            Self::AttributeType(d) => d.common(),
            Self::ObjectClass(d) => d.common(),
            Self::MatchingRule(d) => d.common(),
            Self::MatchingRuleUse(d) => d.common(),
            Self::LdapSyntax(d) => d.common(),
            Self::DitContentRule(d) => d.common(),
            Self::DitStructureRule(d) => d.common(),
            Self::NameForm(d) => d.common(),
        }
    }

    /// The OID that identifies this definition.
    ///
    /// DIT structure rules are identified by a rule id instead and return
    /// `None`.
    #[must_use]
    pub fn oid(&self) -> Option<&str> {
        match self {
            Self::AttributeType(d) => Some(&d.oid),
            Self::ObjectClass(d) => Some(&d.oid),
            Self::MatchingRule(d) => Some(&d.oid),
            Self::MatchingRuleUse(d) => Some(&d.oid),
            Self::LdapSyntax(d) => Some(&d.oid),
            Self::DitContentRule(d) => Some(&d.oid),
            Self::NameForm(d) => Some(&d.oid),
            Self::DitStructureRule(_) => None,
        }
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(def: $variant) -> Self {
                    Self::$variant(def)
                }
            }
        )*
    };
}

impl_from_element!(
    AttributeType,
    ObjectClass,
    MatchingRule,
    MatchingRuleUse,
    LdapSyntax,
    DitContentRule,
    DitStructureRule,
    NameForm,
);

/// Implement the [`SchemaElement`] accessors for a record with a `common`
/// field.
macro_rules! common_accessors {
    () => {
        fn common(&self) -> &$crate::definition::CommonFields {
            &self.common
        }

        fn common_mut(&mut self) -> &mut $crate::definition::CommonFields {
            &mut self.common
        }
    };
}
pub(crate) use common_accessors;
