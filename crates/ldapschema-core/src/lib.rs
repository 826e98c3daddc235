//! ldapschema-core: RFC 4512 schema definition parser
//!
//! Reads the string values of the subschema attributes (`attributeTypes`,
//! `objectClasses`, `matchingRuleUse`, ...) into typed definitions, and
//! validates them for the corresponding RFC 4517 syntaxes. The crate is
//! `no_std` compatible and IO-free.
//!
//! Layers, leaves first:
//!
//! - [`cursor`]: read position over one definition string
//! - [`token`]: OID, quoted string, list and keyword readers
//! - [`parser`]: the generic driver, instantiated per kind by a
//!   [`SchemaElement`] keyword table
//! - [`Syntax`]: the validation facade
//!
//! ```
//! use ldapschema_core::{decode_matching_rule_use, DecodeOptions};
//!
//! let mru = decode_matching_rule_use("( 2.5.13.1 APPLIES ( cn $ sn ) )", &DecodeOptions::default())
//!     .unwrap();
//! assert_eq!(mru.applies, ["cn", "sn"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cursor;
pub mod definition;
pub mod error;
pub mod options;
pub mod parser;
pub mod syntax;
pub mod token;

pub use definition::{
    AttributeType, AttributeUsage, CommonFields, DitContentRule, DitStructureRule, Element,
    ElementKind, Extension, Extensions, LdapSyntax, MatchingRule, MatchingRuleUse, NameForm,
    ObjectClass, ObjectClassKind, SchemaElement,
};
pub use error::{DefinitionError, Found, ReadError, ReadResult};
pub use options::DecodeOptions;
pub use parser::decode;
pub use syntax::{EmptySchema, SchemaLookup, Syntax};

/// Decode an attribute type description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_attribute_type(
    value: &str,
    options: &DecodeOptions,
) -> Result<AttributeType, DefinitionError> {
    decode(value, options)
}

/// Decode an object class description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_object_class(
    value: &str,
    options: &DecodeOptions,
) -> Result<ObjectClass, DefinitionError> {
    decode(value, options)
}

/// Decode a matching rule description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_matching_rule(
    value: &str,
    options: &DecodeOptions,
) -> Result<MatchingRule, DefinitionError> {
    decode(value, options)
}

/// Decode a matching rule use description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_matching_rule_use(
    value: &str,
    options: &DecodeOptions,
) -> Result<MatchingRuleUse, DefinitionError> {
    decode(value, options)
}

/// Decode an LDAP syntax description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_ldap_syntax(
    value: &str,
    options: &DecodeOptions,
) -> Result<LdapSyntax, DefinitionError> {
    decode(value, options)
}

/// Decode a DIT content rule description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_dit_content_rule(
    value: &str,
    options: &DecodeOptions,
) -> Result<DitContentRule, DefinitionError> {
    decode(value, options)
}

/// Decode a DIT structure rule description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_dit_structure_rule(
    value: &str,
    options: &DecodeOptions,
) -> Result<DitStructureRule, DefinitionError> {
    decode(value, options)
}

/// Decode a name form description.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if `value` is not a valid definition.
pub fn decode_name_form(value: &str, options: &DecodeOptions) -> Result<NameForm, DefinitionError> {
    decode(value, options)
}
