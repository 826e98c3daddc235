//! Validation facade.
//!
//! A [`Syntax`] stands for one of the eight RFC 4517 definition syntaxes and
//! answers whether a value conforms to it. Rejections append a diagnostic to
//! a caller-supplied buffer instead of failing.

use crate::definition::{
    AttributeType, DitContentRule, DitStructureRule, Element, ElementKind, LdapSyntax,
    MatchingRule, MatchingRuleUse, NameForm, ObjectClass,
};
use crate::error::DefinitionError;
use crate::options::DecodeOptions;
use crate::parser::decode;
use core::fmt;

/// Read access to the surrounding schema.
///
/// Passed through [`Syntax::value_is_acceptable`] for callers that check
/// references; the grammar checks in this crate do not consult it.
pub trait SchemaLookup {
    /// Check if a definition of `kind` with this OID or name exists.
    fn contains(&self, kind: ElementKind, oid: &str) -> bool;
}

/// A schema with no definitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptySchema;

impl SchemaLookup for EmptySchema {
    fn contains(&self, _kind: ElementKind, _oid: &str) -> bool {
        false
    }
}

/// One definition syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syntax {
    kind: ElementKind,
    options: DecodeOptions,
}

impl Syntax {
    /// Syntax for definitions of `kind` with default options.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self::with_options(kind, DecodeOptions::default())
    }

    /// Syntax for definitions of `kind` with the given options.
    #[must_use]
    pub const fn with_options(kind: ElementKind, options: DecodeOptions) -> Self {
        Self { kind, options }
    }

    /// Kind of definition this syntax accepts.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Decoder options in effect.
    #[must_use]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// RFC 4517 syntax OID.
    #[must_use]
    pub const fn oid(&self) -> &'static str {
        self.kind.syntax_oid()
    }

    /// RFC 4517 syntax name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.syntax_name()
    }

    /// Definition syntaxes are always human-readable.
    #[must_use]
    pub const fn is_human_readable(&self) -> bool {
        true
    }

    /// Decode `value` as a definition of this syntax's kind.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] if `value` is not a valid definition.
    pub fn decode(&self, value: &str) -> Result<Element, DefinitionError> {
        let options = &self.options;
        Ok(match self.kind {
            ElementKind::AttributeType => decode::<AttributeType>(value, options)?.into(),
            ElementKind::ObjectClass => decode::<ObjectClass>(value, options)?.into(),
            ElementKind::MatchingRule => decode::<MatchingRule>(value, options)?.into(),
            ElementKind::MatchingRuleUse => decode::<MatchingRuleUse>(value, options)?.into(),
            ElementKind::LdapSyntax => decode::<LdapSyntax>(value, options)?.into(),
            ElementKind::DitContentRule => decode::<DitContentRule>(value, options)?.into(),
            ElementKind::DitStructureRule => decode::<DitStructureRule>(value, options)?.into(),
            ElementKind::NameForm => decode::<NameForm>(value, options)?.into(),
        })
    }

    /// Check whether `value` conforms to this syntax.
    ///
    /// On rejection, appends the diagnostic to `invalid_reason` and returns
    /// false. The buffer is left untouched on success.
    pub fn value_is_acceptable<W: fmt::Write + ?Sized>(
        &self,
        _schema: &dyn SchemaLookup,
        value: &str,
        invalid_reason: &mut W,
    ) -> bool {
        match self.decode(value) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(
                    syntax = self.name(),
                    offset = err.offset(),
                    error = %err.source,
                    "rejected schema definition"
                );
                // A failing sink only loses the message; the verdict stands.
                let _ = write!(invalid_reason, "{err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_metadata() {
        let syntax = Syntax::new(ElementKind::MatchingRuleUse);
        assert_eq!(syntax.oid(), "1.3.6.1.4.1.1466.115.121.1.31");
        assert_eq!(syntax.name(), "Matching Rule Use Description");
        assert!(syntax.is_human_readable());
        assert_eq!(syntax.kind(), ElementKind::MatchingRuleUse);
    }

    #[test]
    fn test_accept_leaves_buffer_untouched() {
        let syntax = Syntax::new(ElementKind::MatchingRuleUse);
        let mut reason = String::from("previous ");
        assert!(syntax.value_is_acceptable(&EmptySchema, "( 2.5.13.1 APPLIES cn )", &mut reason));
        assert_eq!(reason, "previous ");
    }

    #[test]
    fn test_reject_appends_reason() {
        let syntax = Syntax::new(ElementKind::MatchingRuleUse);
        let mut reason = String::from("previous: ");
        assert!(!syntax.value_is_acceptable(&EmptySchema, "* invalid *", &mut reason));
        assert_eq!(
            reason,
            "previous: The provided value \"* invalid *\" could not be parsed as a matching rule \
             use description because an open parenthesis was expected at position 0 but instead \
             a '*' character was found"
        );
    }

    #[test]
    fn test_decode_dispatches_on_kind() {
        for kind in ElementKind::ALL {
            let syntax = Syntax::new(kind);
            let err = syntax.decode("").unwrap_err();
            assert_eq!(err.kind, kind);
        }
        let element = Syntax::new(ElementKind::LdapSyntax)
            .decode("( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )")
            .unwrap();
        assert_eq!(element.kind(), ElementKind::LdapSyntax);
        assert_eq!(element.oid(), Some("1.3.6.1.4.1.1466.115.121.1.15"));
    }

    #[test]
    fn test_syntax_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Syntax>();
        assert_send_sync::<EmptySchema>();
    }
}
