//! Keyword handler tables.
//!
//! Each definition kind lists its keywords as a sorted static table of
//! [`Field`]s. The driver finds a handler by binary search, comparing
//! ASCII-case-insensitively so that the table itself stays lowercase.

use crate::cursor::Cursor;
use crate::definition::SchemaElement;
use crate::error::ReadResult;
use crate::options::DecodeOptions;
use crate::token::{read_name_descriptors, read_quoted_string};
use core::cmp::Ordering;

/// Reads the value of one keyword into the definition under construction.
pub type FieldReader<E> = fn(&mut Cursor<'_>, &mut E, &DecodeOptions) -> ReadResult<()>;

/// Keyword table entry.
pub struct Field<E> {
    keyword: &'static str,
    read: FieldReader<E>,
}

impl<E> Field<E> {
    /// Create an entry. `keyword` must be lowercase.
    #[must_use]
    pub const fn new(keyword: &'static str, read: FieldReader<E>) -> Self {
        Self { keyword, read }
    }

    /// The lowercase keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Run the handler.
    ///
    /// # Errors
    ///
    /// Propagates the handler's read failure.
    pub fn read(
        &self,
        cursor: &mut Cursor<'_>,
        def: &mut E,
        options: &DecodeOptions,
    ) -> ReadResult<()> {
        (self.read)(cursor, def, options)
    }
}

/// Find the handler for `keyword` in a sorted table.
pub(crate) fn lookup<'t, E>(table: &'t [Field<E>], keyword: &str) -> Option<&'t Field<E>> {
    table
        .binary_search_by(|field| cmp_ignore_ascii_case(field.keyword, keyword))
        .ok()
        .and_then(|idx| table.get(idx))
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// `NAME qdescrs`. Repeated keywords accumulate.
pub(crate) fn read_names<E: SchemaElement>(
    cursor: &mut Cursor<'_>,
    def: &mut E,
    options: &DecodeOptions,
) -> ReadResult<()> {
    let names = read_name_descriptors(cursor, options)?;
    let common = def.common_mut();
    for name in names {
        if !common.has_name(&name) {
            common.names.push(name);
        }
    }
    Ok(())
}

/// `DESC qdstring`.
pub(crate) fn read_description<E: SchemaElement>(
    cursor: &mut Cursor<'_>,
    def: &mut E,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.common_mut().description = Some(read_quoted_string(cursor)?);
    Ok(())
}

/// `OBSOLETE`.
pub(crate) fn mark_obsolete<E: SchemaElement>(
    _cursor: &mut Cursor<'_>,
    def: &mut E,
    _options: &DecodeOptions,
) -> ReadResult<()> {
    def.common_mut().obsolete = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{
        AttributeType, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule,
        MatchingRuleUse, NameForm, ObjectClass,
    };

    fn assert_sorted<E: SchemaElement>() {
        for field in E::FIELDS {
            assert_eq!(
                field.keyword,
                field.keyword.to_ascii_lowercase(),
                "{:?} keyword is not lowercase",
                E::KIND
            );
        }
        for window in E::FIELDS.windows(2) {
            assert!(
                window[0].keyword < window[1].keyword,
                "{:?} fields not sorted: {:?} should come before {:?}",
                E::KIND,
                window[0].keyword,
                window[1].keyword
            );
        }
    }

    #[test]
    fn test_field_tables_sorted() {
        assert_sorted::<AttributeType>();
        assert_sorted::<ObjectClass>();
        assert_sorted::<MatchingRule>();
        assert_sorted::<MatchingRuleUse>();
        assert_sorted::<LdapSyntax>();
        assert_sorted::<DitContentRule>();
        assert_sorted::<DitStructureRule>();
        assert_sorted::<NameForm>();
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = MatchingRuleUse::FIELDS;
        assert_eq!(lookup(table, "APPLIES").map(Field::keyword), Some("applies"));
        assert_eq!(lookup(table, "Obsolete").map(Field::keyword), Some("obsolete"));
        assert_eq!(lookup(table, "name").map(Field::keyword), Some("name"));
        assert!(lookup(table, "SYNTAX").is_none());
        assert!(lookup(table, "X-ORIGIN").is_none());
    }

    #[test]
    fn test_lookup_hyphenated_keywords() {
        let table = AttributeType::FIELDS;
        assert!(lookup(table, "SINGLE-VALUE").is_some());
        assert!(lookup(table, "NO-USER-MODIFICATION").is_some());
        assert!(lookup(table, "SINGLE").is_none());
    }
}
