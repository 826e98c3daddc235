//! Property tests for the definition driver.

use ldapschema_core::{
    decode_attribute_type, decode_matching_rule_use, DecodeOptions, ElementKind, EmptySchema,
    Syntax,
};
use proptest::prelude::*;

/// Optional fields of a matching rule use, as written.
const MRU_FIELDS: [&str; 5] = [
    "NAME ( 'mru1' 'mruAlias' )",
    "DESC 'a description with ( parens ) and $ signs'",
    "OBSOLETE",
    "APPLIES ( cn $ sn $ description )",
    "X-ORIGIN ( 'RFC 4512' 'test' )",
];

const ATTRIBUTE_FIELDS: [&str; 7] = [
    "NAME 'createTimestamp'",
    "EQUALITY generalizedTimeMatch",
    "ORDERING generalizedTimeOrderingMatch",
    "SYNTAX 1.3.6.1.4.1.1466.115.121.1.24{64}",
    "SINGLE-VALUE",
    "NO-USER-MODIFICATION",
    "USAGE directoryOperation",
];

fn definition(oid: &str, fields: &[&str]) -> String {
    format!("( {oid} {} )", fields.join(" "))
}

proptest! {
    #[test]
    fn mru_field_order_is_irrelevant(
        order in Just(MRU_FIELDS.to_vec()).prop_shuffle()
    ) {
        let options = DecodeOptions::default();
        let expected = decode_matching_rule_use(&definition("2.5.13.2", &MRU_FIELDS), &options).unwrap();
        let shuffled = decode_matching_rule_use(&definition("2.5.13.2", &order), &options).unwrap();
        prop_assert_eq!(expected, shuffled);
    }

    #[test]
    fn attribute_field_order_is_irrelevant(
        order in Just(ATTRIBUTE_FIELDS.to_vec()).prop_shuffle()
    ) {
        let options = DecodeOptions::default();
        let expected = decode_attribute_type(&definition("2.5.18.1", &ATTRIBUTE_FIELDS), &options).unwrap();
        let shuffled = decode_attribute_type(&definition("2.5.18.1", &order), &options).unwrap();
        prop_assert_eq!(expected, shuffled);
    }

    #[test]
    fn keywords_are_case_insensitive(
        lower in proptest::collection::vec(any::<bool>(), MRU_FIELDS.len())
    ) {
        let fields: Vec<String> = MRU_FIELDS
            .iter()
            .zip(&lower)
            .map(|(field, &lower)| {
                let (keyword, value) = field.split_once(' ').unwrap_or((*field, ""));
                // Extension keys keep their first-seen casing, so leave them alone.
                let keyword = if lower && !keyword.starts_with("X-") {
                    keyword.to_lowercase()
                } else {
                    keyword.to_string()
                };
                format!("{keyword} {value}")
            })
            .collect();
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        let options = DecodeOptions::default();
        let expected = decode_matching_rule_use(&definition("2.5.13.2", &MRU_FIELDS), &options).unwrap();
        let mixed = decode_matching_rule_use(&definition("2.5.13.2", &fields), &options).unwrap();
        prop_assert_eq!(expected, mixed);
    }

    #[test]
    fn validation_is_idempotent(value in "\\PC{0,40}") {
        for kind in ElementKind::ALL {
            let syntax = Syntax::new(kind);
            let mut first = String::new();
            let mut second = String::new();
            let a = syntax.value_is_acceptable(&EmptySchema, &value, &mut first);
            let b = syntax.value_is_acceptable(&EmptySchema, &value, &mut second);
            prop_assert_eq!(a, b);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(a, first.is_empty());
        }
    }

    #[test]
    fn arbitrary_input_never_panics(value in "[( )$'a-z0-9.{}\\\\-]{0,60}") {
        for kind in ElementKind::ALL {
            let _ = Syntax::new(kind).decode(&value);
        }
    }

    #[test]
    fn offsets_stay_within_value(value in "[( )$'A-Za-z0-9.]{0,40}") {
        for kind in ElementKind::ALL {
            if let Err(err) = Syntax::new(kind).decode(&value) {
                if let Some(offset) = err.offset() {
                    prop_assert!(offset <= value.chars().count(), "{err}");
                }
            }
        }
    }
}
