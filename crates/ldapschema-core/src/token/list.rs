//! OID list and rule-id list readers.

use super::oid::{read_oid, read_rule_id};
use crate::cursor::Cursor;
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Read one OID or a parenthesized, `$`-separated list of OIDs (`oids`).
///
/// The result is an ordered set: an OID that repeats an earlier one
/// (case-insensitively, since descriptors are case-insensitive) is dropped.
///
/// # Errors
///
/// - [`ReadError::MalformedList`] if no OID is present, the list is empty,
///   a separator is missing or doubled, or the closing parenthesis is
///   missing.
/// - [`ReadError::MalformedOid`] for a malformed element.
pub fn read_oids(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> ReadResult<Vec<String>> {
    cursor.skip_whitespace();
    let open = cursor.position();
    let mut oids = Vec::new();

    if !cursor.eat('(') {
        if matches!(cursor.peek(), None | Some(')')) {
            return Err(ReadError::MalformedList {
                offset: open,
                reason: "no OID was provided",
            });
        }
        push_unique(&mut oids, read_oid(cursor, options)?);
        return Ok(oids);
    }

    let unclosed = || ReadError::MalformedList {
        offset: open,
        reason: "the closing parenthesis is missing",
    };
    loop {
        // Expect an element.
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(unclosed()),
            Some(')') => {
                let reason = if oids.is_empty() {
                    "the list is empty"
                } else {
                    "a '$' separator is not followed by an OID"
                };
                return Err(ReadError::MalformedList {
                    offset: open,
                    reason,
                });
            }
            Some('$') => {
                let reason = if oids.is_empty() {
                    "a '$' separator is not preceded by an OID"
                } else {
                    "it contains consecutive '$' separators"
                };
                return Err(ReadError::MalformedList {
                    offset: open,
                    reason,
                });
            }
            Some(_) => push_unique(&mut oids, read_oid(cursor, options)?),
        }

        // Expect a separator or the end of the list.
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(unclosed()),
            Some(')') => {
                cursor.advance();
                return Ok(oids);
            }
            Some('$') => {
                cursor.advance();
            }
            Some(_) => {
                return Err(ReadError::MalformedList {
                    offset: open,
                    reason: "OIDs must be separated by '$'",
                })
            }
        }
    }
}

/// Read one rule id or a parenthesized, whitespace-separated list of rule
/// ids (`ruleids`).
///
/// # Errors
///
/// - [`ReadError::MalformedList`] for an empty or unclosed list.
/// - [`ReadError::MalformedRuleId`] for a malformed element.
pub fn read_rule_ids(cursor: &mut Cursor<'_>) -> ReadResult<Vec<u32>> {
    cursor.skip_whitespace();
    let open = cursor.position();
    if !cursor.eat('(') {
        return Ok(alloc::vec![read_rule_id(cursor)?]);
    }

    let mut ids = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => {
                return Err(ReadError::MalformedList {
                    offset: open,
                    reason: "the closing parenthesis is missing",
                })
            }
            Some(')') => {
                cursor.advance();
                break;
            }
            Some(_) => {
                let id = read_rule_id(cursor)?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
    }

    if ids.is_empty() {
        return Err(ReadError::MalformedList {
            offset: open,
            reason: "the list is empty",
        });
    }
    Ok(ids)
}

fn push_unique(oids: &mut Vec<String>, oid: &str) {
    if !oids.iter().any(|seen| seen.eq_ignore_ascii_case(oid)) {
        oids.push(oid.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn oids(source: &str) -> ReadResult<Vec<String>> {
        read_oids(&mut Cursor::new(source), &DecodeOptions::default())
    }

    #[test]
    fn test_single_oid() {
        assert_eq!(oids(" cn )"), Ok(vec!["cn".to_string()]));
        assert_eq!(oids("2.5.4.3"), Ok(vec!["2.5.4.3".to_string()]));
    }

    #[test]
    fn test_oid_list() {
        assert_eq!(
            oids("( cn $ sn $ 2.5.4.42 )"),
            Ok(vec!["cn".to_string(), "sn".to_string(), "2.5.4.42".to_string()])
        );
        assert_eq!(
            oids("(cn$sn)"),
            Ok(vec!["cn".to_string(), "sn".to_string()])
        );
    }

    #[test]
    fn test_oid_list_collapses_duplicates() {
        assert_eq!(
            oids("( cn $ sn $ CN )"),
            Ok(vec!["cn".to_string(), "sn".to_string()])
        );
    }

    #[test]
    fn test_oid_list_leaves_rest() {
        let mut cursor = Cursor::new("(cn $ sn) MAY");
        read_oids(&mut cursor, &DecodeOptions::default()).unwrap();
        assert_eq!(cursor.rest(), " MAY");
    }

    #[test]
    fn test_missing_oid() {
        assert_eq!(
            oids(" )"),
            Err(ReadError::MalformedList {
                offset: 1,
                reason: "no OID was provided",
            })
        );
        assert!(matches!(oids(""), Err(ReadError::MalformedList { .. })));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            oids("( )"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "the list is empty",
            })
        );
    }

    #[test]
    fn test_separator_errors() {
        assert_eq!(
            oids("( cn $ )"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "a '$' separator is not followed by an OID",
            })
        );
        assert_eq!(
            oids("( cn $$ sn )"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "it contains consecutive '$' separators",
            })
        );
        assert_eq!(
            oids("( $ cn )"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "a '$' separator is not preceded by an OID",
            })
        );
        assert_eq!(
            oids("( cn sn )"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "OIDs must be separated by '$'",
            })
        );
    }

    #[test]
    fn test_unclosed_list() {
        assert_eq!(
            oids("( cn $ sn"),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "the closing parenthesis is missing",
            })
        );
    }

    #[test]
    fn test_malformed_element() {
        let err = oids("( cn $ 1..2 )").unwrap_err();
        assert!(matches!(err, ReadError::MalformedOid { offset: 9, .. }));
    }

    #[test]
    fn test_rule_ids() {
        assert_eq!(read_rule_ids(&mut Cursor::new(" 7 ")), Ok(vec![7]));
        assert_eq!(read_rule_ids(&mut Cursor::new("( 1 2 3 2 )")), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_rule_id_list_errors() {
        assert_eq!(
            read_rule_ids(&mut Cursor::new("()")),
            Err(ReadError::MalformedList {
                offset: 0,
                reason: "the list is empty",
            })
        );
        assert!(matches!(
            read_rule_ids(&mut Cursor::new("( 1 2")),
            Err(ReadError::MalformedList { .. })
        ));
        assert!(matches!(
            read_rule_ids(&mut Cursor::new("( 1 x )")),
            Err(ReadError::MalformedRuleId { offset: 4, .. })
        ));
    }
}
