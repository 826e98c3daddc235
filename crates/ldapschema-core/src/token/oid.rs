//! OID, descriptor and rule-id readers.

use super::illegal_terminator;
use crate::cursor::{is_structural, is_whitespace, Cursor, Mark};
use crate::error::{ReadError, ReadResult};
use crate::options::DecodeOptions;
use alloc::string::{String, ToString};

/// Read a numeric OID (`number *( DOT number )`).
///
/// Arcs are decimal numbers without leading zeros, separated by single dots.
///
/// # Errors
///
/// Returns [`ReadError::MalformedOid`] if the token does not start with a
/// digit, contains doubled or trailing dots, an arc with a leading zero or an
/// illegal character, and [`ReadError::OutOfInput`] at end of input.
pub fn read_numeric_oid<'src>(cursor: &mut Cursor<'src>) -> ReadResult<&'src str> {
    cursor.skip_whitespace();
    let start = cursor.mark();
    match cursor.peek() {
        None => {
            return Err(ReadError::OutOfInput {
                offset: start.offset(),
                expected: "a numeric OID",
            })
        }
        Some(c) if c.is_ascii_digit() => {}
        Some(_) => {
            return Err(malformed(
                cursor,
                start,
                start.offset(),
                "a numeric OID must start with a digit",
            ))
        }
    }

    loop {
        let arc_start = cursor.position();
        let arc = cursor.take_while(|c| c.is_ascii_digit());
        if arc.is_empty() {
            let reason = match cursor.peek() {
                Some('.') => "it contains consecutive dots",
                Some(c) if !is_whitespace(c) && !is_structural(c) => {
                    "it contains an illegal character"
                }
                _ => "it ends with a dot",
            };
            return Err(malformed(cursor, start, arc_start, reason));
        }
        if arc.len() > 1 && arc.starts_with('0') {
            return Err(malformed(cursor, start, arc_start, "an arc has a leading zero"));
        }
        if !cursor.eat('.') {
            break;
        }
    }

    if let Some(offset) = illegal_terminator(cursor) {
        return Err(malformed(cursor, start, offset, "it contains an illegal character"));
    }
    Ok(cursor.slice_from(start))
}

/// Read an OID in either form: `oid = descr / numericoid`.
///
/// Descriptors are keystrings (`ALPHA *( ALPHA / DIGIT / HYPHEN )`);
/// underscores are also accepted when
/// [`allow_malformed_names`](DecodeOptions::allow_malformed_names) is set.
///
/// # Errors
///
/// Returns [`ReadError::MalformedOid`] for an illegal token and
/// [`ReadError::OutOfInput`] at end of input.
pub fn read_oid<'src>(cursor: &mut Cursor<'src>, options: &DecodeOptions) -> ReadResult<&'src str> {
    cursor.skip_whitespace();
    let start = cursor.mark();
    match cursor.peek() {
        None => Err(ReadError::OutOfInput {
            offset: start.offset(),
            expected: "an OID",
        }),
        Some(c) if c.is_ascii_digit() => read_numeric_oid(cursor),
        Some(c) if c.is_ascii_alphabetic() => {
            let allow_underscore = options.allow_malformed_names;
            cursor.take_while(|c| {
                c.is_ascii_alphanumeric() || c == '-' || (allow_underscore && c == '_')
            });
            if let Some(offset) = illegal_terminator(cursor) {
                return Err(malformed(
                    cursor,
                    start,
                    offset,
                    "the descriptor contains an illegal character",
                ));
            }
            Ok(cursor.slice_from(start))
        }
        Some(_) => Err(malformed(
            cursor,
            start,
            start.offset(),
            "an OID must start with a digit or a letter",
        )),
    }
}

/// Read the identifying OID of a definition.
///
/// Numeric unless [`allow_non_numeric_oids`](DecodeOptions::allow_non_numeric_oids)
/// is set, in which case a descriptor is accepted too.
///
/// # Errors
///
/// See [`read_numeric_oid`] and [`read_oid`].
pub fn read_leading_oid<'src>(
    cursor: &mut Cursor<'src>,
    options: &DecodeOptions,
) -> ReadResult<&'src str> {
    if options.allow_non_numeric_oids {
        read_oid(cursor, options)
    } else {
        read_numeric_oid(cursor)
    }
}

/// Read a syntax reference with an optional length bound: `noidlen =
/// numericoid [ LCURLY len RCURLY ]`.
///
/// # Errors
///
/// Returns [`ReadError::InvalidLength`] for a malformed bound, otherwise see
/// [`read_leading_oid`].
pub fn read_noidlen(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> ReadResult<(String, Option<u32>)> {
    let oid = read_leading_oid(cursor, options)?.to_string();
    let brace = cursor.mark();
    if !cursor.eat('{') {
        return Ok((oid, None));
    }
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    let closed = cursor.eat('}');
    let bound = if closed { digits.parse::<u32>().ok() } else { None };
    match bound {
        Some(len) if illegal_terminator(cursor).is_none() => Ok((oid, Some(len))),
        _ => Err(ReadError::InvalidLength {
            offset: brace.offset(),
            text: cursor.word_at(brace).to_string(),
        }),
    }
}

/// Read a DIT structure rule id (`ruleid = number`).
///
/// # Errors
///
/// Returns [`ReadError::MalformedRuleId`] if the token is not a number that
/// fits in 32 bits without leading zeros, and [`ReadError::OutOfInput`] at
/// end of input.
pub fn read_rule_id(cursor: &mut Cursor<'_>) -> ReadResult<u32> {
    cursor.skip_whitespace();
    let start = cursor.mark();
    if cursor.is_eof() {
        return Err(ReadError::OutOfInput {
            offset: start.offset(),
            expected: "a rule ID",
        });
    }
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    let leading_zero = digits.len() > 1 && digits.starts_with('0');
    match digits.parse::<u32>() {
        Ok(id) if !leading_zero && illegal_terminator(cursor).is_none() => Ok(id),
        _ => Err(ReadError::MalformedRuleId {
            offset: start.offset(),
            text: cursor.word_at(start).to_string(),
        }),
    }
}

/// Build a [`ReadError::MalformedOid`] quoting the token that starts at
/// `start`.
fn malformed(
    cursor: &Cursor<'_>,
    start: Mark,
    offset: usize,
    reason: &'static str,
) -> ReadError {
    ReadError::MalformedOid {
        offset,
        text: token_text(cursor, start),
        reason,
    }
}

/// The whole offending token: consumed text plus the rest of the word.
fn token_text(cursor: &Cursor<'_>, start: Mark) -> String {
    let mut text = String::from(cursor.slice_from(start));
    if let Some(c) = cursor.peek() {
        if !is_whitespace(c) && !is_structural(c) {
            text.push_str(cursor.word_at(cursor.mark()));
        }
    }
    if text.is_empty() {
        if let Some(c) = cursor.peek() {
            text.push(c);
        }
    }
    text
}
