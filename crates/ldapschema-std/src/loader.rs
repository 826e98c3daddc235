//! LDIF schema file loading.
//!
//! Schema definitions are usually stored as the attribute values of a
//! subschema entry:
//!
//! ```text
//! dn: cn=schema
//! attributeTypes: ( 2.5.4.3 NAME ( 'cn' 'commonName' )
//!   SUP name )
//! ```
//!
//! Lines starting with a single space continue the previous line (RFC 2849
//! folding). Attributes that are not subschema attributes are ignored.

use ldapschema_core::{DecodeOptions, ElementKind, EmptySchema, Syntax};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a schema file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A subschema value is base64-encoded (`attr:: value`).
    #[error("line {line}: base64-encoded {attribute} values are not supported")]
    EncodedValue {
        /// Line the attribute starts on.
        line: usize,
        /// Attribute name as written.
        attribute: String,
    },
}

/// One definition value read from a schema file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaValue {
    /// 1-based line the attribute starts on.
    pub line: usize,
    /// Kind implied by the attribute name.
    pub kind: ElementKind,
    /// The definition, unfolded.
    pub value: String,
}

/// A definition that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based line the attribute starts on.
    pub line: usize,
    /// Kind implied by the attribute name.
    pub kind: ElementKind,
    /// Diagnostic text.
    pub reason: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of checking a set of definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of definitions accepted.
    pub accepted: usize,
    /// Definitions rejected, in file order.
    pub rejected: Vec<Rejection>,
}

impl Report {
    /// Check if every definition was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Total number of definitions checked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.accepted + self.rejected.len()
    }
}

/// Extract the subschema definition values from LDIF text.
///
/// # Errors
///
/// Returns [`LoadError::EncodedValue`] for a base64-encoded subschema
/// value.
pub fn parse_ldif(source: &str) -> Result<Vec<SchemaValue>, LoadError> {
    let mut values = Vec::new();
    for (line, text) in unfold(source) {
        let Some((attribute, rest)) = text.split_once(':') else {
            continue;
        };
        // Attribute options (`attributeTypes;binary`) do not change the kind.
        let base = attribute.split(';').next().unwrap_or(attribute);
        let Some(kind) = ElementKind::from_schema_attribute(base.trim()) else {
            continue;
        };
        if rest.starts_with(':') {
            return Err(LoadError::EncodedValue {
                line,
                attribute: attribute.to_string(),
            });
        }
        values.push(SchemaValue {
            line,
            kind,
            value: rest.trim().to_string(),
        });
    }
    Ok(values)
}

/// Join folded lines, dropping comments and blank lines.
///
/// Yields each logical line with the 1-based number of its first physical
/// line.
fn unfold(source: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();
    let mut in_comment = false;
    for (idx, raw) in source.lines().enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(continuation) = raw.strip_prefix(' ') {
            if !in_comment {
                if let Some((_, last)) = lines.last_mut() {
                    last.push_str(continuation);
                }
            }
            continue;
        }
        in_comment = raw.starts_with('#');
        if !in_comment && !raw.is_empty() {
            lines.push((idx + 1, raw.to_string()));
        }
    }
    lines
}

/// Validate every value with the given options.
#[must_use]
pub fn check_values(values: &[SchemaValue], options: &DecodeOptions) -> Report {
    let mut report = Report::default();
    for value in values {
        let syntax = Syntax::with_options(value.kind, *options);
        let mut reason = String::new();
        if syntax.value_is_acceptable(&EmptySchema, &value.value, &mut reason) {
            report.accepted += 1;
        } else {
            tracing::debug!(line = value.line, kind = %value.kind, "{reason}");
            report.rejected.push(Rejection {
                line: value.line,
                kind: value.kind,
                reason,
            });
        }
    }
    report
}

/// Read an LDIF schema file and validate every definition in it.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise see
/// [`parse_ldif`].
pub fn check_file(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Report, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_ldif(&source)?;
    let report = check_values(&values, options);
    tracing::info!(
        path = %path.display(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "checked schema file"
    );
    Ok(report)
}
