//! Decoder configuration.

/// Compatibility switches for the definition grammar.
///
/// The defaults follow RFC 4512 except that unknown keywords are accepted as
/// extension properties, which keeps the grammar open to vendor additions
/// that do not use the `X-` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Accept name descriptors that are not keystrings (e.g. containing
    /// underscores or starting with a digit).
    pub allow_malformed_names: bool,
    /// Accept a descriptor where a numeric OID is required (the leading OID
    /// and `SYNTAX`).
    pub allow_non_numeric_oids: bool,
    /// Route unrecognized keywords without an `X-` prefix to the extension
    /// reader instead of rejecting them.
    pub allow_unknown_keywords: bool,
}

impl DecodeOptions {
    /// Strict RFC 4512: no compatibility switches enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_malformed_names: false,
            allow_non_numeric_oids: false,
            allow_unknown_keywords: false,
        }
    }

    /// Set [`allow_malformed_names`](Self::allow_malformed_names).
    #[must_use]
    pub const fn with_malformed_names(mut self, allow: bool) -> Self {
        self.allow_malformed_names = allow;
        self
    }

    /// Set [`allow_non_numeric_oids`](Self::allow_non_numeric_oids).
    #[must_use]
    pub const fn with_non_numeric_oids(mut self, allow: bool) -> Self {
        self.allow_non_numeric_oids = allow;
        self
    }

    /// Set [`allow_unknown_keywords`](Self::allow_unknown_keywords).
    #[must_use]
    pub const fn with_unknown_keywords(mut self, allow: bool) -> Self {
        self.allow_unknown_keywords = allow;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::strict().with_unknown_keywords(true)
    }
}
