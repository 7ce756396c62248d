//! Placeholder vocabulary and the single-pass substitution table.
//!
//! # Matching
//!
//! Substitution is one left-to-right scan. At each position the tokens are
//! tried in declaration order and the first literal that matches is replaced;
//! the scan resumes after the matched literal, never inside the inserted
//! text. A derived value that happens to spell another placeholder is
//! therefore emitted verbatim.
//!
//! The literals are bit-exact: template trees in the wild depend on them.

use std::fmt;

use serde::Serialize;

use crate::domain::casing::lower;
use crate::domain::error::DomainError;
use crate::domain::identifiers::DerivedIdentifiers;

// ── PlaceholderToken ─────────────────────────────────────────────────────────

/// A fixed placeholder literal found in template files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderToken {
    Vendor,
    VendorLower,
    VendorUri,
    VendorEmail,
    PluginNameCapitalized,
    PluginUri,
    PluginDescription,
    PluginNameLower,
    PluginNameSlug,
    PluginNameUpper,
    PluginNamePascal,
}

impl PlaceholderToken {
    /// Declaration order, which is also match priority.
    pub const ALL: [PlaceholderToken; 11] = [
        Self::Vendor,
        Self::VendorLower,
        Self::VendorUri,
        Self::VendorEmail,
        Self::PluginNameCapitalized,
        Self::PluginUri,
        Self::PluginDescription,
        Self::PluginNameLower,
        Self::PluginNameSlug,
        Self::PluginNameUpper,
        Self::PluginNamePascal,
    ];

    pub const fn literal(&self) -> &'static str {
        match self {
            Self::Vendor => "__Vendor__",
            Self::VendorLower => "__vendor__",
            Self::VendorUri => "__vendor_uri__",
            Self::VendorEmail => "__vendor_email__",
            Self::PluginNameCapitalized => "__Plugin_Name__",
            Self::PluginUri => "__plugin_uri__",
            Self::PluginDescription => "__Plugin_Description__",
            Self::PluginNameLower => "__plugin_name__",
            Self::PluginNameSlug => "__plugin-name__",
            Self::PluginNameUpper => "__PLUGIN_NAME__",
            Self::PluginNamePascal => "__PluginName__",
        }
    }

    /// The derived variant this token expands to.
    pub fn expand(&self, derived: &DerivedIdentifiers) -> String {
        match self {
            Self::Vendor => derived.vendor_name().to_owned(),
            Self::VendorLower => derived.vendor_name_lower().to_owned(),
            Self::VendorUri => lower(derived.vendor_uri()),
            Self::VendorEmail => lower(derived.vendor_email()),
            Self::PluginNameCapitalized => derived.plugin_name().to_owned(),
            // No separate plugin URI is collected; the vendor URI stands in.
            Self::PluginUri => lower(derived.vendor_uri()),
            Self::PluginDescription => derived.plugin_description().to_owned(),
            Self::PluginNameLower => derived.plugin_name_lower().to_owned(),
            Self::PluginNameSlug => lower(derived.text_domain()),
            Self::PluginNameUpper => derived.plugin_name_upper().to_owned(),
            Self::PluginNamePascal => derived.plugin_name_studly().to_owned(),
        }
    }

    /// Check that no literal contains another.
    ///
    /// With disjoint literals the declaration order only matters for
    /// overlapping occurrences in the text, never for which token a
    /// complete literal resolves to.
    pub fn verify_disjoint() -> Result<(), DomainError> {
        for outer in Self::ALL {
            for inner in Self::ALL {
                if outer != inner && outer.literal().contains(inner.literal()) {
                    return Err(DomainError::OverlappingTokens {
                        outer: outer.literal(),
                        inner: inner.literal(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

// ── TokenTable ───────────────────────────────────────────────────────────────

/// Every token bound to its expansion for one set of identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<(PlaceholderToken, String)>,
}

impl TokenTable {
    pub fn for_identifiers(derived: &DerivedIdentifiers) -> Self {
        Self {
            entries: PlaceholderToken::ALL
                .into_iter()
                .map(|token| (token, token.expand(derived)))
                .collect(),
        }
    }

    pub fn expansion(&self, token: PlaceholderToken) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| value.as_str())
    }

    /// Substitute every token in `text`.
    ///
    /// Text without any placeholder comes back byte-identical.
    pub fn apply_all(&self, text: &str) -> String {
        let haystack = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut pos = 0;

        while let Some((at, index)) = self.next_match(haystack, pos) {
            // Every literal starts with an ASCII '_', so `at` is a char boundary.
            out.push_str(&text[last..at]);
            let (token, value) = &self.entries[index];
            out.push_str(value);
            pos = at + token.literal().len();
            last = pos;
        }

        out.push_str(&text[last..]);
        out
    }

    /// Byte-oriented variant of [`Self::apply_all`] for file contents that
    /// may not be valid UTF-8.
    pub fn apply_bytes(&self, contents: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(contents.len());
        let mut last = 0;
        let mut pos = 0;

        while let Some((at, index)) = self.next_match(contents, pos) {
            out.extend_from_slice(&contents[last..at]);
            let (token, value) = &self.entries[index];
            out.extend_from_slice(value.as_bytes());
            pos = at + token.literal().len();
            last = pos;
        }

        out.extend_from_slice(&contents[last..]);
        out
    }

    /// Whether `contents` holds at least one placeholder.
    pub fn contains_tokens(&self, contents: &[u8]) -> bool {
        self.next_match(contents, 0).is_some()
    }

    fn next_match(&self, haystack: &[u8], from: usize) -> Option<(usize, usize)> {
        (from..haystack.len())
            .filter(|&i| haystack[i] == b'_')
            .find_map(|i| {
                let rest = &haystack[i..];
                self.entries
                    .iter()
                    .position(|(token, _)| rest.starts_with(token.literal().as_bytes()))
                    .map(|index| (i, index))
            })
    }
}
