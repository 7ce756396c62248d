//! Raw user identifiers and their derived variants.
//!
//! [`RawIdentifiers`] is created once by whatever collects input and is
//! immutable afterwards. [`DerivedIdentifiers`] is a pure function of it.

use std::fmt;

use serde::Serialize;

use crate::domain::casing::{
    ascii_fold, capitalize_first, html_escape, lower, slug, studly, upper,
};
use crate::domain::error::DomainError;

/// Separator between the vendor and plugin segments of a namespace.
pub const NAMESPACE_SEPARATOR: &str = "\\";

// ── IdentifierField ──────────────────────────────────────────────────────────

/// One of the seven collected fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierField {
    PluginName,
    PluginDescription,
    VendorName,
    VendorEmail,
    VendorUri,
    Namespace,
    TextDomain,
}

impl IdentifierField {
    /// Collection order.
    pub const ALL: [IdentifierField; 7] = [
        Self::PluginName,
        Self::PluginDescription,
        Self::VendorName,
        Self::VendorEmail,
        Self::VendorUri,
        Self::Namespace,
        Self::TextDomain,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PluginName => "plugin name",
            Self::PluginDescription => "plugin description",
            Self::VendorName => "vendor name",
            Self::VendorEmail => "vendor email",
            Self::VendorUri => "vendor URI",
            Self::Namespace => "namespace",
            Self::TextDomain => "text domain",
        }
    }

    /// Short label used in the confirmation table.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PluginName => "Name",
            Self::PluginDescription => "Description",
            Self::VendorName => "Vendor",
            Self::VendorEmail => "Email",
            Self::VendorUri => "Vendor URI",
            Self::Namespace => "Namespace",
            Self::TextDomain => "Textdomain",
        }
    }

    /// Question asked when collecting the field interactively.
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::PluginName => "Enter the plugin's name",
            Self::PluginDescription => "Enter the plugin's description",
            Self::VendorName => "Enter the author's name (or vendor)",
            Self::VendorEmail => "Enter the author's email",
            Self::VendorUri => "Enter the author's URI",
            Self::Namespace => "Enter the plugin's namespace",
            Self::TextDomain => "Enter the plugin's text domain",
        }
    }

    /// Example value and the casing expected for it.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::PluginName => "My Plugin - Capital first letters",
            Self::PluginDescription => "A short description of the plugin",
            Self::VendorName => "Acme - Capital first letter",
            Self::VendorEmail => "Valid email address",
            Self::VendorUri => "https://acme.test - Full URL with protocol",
            Self::Namespace => "Acme\\MyPlugin - Capital first letters and backslashes, no spaces",
            Self::TextDomain => "my-plugin - lowercase with hyphens",
        }
    }
}

impl fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RawIdentifiers ───────────────────────────────────────────────────────────

/// The seven strings supplied by the user, after collection.
///
/// Invariant: every field is non-empty and both slugs derived from it
/// (plugin name and text domain) are non-empty. Enforced by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIdentifiers {
    plugin_name: String,
    plugin_description: String,
    vendor_name: String,
    vendor_email: String,
    vendor_uri: String,
    namespace: String,
    text_domain: String,
}

impl RawIdentifiers {
    pub fn builder() -> RawIdentifiersBuilder {
        RawIdentifiersBuilder::default()
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }
    pub fn plugin_description(&self) -> &str {
        &self.plugin_description
    }
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }
    pub fn vendor_email(&self) -> &str {
        &self.vendor_email
    }
    pub fn vendor_uri(&self) -> &str {
        &self.vendor_uri
    }
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }

    pub fn get(&self, field: IdentifierField) -> &str {
        match field {
            IdentifierField::PluginName => &self.plugin_name,
            IdentifierField::PluginDescription => &self.plugin_description,
            IdentifierField::VendorName => &self.vendor_name,
            IdentifierField::VendorEmail => &self.vendor_email,
            IdentifierField::VendorUri => &self.vendor_uri,
            IdentifierField::Namespace => &self.namespace,
            IdentifierField::TextDomain => &self.text_domain,
        }
    }

    /// Suggested namespace: `StudlyVendor\StudlyPlugin`.
    pub fn default_namespace(vendor_name: &str, plugin_name: &str) -> String {
        let vendor = capitalize_first(&ascii_fold(vendor_name));
        let plugin = capitalize_first(&ascii_fold(plugin_name));
        format!("{}{NAMESPACE_SEPARATOR}{}", studly(&vendor), studly(&plugin))
    }

    /// Suggested text domain: the plugin name slug.
    pub fn default_text_domain(plugin_name: &str) -> String {
        slug(plugin_name)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for field in IdentifierField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(DomainError::EmptyField {
                    field: field.as_str(),
                });
            }
        }
        for field in [IdentifierField::PluginName, IdentifierField::TextDomain] {
            let input = self.get(field);
            if slug(input).is_empty() {
                return Err(DomainError::SlugCollapsed {
                    field: field.as_str(),
                    input: input.to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`RawIdentifiers`].
///
/// Namespace and text domain fall back to their suggested defaults when not
/// set, mirroring a user accepting the suggestion.
#[derive(Debug, Default, Clone)]
pub struct RawIdentifiersBuilder {
    plugin_name: Option<String>,
    plugin_description: Option<String>,
    vendor_name: Option<String>,
    vendor_email: Option<String>,
    vendor_uri: Option<String>,
    namespace: Option<String>,
    text_domain: Option<String>,
}

impl RawIdentifiersBuilder {
    pub fn plugin_name(mut self, value: impl Into<String>) -> Self {
        self.plugin_name = Some(value.into());
        self
    }

    pub fn plugin_description(mut self, value: impl Into<String>) -> Self {
        self.plugin_description = Some(value.into());
        self
    }

    pub fn vendor_name(mut self, value: impl Into<String>) -> Self {
        self.vendor_name = Some(value.into());
        self
    }

    pub fn vendor_email(mut self, value: impl Into<String>) -> Self {
        self.vendor_email = Some(value.into());
        self
    }

    pub fn vendor_uri(mut self, value: impl Into<String>) -> Self {
        self.vendor_uri = Some(value.into());
        self
    }

    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    pub fn text_domain(mut self, value: impl Into<String>) -> Self {
        self.text_domain = Some(value.into());
        self
    }

    /// Set a field by enum, as prompt loops do.
    pub fn set(self, field: IdentifierField, value: impl Into<String>) -> Self {
        match field {
            IdentifierField::PluginName => self.plugin_name(value),
            IdentifierField::PluginDescription => self.plugin_description(value),
            IdentifierField::VendorName => self.vendor_name(value),
            IdentifierField::VendorEmail => self.vendor_email(value),
            IdentifierField::VendorUri => self.vendor_uri(value),
            IdentifierField::Namespace => self.namespace(value),
            IdentifierField::TextDomain => self.text_domain(value),
        }
    }

    pub fn build(self) -> Result<RawIdentifiers, DomainError> {
        fn required(value: Option<String>, field: IdentifierField) -> Result<String, DomainError> {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(DomainError::EmptyField {
                    field: field.as_str(),
                })
        }

        let plugin_name = required(self.plugin_name, IdentifierField::PluginName)?;
        // The default text domain is this slug, so a collapsed name must be
        // reported against the name.
        if slug(&plugin_name).is_empty() {
            return Err(DomainError::SlugCollapsed {
                field: IdentifierField::PluginName.as_str(),
                input: plugin_name,
            });
        }
        let plugin_description =
            required(self.plugin_description, IdentifierField::PluginDescription)?;
        let vendor_name = required(self.vendor_name, IdentifierField::VendorName)?;
        let vendor_email = required(self.vendor_email, IdentifierField::VendorEmail)?;
        let vendor_uri = required(self.vendor_uri, IdentifierField::VendorUri)?;

        let namespace = self
            .namespace
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| RawIdentifiers::default_namespace(&vendor_name, &plugin_name));
        let text_domain = self
            .text_domain
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| RawIdentifiers::default_text_domain(&plugin_name));

        let raw = RawIdentifiers {
            plugin_name,
            plugin_description,
            vendor_name,
            vendor_email,
            vendor_uri,
            namespace,
            text_domain,
        };
        raw.validate()?;
        Ok(raw)
    }
}

// ── DerivedIdentifiers ───────────────────────────────────────────────────────

/// Every casing/format variant the placeholder table needs.
///
/// Computed by [`DerivedIdentifiers::derive`]; deriving twice from the same
/// input yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedIdentifiers {
    plugin_name: String,
    plugin_name_studly: String,
    plugin_name_upper: String,
    plugin_name_lower: String,
    plugin_description: String,
    vendor_name: String,
    vendor_name_lower: String,
    vendor_email: String,
    vendor_uri: String,
    namespace: String,
    text_domain: String,
}

impl DerivedIdentifiers {
    pub fn derive(raw: &RawIdentifiers) -> Self {
        let plugin_name = capitalize_first(&ascii_fold(raw.plugin_name()));
        let plugin_name_studly = studly(&plugin_name);
        let vendor_name = capitalize_first(&ascii_fold(raw.vendor_name()));

        Self {
            plugin_name_upper: upper(&plugin_name_studly),
            plugin_name_lower: lower(&plugin_name_studly),
            plugin_name_studly,
            plugin_name,
            plugin_description: html_escape(raw.plugin_description()),
            vendor_name_lower: lower(&vendor_name),
            vendor_name,
            vendor_email: html_escape(raw.vendor_email()),
            vendor_uri: html_escape(raw.vendor_uri()),
            namespace: ascii_fold(raw.namespace()),
            text_domain: slug(raw.text_domain()),
        }
    }

    /// ASCII-folded, first letter capitalized.
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }
    pub fn plugin_name_studly(&self) -> &str {
        &self.plugin_name_studly
    }
    pub fn plugin_name_upper(&self) -> &str {
        &self.plugin_name_upper
    }
    pub fn plugin_name_lower(&self) -> &str {
        &self.plugin_name_lower
    }
    /// HTML-escaped.
    pub fn plugin_description(&self) -> &str {
        &self.plugin_description
    }
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }
    pub fn vendor_name_lower(&self) -> &str {
        &self.vendor_name_lower
    }
    /// HTML-escaped, original case.
    pub fn vendor_email(&self) -> &str {
        &self.vendor_email
    }
    /// HTML-escaped, original case.
    pub fn vendor_uri(&self) -> &str {
        &self.vendor_uri
    }
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
    /// Slugged text domain.
    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }

    /// Rows for the confirmation table, in collection order.
    pub fn preview(&self) -> Vec<(IdentifierField, &str)> {
        IdentifierField::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    IdentifierField::PluginName => self.plugin_name(),
                    IdentifierField::PluginDescription => self.plugin_description(),
                    IdentifierField::VendorName => self.vendor_name(),
                    IdentifierField::VendorEmail => self.vendor_email(),
                    IdentifierField::VendorUri => self.vendor_uri(),
                    IdentifierField::Namespace => self.namespace(),
                    IdentifierField::TextDomain => self.text_domain(),
                };
                (field, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawIdentifiers {
        RawIdentifiers::builder()
            .plugin_name("my plugin")
            .plugin_description("Adds <b>bold</b> & more")
            .vendor_name("arthos")
            .vendor_email("Hello@Arthos.fr")
            .vendor_uri("https://arthos.fr/?a=1&b=2")
            .build()
            .unwrap()
    }

    #[test]
    fn builder_applies_defaults() {
        let raw = sample();
        assert_eq!(raw.namespace(), "Arthos\\MyPlugin");
        assert_eq!(raw.text_domain(), "my-plugin");
    }

    #[test]
    fn builder_keeps_explicit_values() {
        let raw = RawIdentifiers::builder()
            .plugin_name("my plugin")
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .namespace("Acme\\Thing")
            .text_domain("thing")
            .build()
            .unwrap();
        assert_eq!(raw.namespace(), "Acme\\Thing");
        assert_eq!(raw.text_domain(), "thing");
    }

    #[test]
    fn builder_trims_fields() {
        let raw = RawIdentifiers::builder()
            .plugin_name("  Demo  ")
            .plugin_description(" d ")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .build()
            .unwrap();
        assert_eq!(raw.plugin_name(), "Demo");
        assert_eq!(raw.plugin_description(), "d");
    }

    #[test]
    fn builder_rejects_missing_field() {
        let err = RawIdentifiers::builder()
            .plugin_name("my plugin")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyField {
                field: "plugin description"
            }
        );
    }

    #[test]
    fn builder_rejects_blank_field() {
        let err = RawIdentifiers::builder()
            .plugin_name("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::EmptyField { field: "plugin name" }));
    }

    #[test]
    fn builder_rejects_collapsing_text_domain() {
        let err = RawIdentifiers::builder()
            .plugin_name("my plugin")
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .text_domain("%%%")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::SlugCollapsed {
                field: "text domain",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_collapsing_plugin_name() {
        let err = RawIdentifiers::builder()
            .plugin_name("?!")
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .text_domain("fine")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::SlugCollapsed {
                field: "plugin name",
                ..
            }
        ));
    }

    #[test]
    fn collapsing_name_is_blamed_when_text_domain_is_defaulted() {
        let err = RawIdentifiers::builder()
            .plugin_name("!!!")
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::SlugCollapsed {
                field: "plugin name",
                input: "!!!".into(),
            }
        );
    }

    #[test]
    fn derive_is_deterministic() {
        let raw = sample();
        assert_eq!(DerivedIdentifiers::derive(&raw), DerivedIdentifiers::derive(&raw));
    }

    #[test]
    fn derive_plugin_name_variants() {
        let derived = DerivedIdentifiers::derive(&sample());
        assert_eq!(derived.plugin_name(), "My plugin");
        assert_eq!(derived.plugin_name_studly(), "MyPlugin");
        assert_eq!(derived.plugin_name_upper(), "MYPLUGIN");
        assert_eq!(derived.plugin_name_lower(), "myplugin");
        assert_eq!(derived.text_domain(), "my-plugin");
    }

    #[test]
    fn derive_escapes_markup_fields() {
        let derived = DerivedIdentifiers::derive(&sample());
        assert_eq!(
            derived.plugin_description(),
            "Adds &lt;b&gt;bold&lt;/b&gt; &amp; more"
        );
        assert_eq!(derived.vendor_uri(), "https://arthos.fr/?a=1&amp;b=2");
        assert_eq!(derived.vendor_email(), "Hello@Arthos.fr");
    }

    #[test]
    fn derive_vendor_variants() {
        let derived = DerivedIdentifiers::derive(&sample());
        assert_eq!(derived.vendor_name(), "Arthos");
        assert_eq!(derived.vendor_name_lower(), "arthos");
    }

    #[test]
    fn derive_folds_non_ascii_names() {
        let raw = RawIdentifiers::builder()
            .plugin_name("élan vital")
            .plugin_description("d")
            .vendor_name("Zoë")
            .vendor_email("e")
            .vendor_uri("u")
            .build()
            .unwrap();
        let derived = DerivedIdentifiers::derive(&raw);
        assert_eq!(derived.plugin_name(), "Elan vital");
        assert_eq!(derived.plugin_name_studly(), "ElanVital");
        assert_eq!(derived.vendor_name(), "Zoe");
        assert_eq!(derived.text_domain(), "elan-vital");
        assert_eq!(derived.namespace(), "Zoe\\ElanVital");
    }

    #[test]
    fn text_domain_is_slugged_even_when_explicit() {
        let raw = RawIdentifiers::builder()
            .plugin_name("x")
            .plugin_description("d")
            .vendor_name("v")
            .vendor_email("e")
            .vendor_uri("u")
            .text_domain("My Text Domain")
            .build()
            .unwrap();
        assert_eq!(DerivedIdentifiers::derive(&raw).text_domain(), "my-text-domain");
    }

    #[test]
    fn preview_lists_seven_rows_in_order() {
        let derived = DerivedIdentifiers::derive(&sample());
        let rows = derived.preview();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], (IdentifierField::PluginName, "My plugin"));
        assert_eq!(rows[6], (IdentifierField::TextDomain, "my-plugin"));
    }

    #[test]
    fn builder_set_by_field() {
        let mut builder = RawIdentifiers::builder();
        for field in IdentifierField::ALL {
            builder = builder.set(field, "value");
        }
        let raw = builder.build().unwrap();
        assert_eq!(raw.get(IdentifierField::VendorUri), "value");
        assert_eq!(raw.get(IdentifierField::TextDomain), "value");
    }
}
