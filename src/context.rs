//! Variable contexts handed to the template renderers.
//!
//! Every generated file gets its own context. The builder below knows which
//! keys each target file expects, how the site name is escaped for it and
//! which of the two node name derivations it uses.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{FUSION_VIEW_HELPER, NEOS_VIEW_HELPER};
use crate::dimensions::Dimension;

/// A single context value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    Dimensions(Vec<Dimension>),
}

impl ContextValue {
    /// Returns the string value, or `None` for a dimension list.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContextValue::Text(text) => Some(text),
            ContextValue::Dimensions(_) => None,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<Vec<Dimension>> for ContextValue {
    fn from(value: Vec<Dimension>) -> Self {
        ContextValue::Dimensions(value)
    }
}

/// Ordered mapping from variable name to value, scoped to one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: IndexMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable and returns the context, for chaining.
    pub fn with<K: Into<String>, V: Into<ContextValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<ContextValue>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ContextValue::as_text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds the per-file contexts for one package key and site name.
///
/// The caller guarantees that both inputs were validated upstream.
#[derive(Debug, Clone, Copy)]
pub struct ContextBuilder<'a> {
    package_key: &'a str,
    site_name: &'a str,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(package_key: &'a str, site_name: &'a str) -> Self {
        Self { package_key, site_name }
    }

    /// Context of the site descriptor: escaped site name, full-key node name
    /// and the content dimensions.
    pub fn descriptor(&self, dimensions: Vec<Dimension>) -> Context {
        Context::new()
            .with("packageKey", self.package_key)
            .with("siteName", escape_special_chars(self.site_name))
            .with("siteNodeName", render_valid_node_name(self.package_key))
            .with("dimensions", dimensions)
    }

    /// Context of the root composition file.
    pub fn root_composition(&self) -> Context {
        Context::new()
            .with("packageKey", self.package_key)
            .with("siteName", self.site_name)
            .with("siteNodeName", render_valid_node_name(self.package_key))
    }

    /// Context of the page composition files. These use the raw domain part
    /// of the package key as node name, not the full-key slug.
    pub fn page_composition(&self) -> Context {
        Context::new()
            .with("packageKey", self.package_key)
            .with("siteName", self.site_name)
            .with("siteNodeName", package_key_domain_part(self.package_key))
    }

    /// Context of the page template, which also carries the view helper
    /// namespace declarations so they survive the engine verbatim.
    // The site name stays unescaped here: only the descriptor escapes it.
    pub fn page_template(&self) -> Context {
        Context::new()
            .with("siteName", self.site_name)
            .with("neosViewHelper", NEOS_VIEW_HELPER)
            .with("fusionViewHelper", FUSION_VIEW_HELPER)
            .with("siteNodeName", render_valid_node_name(self.package_key))
    }

    /// Context of the node type configuration.
    pub fn node_types(&self) -> Context {
        Context::new().with("packageKey", self.package_key)
    }
}

/// Turns a package key into a valid content node name.
///
/// Lowercases ASCII letters, condenses every run of other characters into a
/// single `-` and trims separators at both ends. Names that would start with
/// a digit, or come out empty, get a `node` prefix.
pub fn render_valid_node_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        return "node".to_string();
    }
    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("node-{slug}");
    }
    slug
}

/// Returns the part of the package key after its last `.`, or the whole key
/// when there is no separator (or nothing follows it).
pub fn package_key_domain_part(package_key: &str) -> &str {
    match package_key.rsplit_once('.') {
        Some((_, domain)) if !domain.is_empty() => domain,
        _ => package_key,
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for XML and HTML attribute contexts.
pub fn escape_special_chars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_valid_node_name() {
        assert_eq!(render_valid_node_name("Acme.MySite"), "acme-mysite");
        assert_eq!(render_valid_node_name("Acme.Demo"), "acme-demo");
        assert_eq!(render_valid_node_name("Neos.Demo.Site"), "neos-demo-site");
        assert_eq!(render_valid_node_name("..Acme..Site.."), "acme-site");
        assert_eq!(render_valid_node_name("3Dots.Site"), "node-3dots-site");
        assert_eq!(render_valid_node_name("..."), "node");
    }

    #[test]
    fn test_package_key_domain_part() {
        assert_eq!(package_key_domain_part("Acme.MySite"), "MySite");
        assert_eq!(package_key_domain_part("Neos.Demo.Site"), "Site");
        assert_eq!(package_key_domain_part("Acme"), "Acme");
        assert_eq!(package_key_domain_part("Acme."), "Acme.");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_special_chars("Demo & Co"), "Demo &amp; Co");
        assert_eq!(escape_special_chars("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_special_chars("it's"), "it&#039;s");
        assert_eq!(escape_special_chars("plain"), "plain");
    }
}
