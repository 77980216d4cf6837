//! Low-level HTML text construction.
//!
//! Everything here is plain string building: escaping, attribute
//! serialization, and single-element rendering. Higher layers compose these
//! into head fragments and the full document.

use indexmap::IndexMap;

/// Document type declaration prefixed to every generated document.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check whether a tag is serialized in self-closing form.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape attribute values (`&`, `<`, `>`, `"`, `'`).
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize attributes as ` name="value"` pairs, in insertion order.
pub fn render_attrs(attrs: &IndexMap<String, String>) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out
}

/// A single element built programmatically.
///
/// Used for root containers and script references in the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
        }
    }

    /// Add an attribute, keeping declaration order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Serialize the element. Void tags self-close; everything else gets an
    /// explicit closing tag.
    pub fn to_markup(&self) -> String {
        let attrs = render_attrs(&self.attrs);
        if is_void(&self.tag) {
            format!("<{}{}/>", self.tag, attrs)
        } else {
            format!("<{0}{1}></{0}>", self.tag, attrs)
        }
    }
}
