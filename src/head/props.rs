//! User-facing head metadata descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One head tag described as data: attribute name/value pairs in declaration
/// order, plus optional raw inner content for inline scripts and styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescriptor {
    /// Raw text placed inside the element, bypassing escaping.
    #[serde(default, rename = "innerHTML", skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,

    /// Attributes in declaration order.
    #[serde(flatten)]
    pub attrs: IndexMap<String, String>,
}

impl TagDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, keeping declaration order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set raw inner content.
    pub fn with_inner_html(mut self, content: impl Into<String>) -> Self {
        self.inner_html = Some(content.into());
        self
    }
}

/// Declarative description of the document head, merged from defaults and
/// user overrides at plugin construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadProps {
    /// Attributes carried by the root `<html>` element.
    pub html_attributes: IndexMap<String, String>,

    /// Page title, formatted through `title_template` when present.
    pub title: Option<String>,

    /// Fallback title used when `title` is absent or empty.
    pub default_title: Option<String>,

    /// Template applied to a non-empty `title`; every `%s` is replaced.
    pub title_template: Option<String>,

    /// Optional `<base>` tag.
    pub base: Option<TagDescriptor>,

    /// `<meta>` tags, in order.
    pub meta: Vec<TagDescriptor>,

    /// `<link>` tags, in order.
    pub link: Vec<TagDescriptor>,

    /// `<script>` tags, in order.
    pub script: Vec<TagDescriptor>,

    /// `<style>` tags, in order.
    pub style: Vec<TagDescriptor>,
}

impl Default for HeadProps {
    fn default() -> Self {
        Self {
            html_attributes: IndexMap::new(),
            title: Some("Title".to_string()),
            default_title: Some("Default Title".to_string()),
            title_template: Some("%s - Webpack App".to_string()),
            base: None,
            meta: Vec::new(),
            link: Vec::new(),
            script: Vec::new(),
            style: Vec::new(),
        }
    }
}
