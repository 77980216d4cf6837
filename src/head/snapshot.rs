//! Rendering head props into markup fragments.
//!
//! `render` is the seam to the head-metadata layer: a complete props record
//! goes in, a complete snapshot comes out. The call is pure; nothing carries
//! over between emit events, so concurrent invocations cannot interleave.

use indexmap::IndexMap;

use crate::markup;

use super::{HeadProps, TagDescriptor};

/// Attribute set destined for the root `<html>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes(IndexMap<String, String>);

impl HtmlAttributes {
    /// Serialize as ` name="value"` pairs ready to splice into the tag.
    pub fn to_markup(&self) -> String {
        markup::render_attrs(&self.0)
    }
}

/// The `<title>` element, already resolved against the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFragment(Option<String>);

impl TitleFragment {
    pub fn to_markup(&self) -> String {
        match &self.0 {
            Some(text) => format!("<title>{}</title>", markup::escape_text(text)),
            None => String::new(),
        }
    }

    /// The resolved title text, if any.
    pub fn text(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// A homogeneous group of head tags (`meta`, `link`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFragment {
    tag: &'static str,
    entries: Vec<TagDescriptor>,
}

impl TagFragment {
    fn new(tag: &'static str, entries: Vec<TagDescriptor>) -> Self {
        Self { tag, entries }
    }

    pub fn to_markup(&self) -> String {
        self.entries
            .iter()
            .map(|descriptor| render_tag(self.tag, descriptor))
            .collect()
    }
}

fn render_tag(tag: &str, descriptor: &TagDescriptor) -> String {
    let attrs = markup::render_attrs(&descriptor.attrs);
    match &descriptor.inner_html {
        Some(raw) => format!("<{tag}{attrs}>{raw}</{tag}>"),
        None if markup::is_void(tag) => format!("<{tag}{attrs}/>"),
        None => format!("<{tag}{attrs}></{tag}>"),
    }
}

/// One observation of the head state, consumed immediately to build the
/// document and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadSnapshot {
    pub html_attributes: HtmlAttributes,
    pub title: TitleFragment,
    pub meta: TagFragment,
    pub base: TagFragment,
    pub link: TagFragment,
    pub script: TagFragment,
    pub style: TagFragment,
}

/// Render a props record into a fresh snapshot.
pub fn render(props: &HeadProps) -> HeadSnapshot {
    HeadSnapshot {
        html_attributes: HtmlAttributes(props.html_attributes.clone()),
        title: TitleFragment(resolve_title(props)),
        meta: TagFragment::new("meta", props.meta.clone()),
        base: TagFragment::new("base", props.base.clone().into_iter().collect()),
        link: TagFragment::new("link", props.link.clone()),
        script: TagFragment::new("script", props.script.clone()),
        style: TagFragment::new("style", props.style.clone()),
    }
}

/// A non-empty title is formatted through the template; otherwise the
/// default title is used verbatim.
fn resolve_title(props: &HeadProps) -> Option<String> {
    match props.title.as_deref() {
        Some(title) if !title.is_empty() => match props.title_template.as_deref() {
            Some(template) => Some(template.replace("%s", title)),
            None => Some(title.to_string()),
        },
        _ => props.default_title.clone(),
    }
}
