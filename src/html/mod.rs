//! Serialization of the complete entry document.

use crate::config::RootContainer;
use crate::head::HeadSnapshot;
use crate::markup::{self, Element};

/// Render the full HTML document for one emit event.
///
/// Deterministic and side-effect-free: the head fragments appear in fixed
/// order (title, meta, base, link, script, style), the body holds the root
/// container followed by one script element per asset, and no whitespace is
/// inserted between elements.
pub fn render_document(
    head: &HeadSnapshot,
    root: &RootContainer,
    script_assets: &[String],
) -> String {
    let root = match root {
        RootContainer::Id(id) => Element::new("div").attr("id", id),
        RootContainer::Element(element) => element.clone(),
    };

    let mut out = String::new();
    out.push_str(markup::DOCTYPE);
    out.push_str("<html");
    out.push_str(&head.html_attributes.to_markup());
    out.push_str("><head>");
    out.push_str(&head.title.to_markup());
    out.push_str(&head.meta.to_markup());
    out.push_str(&head.base.to_markup());
    out.push_str(&head.link.to_markup());
    out.push_str(&head.script.to_markup());
    out.push_str(&head.style.to_markup());
    out.push_str("</head><body>");
    out.push_str(&root.to_markup());
    for asset in script_assets {
        let script = Element::new("script")
            .attr("type", "text/javascript")
            .attr("src", format!("/{asset}"));
        out.push_str(&script.to_markup());
    }
    out.push_str("</body></html>");
    out
}
