//! Declarative head metadata.
//!
//! User-declared props are merged with the stylesheet links computed from
//! the build, then rendered into a [`HeadSnapshot`] once per emit event.

mod props;
mod snapshot;

pub use props::{HeadProps, TagDescriptor};
pub use snapshot::{render, HeadSnapshot, HtmlAttributes, TagFragment, TitleFragment};

/// Append one stylesheet link per emitted style asset to the declared links.
///
/// Returns a new record; the input props are never mutated. Synthesized
/// entries follow the user's own, in asset order.
pub fn merge_styles(props: &HeadProps, style_assets: &[String]) -> HeadProps {
    let mut merged = props.clone();
    merged.link.extend(style_assets.iter().map(|asset| {
        TagDescriptor::new()
            .attr("rel", "stylesheet")
            .attr("href", asset)
    }));
    merged
}
