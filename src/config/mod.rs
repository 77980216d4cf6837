//! Plugin configuration.
//!
//! Options are resolved once at plugin construction time, merging built-in
//! defaults with user overrides, and are never mutated afterwards. They can
//! be built in code (struct update over [`PluginOptions::default`]) or
//! deserialized from a host build tool's own configuration file.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::chunks::Chunk;
use crate::head::HeadProps;
use crate::markup::Element;

/// Which chunks are eligible for the generated document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChunkSelection {
    /// Every named initial chunk.
    #[default]
    All,
    /// Only chunks whose name appears in the list.
    Only(Vec<String>),
}

impl<'de> Deserialize<'de> for ChunkSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SelectionVisitor;

        impl<'de> Visitor<'de> for SelectionVisitor {
            type Value = ChunkSelection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("the string \"all\" or a list of chunk names")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == "all" {
                    Ok(ChunkSelection::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(ChunkSelection::Only(names))
            }
        }

        deserializer.deserialize_any(SelectionVisitor)
    }
}

/// Comparator supplied by the caller for [`SortMode::Custom`].
pub type ChunkComparator = Arc<dyn Fn(&Chunk, &Chunk) -> Ordering + Send + Sync>;

/// How the selected chunks are ordered.
///
/// Named strategies are validated when sorting runs, not here, so the raw
/// string is carried exactly as configured.
#[derive(Clone)]
pub enum SortMode {
    /// One of the built-in strategies (`auto`, `id`, `dependency`).
    Named(String),
    /// Keep the order the chunks came in.
    None,
    /// A caller-supplied total order.
    Custom(ChunkComparator),
}

impl SortMode {
    /// Wrap a comparator function.
    pub fn custom<F>(comparator: F) -> Self
    where
        F: Fn(&Chunk, &Chunk) -> Ordering + Send + Sync + 'static,
    {
        SortMode::Custom(Arc::new(comparator))
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Named("auto".to_string())
    }
}

impl fmt::Debug for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Named(name) => f.debug_tuple("Named").field(name).finish(),
            SortMode::None => f.write_str("None"),
            SortMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mode = String::deserialize(deserializer)?;
        if mode == "none" {
            Ok(SortMode::None)
        } else {
            Ok(SortMode::Named(mode))
        }
    }
}

/// The container element the page mounts into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootContainer {
    /// An element id; a `<div>` with this id is synthesized.
    Id(String),
    /// A prebuilt element used as-is.
    Element(Element),
}

impl Default for RootContainer {
    fn default() -> Self {
        RootContainer::Id("root".to_string())
    }
}

impl<'de> Deserialize<'de> for RootContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Ok(RootContainer::Id(id))
    }
}

/// Construction-time plugin options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Which chunks to include. Default: all of them.
    pub chunks: ChunkSelection,

    /// Chunk names to leave out even when otherwise included.
    pub exclude_chunks: Vec<String>,

    /// Ordering applied after filtering.
    pub chunks_sort_mode: SortMode,

    /// Output path of the generated document inside the asset map.
    pub filename: String,

    /// Head metadata fed to the head renderer.
    pub props: HeadProps,

    /// Root container rendered at the top of the body.
    pub root: RootContainer,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            chunks: ChunkSelection::default(),
            exclude_chunks: Vec::new(),
            chunks_sort_mode: SortMode::default(),
            filename: "index.html".to_string(),
            props: HeadProps::default(),
            root: RootContainer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PluginOptions::default();
        assert_eq!(options.chunks, ChunkSelection::All);
        assert!(options.exclude_chunks.is_empty());
        assert!(matches!(&options.chunks_sort_mode, SortMode::Named(name) if name == "auto"));
        assert_eq!(options.filename, "index.html");
        assert_eq!(options.root, RootContainer::Id("root".to_string()));
    }

    #[test]
    fn test_options_deserialize_from_json() {
        let options: PluginOptions = serde_json::from_str(
            r#"{
                "chunks": ["main", "vendor"],
                "excludeChunks": ["dev-client"],
                "chunksSortMode": "dependency",
                "filename": "app.html",
                "root": "app"
            }"#,
        )
        .unwrap();
        assert_eq!(
            options.chunks,
            ChunkSelection::Only(vec!["main".to_string(), "vendor".to_string()])
        );
        assert_eq!(options.exclude_chunks, ["dev-client"]);
        assert!(matches!(&options.chunks_sort_mode, SortMode::Named(name) if name == "dependency"));
        assert_eq!(options.filename, "app.html");
        assert_eq!(options.root, RootContainer::Id("app".to_string()));
    }

    #[test]
    fn test_options_deserialize_from_toml_table() {
        let options: PluginOptions = toml::from_str(
            r#"
            chunks = "all"
            chunksSortMode = "none"

            [props]
            title = "My App"
            "#,
        )
        .unwrap();
        assert_eq!(options.chunks, ChunkSelection::All);
        assert!(matches!(options.chunks_sort_mode, SortMode::None));
        assert_eq!(options.props.title.as_deref(), Some("My App"));
        // Untouched fields keep their defaults.
        assert_eq!(options.filename, "index.html");
    }

    #[test]
    fn test_chunk_selection_rejects_other_strings() {
        let result: Result<ChunkSelection, _> = serde_json::from_str("\"some\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_mode_strings_are_not_validated_here() {
        // Unknown names deserialize fine; the sorter rejects them later.
        let mode: SortMode = serde_json::from_str("\"bogus\"").unwrap();
        assert!(matches!(mode, SortMode::Named(name) if name == "bogus"));
    }
}
