//! HTML entry document generation for bundler builds.
//!
//! This crate is a bundler plugin: the host registers it on the
//! asset-emission lifecycle, and on every build-emit event it selects the
//! chunks relevant to the page, merges user-declared head metadata with the
//! stylesheet links computed from the build, renders a complete HTML
//! document, and publishes it into the compilation's output asset map.
//!
//! # Example
//! ```
//! use html_entry_plugin::{
//!     Chunk, ChunkFiles, Compilation, CompilationStats, EmitHook, HtmlEntryPlugin,
//!     PluginOptions, RootContainer,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let plugin = HtmlEntryPlugin::new(PluginOptions {
//!     root: RootContainer::Id("app".to_string()),
//!     ..Default::default()
//! });
//!
//! let mut compilation = Compilation::new(CompilationStats {
//!     chunks: vec![Chunk {
//!         names: vec!["main".to_string()],
//!         files: ChunkFiles::Many(vec!["main.abc.js".to_string()]),
//!         initial: true,
//!         ..Default::default()
//!     }],
//! });
//!
//! plugin.emit(&mut compilation).await?;
//! assert!(compilation.asset("index.html").is_some());
//! # Ok(())
//! # }
//! ```

pub mod chunks;
pub mod config;
pub mod error;
pub mod head;
pub mod html;
pub mod markup;
pub mod plugin;

pub use chunks::{Chunk, ChunkFiles, CompilationStats};
pub use config::{ChunkComparator, ChunkSelection, PluginOptions, RootContainer, SortMode};
pub use error::Error;
pub use head::{HeadProps, HeadSnapshot, TagDescriptor};
pub use plugin::{Compilation, EmitHook, EmittedAsset, HtmlEntryPlugin, PluginHost};
