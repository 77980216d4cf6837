//! Plugin hooks into the host bundler's emit lifecycle.
//!
//! The host drives [`EmitHook`] implementations once per build-emit event.
//! Each invocation gets its own [`Compilation`] snapshot; the plugin's
//! options are the only state shared across invocations, and they are
//! read-only.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::chunks::{self, CompilationStats};
use crate::config::PluginOptions;
use crate::{head, html};

/// One entry in the compilation's output asset map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    content: String,
}

impl EmittedAsset {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Byte length of the asset.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// The asset's content.
    pub fn source(&self) -> &str {
        &self.content
    }
}

/// A single build-emit event's view of the compilation: a read-only stats
/// snapshot plus the output asset map.
#[derive(Debug, Default)]
pub struct Compilation {
    /// Stats snapshot for this event.
    pub stats: CompilationStats,

    assets: HashMap<String, EmittedAsset>,
}

impl Compilation {
    pub fn new(stats: CompilationStats) -> Self {
        Self {
            stats,
            assets: HashMap::new(),
        }
    }

    /// Add an output asset, replacing any existing entry under the same
    /// filename.
    pub fn emit_asset(&mut self, filename: impl Into<String>, asset: EmittedAsset) {
        self.assets.insert(filename.into(), asset);
    }

    /// Look up an output asset by filename.
    pub fn asset(&self, filename: &str) -> Option<&EmittedAsset> {
        self.assets.get(filename)
    }

    /// All output assets emitted so far.
    pub fn assets(&self) -> &HashMap<String, EmittedAsset> {
        &self.assets
    }
}

/// Hook invoked when the bundler is about to emit assets.
#[async_trait]
pub trait EmitHook: Send + Sync {
    /// Hook name for logging and debugging.
    fn name(&self) -> &str;

    /// Inspect the compilation and add output assets.
    ///
    /// Returning `Ok` signals the host that the asset map is fully updated
    /// and emission may proceed; an error aborts the build-emit event.
    async fn emit(&self, compilation: &mut Compilation) -> Result<()>;
}

/// Host-side hook registry.
///
/// Hooks run in registration order; the first error stops the event.
#[derive(Default)]
pub struct PluginHost {
    hooks: Vec<Arc<dyn EmitHook>>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook.
    pub fn register(&mut self, hook: Arc<dyn EmitHook>) {
        self.hooks.push(hook);
    }

    /// Run all emit hooks for one compilation.
    pub async fn run_emit(&self, compilation: &mut Compilation) -> Result<()> {
        for hook in &self.hooks {
            hook.emit(compilation).await?;
        }
        Ok(())
    }
}

/// The HTML entry document plugin.
///
/// Selects the page's chunks from the compilation stats, merges computed
/// stylesheet links into the configured head metadata, renders the document,
/// and publishes it under the configured filename. Every invocation
/// recomputes the document from scratch.
pub struct HtmlEntryPlugin {
    options: Arc<PluginOptions>,
}

impl HtmlEntryPlugin {
    /// Create a plugin instance. Options are resolved here once and never
    /// change afterwards.
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }
}

impl Default for HtmlEntryPlugin {
    fn default() -> Self {
        Self::new(PluginOptions::default())
    }
}

#[async_trait]
impl EmitHook for HtmlEntryPlugin {
    fn name(&self) -> &str {
        "html-entry"
    }

    async fn emit(&self, compilation: &mut Compilation) -> Result<()> {
        let selected = chunks::filter_chunks(&compilation.stats.chunks, &self.options);
        let sorted = chunks::sort_chunks(selected, &self.options.chunks_sort_mode)?;
        let script_assets = chunks::scripts(&sorted);
        let style_assets = chunks::styles(&sorted);
        debug!(
            "selected {} chunks ({} scripts, {} styles)",
            sorted.len(),
            script_assets.len(),
            style_assets.len()
        );

        let props = head::merge_styles(&self.options.props, &style_assets);
        let snapshot = head::render(&props);
        let document = html::render_document(&snapshot, &self.options.root, &script_assets);

        compilation.emit_asset(self.options.filename.clone(), EmittedAsset::new(document));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chunks::{Chunk, ChunkFiles};
    use crate::config::{RootContainer, SortMode};

    fn chunk(name: &str, files: &[&str]) -> Chunk {
        Chunk {
            names: vec![name.to_string()],
            files: ChunkFiles::Many(files.iter().map(|f| f.to_string()).collect()),
            initial: true,
            ..Default::default()
        }
    }

    fn stats(chunks: Vec<Chunk>) -> CompilationStats {
        CompilationStats { chunks }
    }

    #[tokio::test]
    async fn test_emits_document_for_a_single_chunk() {
        let plugin = HtmlEntryPlugin::new(PluginOptions {
            root: RootContainer::Id("app".to_string()),
            ..Default::default()
        });
        let mut compilation =
            Compilation::new(stats(vec![chunk("main", &["main.abc.js", "main.abc.css"])]));

        plugin.emit(&mut compilation).await.unwrap();

        let asset = compilation.asset("index.html").unwrap();
        let document = asset.source();
        assert_eq!(asset.size(), document.len());
        assert_eq!(
            document.matches("<script type=\"text/javascript\" src=\"/main.abc.js\"></script>").count(),
            1
        );
        assert_eq!(
            document.matches("<link rel=\"stylesheet\" href=\"main.abc.css\"/>").count(),
            1
        );
        assert!(document.contains("<div id=\"app\"></div>"));
        assert!(document.starts_with("<!DOCTYPE html><html>"));
    }

    #[tokio::test]
    async fn test_excluded_chunk_assets_never_appear() {
        let plugin = HtmlEntryPlugin::new(PluginOptions {
            exclude_chunks: vec!["admin".to_string()],
            chunks_sort_mode: SortMode::None,
            ..Default::default()
        });
        let mut compilation = Compilation::new(stats(vec![
            chunk("main", &["main.js", "main.css"]),
            chunk("admin", &["admin.js", "admin.css"]),
        ]));

        plugin.emit(&mut compilation).await.unwrap();

        let document = compilation.asset("index.html").unwrap().source();
        assert!(document.contains("src=\"/main.js\""));
        assert!(document.contains("href=\"main.css\""));
        assert!(!document.contains("admin.js"));
        assert!(!document.contains("admin.css"));
    }

    #[tokio::test]
    async fn test_rebuilds_are_independent() {
        let plugin = HtmlEntryPlugin::default();

        let mut first = Compilation::new(stats(vec![chunk("main", &["main.111.js"])]));
        plugin.emit(&mut first).await.unwrap();

        let mut second = Compilation::new(stats(vec![chunk("main", &["main.222.js"])]));
        plugin.emit(&mut second).await.unwrap();

        let first_doc = first.asset("index.html").unwrap().source();
        let second_doc = second.asset("index.html").unwrap().source();
        assert!(first_doc.contains("main.111.js"));
        assert!(!second_doc.contains("main.111.js"));
        assert!(second_doc.contains("main.222.js"));
    }

    #[tokio::test]
    async fn test_re_emitting_replaces_the_asset() {
        let plugin = HtmlEntryPlugin::default();
        let mut compilation = Compilation::new(stats(vec![chunk("main", &["main.old.js"])]));
        plugin.emit(&mut compilation).await.unwrap();

        compilation.stats = stats(vec![chunk("main", &["main.new.js"])]);
        plugin.emit(&mut compilation).await.unwrap();

        assert_eq!(compilation.assets().len(), 1);
        let document = compilation.asset("index.html").unwrap().source();
        assert!(document.contains("main.new.js"));
        assert!(!document.contains("main.old.js"));
    }

    #[tokio::test]
    async fn test_invalid_sort_mode_aborts_without_emitting() {
        let plugin = HtmlEntryPlugin::new(PluginOptions {
            chunks_sort_mode: SortMode::Named("bogus".to_string()),
            ..Default::default()
        });
        let mut compilation = Compilation::new(stats(vec![chunk("main", &["main.js"])]));

        let err = plugin.emit(&mut compilation).await.unwrap_err();
        assert!(err.to_string().contains("\"bogus\" is not a valid chunk sort mode"));
        assert!(compilation.assets().is_empty());
    }

    #[tokio::test]
    async fn test_host_runs_hooks_in_registration_order() {
        let mut host = PluginHost::new();
        host.register(Arc::new(HtmlEntryPlugin::default()));

        let mut compilation = Compilation::new(stats(vec![chunk("main", &["main.js"])]));
        host.run_emit(&mut compilation).await.unwrap();

        assert!(compilation.asset("index.html").is_some());
    }
}
