//! Compilation chunk data and the chunk selection pipeline.
//!
//! The bundler owns and produces these records; this crate only reads them
//! for the duration of one build-emit event.

mod assets;
mod filter;
mod sort;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use assets::{extract_by_extension, scripts, styles};
pub use filter::filter_chunks;
pub use sort::sort_chunks;

/// The files emitted for a chunk, reported either as a single filename or
/// as an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkFiles {
    One(String),
    Many(Vec<String>),
}

impl ChunkFiles {
    /// View the files as a slice regardless of shape.
    pub fn as_slice(&self) -> &[String] {
        match self {
            ChunkFiles::One(file) => std::slice::from_ref(file),
            ChunkFiles::Many(files) => files,
        }
    }
}

impl Default for ChunkFiles {
    fn default() -> Self {
        ChunkFiles::Many(Vec::new())
    }
}

/// One compiled unit as reported by the bundler's stats.
///
/// Every field has a defensive default so a sparse stats entry deserializes
/// to an empty chunk instead of failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    /// Numeric chunk id, when the bundler assigns one.
    pub id: Option<u32>,

    /// Names attached to this chunk; the first one is its identity for
    /// include/exclude matching.
    pub names: Vec<String>,

    /// Files produced for this chunk.
    pub files: ChunkFiles,

    /// Eagerly loaded at page load, as opposed to lazily loaded on demand.
    pub initial: bool,

    /// Ids of the chunks this chunk depends on.
    pub parents: Vec<u32>,
}

impl Chunk {
    /// The name used to address this chunk, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// The slice of the bundler's compilation statistics this plugin consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilationStats {
    pub chunks: Vec<Chunk>,
}

impl CompilationStats {
    /// Parse a stats snapshot from the bundler's JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse compilation stats")
    }
}
