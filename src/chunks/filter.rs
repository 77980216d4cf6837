//! Selecting the chunks eligible for the generated document.

use crate::config::{ChunkSelection, PluginOptions};

use super::Chunk;

/// Keep only the chunks that belong in the entry document.
///
/// A chunk is retained when it has a name, is eagerly loaded, is covered by
/// the configured include list, and is not excluded. Input order is
/// preserved; filtering never reorders.
pub fn filter_chunks(chunks: &[Chunk], options: &PluginOptions) -> Vec<Chunk> {
    chunks
        .iter()
        .filter(|chunk| is_eligible(chunk, options))
        .cloned()
        .collect()
}

fn is_eligible(chunk: &Chunk, options: &PluginOptions) -> bool {
    // A chunk without a name cannot be addressed by name-based policy.
    let name = match chunk.name() {
        Some(name) => name,
        None => return false,
    };

    // Skip chunks that are lazy loaded on demand.
    if !chunk.initial {
        return false;
    }

    // Skip chunks not named by an explicit include list.
    if let ChunkSelection::Only(included) = &options.chunks {
        if !included.iter().any(|included_name| included_name == name) {
            return false;
        }
    }

    // Skip chunks that were excluded explicitly. Exclusion wins over
    // inclusion when a name appears in both lists.
    !options.exclude_chunks.iter().any(|excluded| excluded == name)
}
