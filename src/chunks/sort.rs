//! Ordering strategies for the selected chunks.

use std::collections::HashSet;

use crate::config::SortMode;
use crate::error::Error;

use super::Chunk;

/// Order chunks according to the configured mode.
///
/// Dispatch, in priority order: a caller-supplied comparator, the `none`
/// identity pass, then the built-in named strategies. Unknown strategy names
/// are rejected here, when sorting actually runs, with the offending name in
/// the error.
pub fn sort_chunks(chunks: Vec<Chunk>, mode: &SortMode) -> Result<Vec<Chunk>, Error> {
    match mode {
        // Custom comparator
        SortMode::Custom(comparator) => {
            let mut sorted = chunks;
            sorted.sort_by(|a, b| comparator(a, b));
            Ok(sorted)
        }
        // Disabled sorting: keep the order the filter produced
        SortMode::None => Ok(chunks),
        SortMode::Named(name) => match name.as_str() {
            "auto" | "id" => Ok(sort_by_id(chunks)),
            "dependency" => Ok(sort_by_dependency(chunks)),
            unknown => Err(Error::InvalidSortMode(unknown.to_string())),
        },
    }
}

/// Stable ascending sort by chunk id. Chunks without an id keep their
/// relative order after every numbered chunk.
fn sort_by_id(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
    chunks.sort_by_key(|chunk| (chunk.id.is_none(), chunk.id));
    chunks
}

/// Topological order over the parent edges: a chunk is placed once every
/// parent inside the selected set has been placed. Edges pointing outside
/// the set are ignored; chunks on a dependency cycle are appended in input
/// order so the strategy stays total.
fn sort_by_dependency(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let ids: HashSet<u32> = chunks.iter().filter_map(|chunk| chunk.id).collect();
    let mut pending: Vec<Option<Chunk>> = chunks.into_iter().map(Some).collect();
    let mut placed: HashSet<u32> = HashSet::new();
    let mut ordered = Vec::with_capacity(pending.len());

    let mut advanced = true;
    while advanced {
        advanced = false;
        for slot in pending.iter_mut() {
            let ready = slot.as_ref().is_some_and(|chunk| {
                chunk
                    .parents
                    .iter()
                    .filter(|parent| ids.contains(parent))
                    .all(|parent| placed.contains(parent))
            });
            if ready {
                if let Some(chunk) = slot.take() {
                    if let Some(id) = chunk.id {
                        placed.insert(id);
                    }
                    ordered.push(chunk);
                    advanced = true;
                }
            }
        }
    }

    ordered.extend(pending.into_iter().flatten());
    ordered
}
