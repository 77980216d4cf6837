//! Extracting typed asset filenames from chunks.

use super::Chunk;

/// Collect the filenames ending in `.{extension}`, in chunk order,
/// preserving within-chunk file order.
///
/// Chunk eligibility is not checked here; that is the filter's job.
pub fn extract_by_extension(extension: &str, chunks: &[Chunk]) -> Vec<String> {
    let suffix = format!(".{extension}");
    let mut assets = Vec::new();
    for chunk in chunks {
        for file in chunk.files.as_slice() {
            if file.ends_with(&suffix) {
                assets.push(file.clone());
            }
        }
    }
    assets
}

/// Shortcut - the chunks' `js` files.
pub fn scripts(chunks: &[Chunk]) -> Vec<String> {
    extract_by_extension("js", chunks)
}

/// Shortcut - the chunks' `css` files.
pub fn styles(chunks: &[Chunk]) -> Vec<String> {
    extract_by_extension("css", chunks)
}
