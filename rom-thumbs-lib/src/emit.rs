use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::resolver::ResolvedMatch;

/// One download the external fetcher should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInstruction {
    /// Thumbnail URL to fetch
    pub url: String,
    /// Where the image lands: the ROM's path with the image extension
    pub destination: PathBuf,
}

/// Turn resolved matches into download instructions.
///
/// The destination is the ROM path with its extension replaced by the
/// chosen URL's extension (`.png` when the URL path has none). Existence is
/// re-checked immediately before emitting — the inventory already skipped
/// ROMs with a sibling image, but the actual destination extension is only
/// known here. Output order follows the match order.
pub fn emit_instructions(matches: &[ResolvedMatch]) -> Vec<DownloadInstruction> {
    let mut instructions = Vec::new();

    for resolved in matches {
        let ext = url_extension(&resolved.chosen.url).unwrap_or("png");
        let destination = resolved.rom.path.with_extension(ext);
        if destination.exists() {
            continue;
        }
        instructions.push(DownloadInstruction {
            url: resolved.chosen.url.clone(),
            destination,
        });
    }

    instructions
}

/// Extension of a URL's final path segment, with query and fragment
/// stripped. `None` when the segment carries no extension.
fn url_extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
