use std::path::Path;

use serde::{Deserialize, Serialize};

/// Canonical game title used as the matching key between ROM files and
/// catalog entries.
///
/// Derived from a raw title by stripping trailing parenthesized tags (and,
/// for filenames, one trailing extension) and trimming whitespace. Equality
/// is exact string equality — no case folding, no fuzzy distance.
/// Normalization is idempotent: normalizing an already-canonical title is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalTitle(String);

impl CanonicalTitle {
    /// Normalize a bare title (e.g., a catalog entry's game name).
    pub fn from_title(raw: &str) -> Self {
        CanonicalTitle(strip_trailing_groups(raw).to_string())
    }

    /// Normalize a ROM file name, stripping exactly one trailing extension
    /// before tag removal.
    pub fn from_file_name(file_name: &str) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        Self::from_title(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty canonical title (every character was inside parentheses) is
    /// valid but can never join against the catalog.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CanonicalTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repeatedly remove the parenthesized group anchored at the end of the
/// string. Groups not at the end are left untouched; a title may carry
/// several trailing tags ("Game (Rev A) (USA)" loses both).
fn strip_trailing_groups(raw: &str) -> &str {
    let mut title = raw.trim();
    while title.ends_with(')') {
        match matching_open_paren(title) {
            Some(open) => title = title[..open].trim_end(),
            None => break,
        }
    }
    title
}

/// Byte index of the `(` matching the final `)` of `s`, scanning backward
/// with a depth counter so nested groups are treated as one unit. `None`
/// when the trailing group is unbalanced.
fn matching_open_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract the region tag from a raw title: the trimmed contents of the
/// *last* parenthesized group (e.g., `"Sonic (USA)"` → `"USA"`). Returns
/// `None` when the title carries no parenthesized group.
pub fn extract_region(raw_title: &str) -> Option<String> {
    let open = raw_title.rfind('(')?;
    let rest = &raw_title[open + 1..];
    let close = rest.find(')')?;
    let token = rest[..close].trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
