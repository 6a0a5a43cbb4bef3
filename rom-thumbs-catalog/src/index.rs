use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rom_thumbs_core::{CanonicalTitle, ConsoleId, extract_region};

use crate::error::CatalogError;
use crate::types::{CatalogRecord, ThumbnailKind};

/// An indexed view of the thumbnail catalog for fast lookups.
///
/// Candidates are keyed by `(console, kind)` and then canonical title, with
/// all same-title records retained in input order — later duplicates are
/// appended, never overwritten, so region preference can choose among every
/// variant of a title.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    /// (console, kind) → canonical title → candidates in catalog order
    entries: HashMap<(ConsoleId, ThumbnailKind), HashMap<CanonicalTitle, Vec<CatalogRecord>>>,
    /// Consoles that contributed at least one data file (even an empty one)
    consoles: HashSet<ConsoleId>,
    record_count: usize,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.csv` file in the data directory; each file's stem is
    /// the console identifier for its rows.
    ///
    /// A file that cannot be read degrades that console's match rate with a
    /// warning rather than aborting the load. Fatal cases are an unreadable
    /// data directory and the total absence of catalog data — with nothing
    /// loaded there is nothing to match against.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut index = Self::new();

        let mut csv_paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.eq_ignore_ascii_case("csv"))
                        .unwrap_or(false)
            })
            .collect();
        csv_paths.sort();

        for path in &csv_paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let console = ConsoleId::from_catalog_name(stem);
            match std::fs::read_to_string(path) {
                Ok(content) => index.index_console(console, &content),
                Err(e) => {
                    log::warn!("Skipping unreadable catalog file {}: {}", path.display(), e);
                }
            }
        }

        if index.record_count == 0 {
            return Err(CatalogError::NoData {
                dir: dir.to_path_buf(),
            });
        }
        Ok(index)
    }

    /// Index one console's CSV content. Rows are headerless
    /// `(marker, title, url)` triples; rows with an unknown marker are
    /// dropped silently, rows missing a title or URL are dropped as
    /// malformed.
    pub fn index_console(&mut self, console: ConsoleId, csv_content: &str) {
        self.consoles.insert(console.clone());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_content.as_bytes());

        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Skipping malformed catalog row for {}: {}", console, e);
                    continue;
                }
            };

            let Some(kind) = ThumbnailKind::from_marker(record.get(0).unwrap_or("")) else {
                continue;
            };
            let raw_title = record.get(1).unwrap_or("");
            let url = record.get(2).unwrap_or("");
            if raw_title.is_empty() || url.is_empty() {
                log::warn!(
                    "Skipping catalog row for {} with missing title or URL",
                    console
                );
                continue;
            }

            let title = CanonicalTitle::from_title(raw_title);
            let catalog_record = CatalogRecord {
                console: console.clone(),
                kind,
                raw_title: raw_title.to_string(),
                region: extract_region(raw_title),
                url: url.to_string(),
            };

            self.entries
                .entry((console.clone(), kind))
                .or_default()
                .entry(title)
                .or_default()
                .push(catalog_record);
            self.record_count += 1;
        }
    }

    /// Candidate records for a `(console, kind, title)` key, in catalog
    /// order. Empty when the key has no entries.
    pub fn candidates(
        &self,
        console: &ConsoleId,
        kind: ThumbnailKind,
        title: &CanonicalTitle,
    ) -> &[CatalogRecord] {
        self.entries
            .get(&(console.clone(), kind))
            .and_then(|titles| titles.get(title))
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }

    /// True if the console contributed any data file to the load.
    pub fn has_console(&self, console: &ConsoleId) -> bool {
        self.consoles.contains(console)
    }

    /// Total number of indexed records.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of consoles with at least one data file.
    pub fn console_count(&self) -> usize {
        self.consoles.len()
    }
}
