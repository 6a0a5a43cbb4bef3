use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the thumbnail catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error reading the catalog directory
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    /// No catalog data could be loaded at all — nothing to match against
    #[error("no catalog data found in {}", dir.display())]
    NoData { dir: PathBuf },
}
