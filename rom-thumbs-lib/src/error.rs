use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning the ROM collection.
///
/// Only the ROM root itself being unreadable is fatal — a genuine
/// precondition failure. Everything below the root degrades to warnings
/// and fewer matches.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The ROM root directory could not be read
    #[error("cannot read ROM root {}: {source}", root.display())]
    Root {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
