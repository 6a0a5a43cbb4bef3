//! ROM collection scanner.
//!
//! Expects one level of console folders under the root, each containing ROM
//! files at that single level:
//!
//! ```text
//! rom_root/
//! └─ genesis/
//!     ├─ Sonic the Hedgehog (USA).bin
//!     └─ Streets of Rage (Europe).bin
//! ```
//!
//! Deeper nesting is out of scope and such files are simply not visited.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rom_thumbs_core::{CanonicalTitle, ConsoleId};

use crate::error::InventoryError;

/// One discovered ROM file, keyed for the catalog join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomEntry {
    /// Resolved console identifier for the file's parent folder
    pub console: ConsoleId,
    /// Canonical title derived from the file name
    pub title: CanonicalTitle,
    /// Absolute path to the ROM file
    pub path: PathBuf,
}

/// Scan the ROM root and build the inventory.
///
/// Iteration is explicitly sorted (console folders, then files within) so
/// the inventory order — and everything downstream of it — is reproducible
/// across runs. Files whose sibling `.png` already exists are omitted here,
/// not at emission time, so repeated runs against a partially-downloaded
/// collection shrink monotonically. Within a console, the first file to
/// claim a canonical title wins; later duplicates are dropped with a
/// warning.
///
/// Only an unreadable root is an error; unreadable console folders degrade
/// to warnings.
pub fn scan_inventory(root: &Path) -> Result<Vec<RomEntry>, InventoryError> {
    let mut console_dirs: Vec<PathBuf> = std::fs::read_dir(root)
        .map_err(|source| InventoryError::Root {
            root: root.to_path_buf(),
            source,
        })?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    console_dirs.sort();

    let mut entries = Vec::new();

    for dir in &console_dirs {
        let Some(folder_name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !ConsoleId::is_mapped(folder_name) {
            log::warn!(
                "No console mapping for folder '{}'; using it verbatim for matching",
                folder_name
            );
        }
        let console = ConsoleId::resolve(folder_name);

        let mut files: Vec<PathBuf> = match std::fs::read_dir(dir) {
            Ok(iter) => iter
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect(),
            Err(e) => {
                log::warn!("Cannot read console folder {}: {}", dir.display(), e);
                continue;
            }
        };
        files.sort();

        let mut seen: HashSet<CanonicalTitle> = HashSet::new();

        for file in files {
            let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let title = CanonicalTitle::from_file_name(file_name);
            if title.is_empty() {
                log::debug!(
                    "Skipping {}: nothing left after tag stripping",
                    file.display()
                );
                continue;
            }

            // Sibling image already on disk — this ROM is done.
            if file.with_extension("png").exists() {
                continue;
            }

            if !seen.insert(title.clone()) {
                log::warn!(
                    "Duplicate ROM for '{}' in console '{}'; keeping the first entry, dropping {}",
                    title,
                    console,
                    file.display()
                );
                continue;
            }

            let path = std::path::absolute(&file).unwrap_or(file);
            entries.push(RomEntry {
                console: console.clone(),
                title,
                path,
            });
        }
    }

    Ok(entries)
}
