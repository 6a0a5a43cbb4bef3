//! Matching engine for ROM thumbnail downloads.
//!
//! Joins a scanned ROM inventory against the thumbnail catalog index on
//! `(console, canonical title)`, selects exactly one candidate per ROM
//! under the configured kind/region preferences, and emits deterministic,
//! non-destructive download instructions.

pub mod emit;
pub mod error;
pub mod inventory;
pub mod resolver;
pub mod settings;

pub use emit::{DownloadInstruction, emit_instructions};
pub use error::InventoryError;
pub use inventory::{RomEntry, scan_inventory};
pub use resolver::{Preferences, ResolvedMatch, resolve_matches};
