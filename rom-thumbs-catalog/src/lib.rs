//! Thumbnail catalog loading and indexing.
//!
//! Parses the per-console CSV tables of the libretro-thumbnails catalog and
//! indexes every record by `(console, thumbnail kind, canonical title)`,
//! retaining all same-title candidates in input order so region preference
//! can choose among them later.

pub mod error;
pub mod index;
pub mod types;

pub use error::CatalogError;
pub use index::CatalogIndex;
pub use types::{CatalogRecord, KindParseError, ThumbnailKind};
