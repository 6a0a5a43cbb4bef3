//! Core identity types for ROM thumbnail matching.
//!
//! This crate centralizes the two keys everything else joins on — console
//! identity and canonical game title — plus region extraction from raw
//! catalog titles. It has no I/O; the catalog and inventory crates build
//! their indexes on top of these types.

pub mod console;
pub mod title;

pub use console::ConsoleId;
pub use title::{CanonicalTitle, extract_region};
