//! IO module for reading problems and writing results.
//!
//! The growth engine itself never touches files; this module is the boundary.
//!
//! # Format Modules
//!
//! - `text` - whitespace-separated problem files (towns, roads, seeds) and the road listing
//! - `report` - per-country results as plain text or JSON

pub(crate) mod report;
pub(crate) mod text;
