//! Parsing entrypoints and implementations.
//!
//! Most callers should use [`read_arff`] on an open stream, or [`read_from_path`] (from
//! [`unified`]) which:
//!
//! - picks ARFF or PARF by file extension (or per [`crate::options::ArffOptions::format`])
//! - parses and validates into a [`crate::types::Dataset`]
//! - optionally reports success/failure/alerts to an [`crate::observability::ArffObserver`]
//!
//! Format-specific functions live under:
//! - [`header`] (directive recognizers and `@attribute` grammar)
//! - [`arff`]
//! - [`parf`]

pub mod arff;
pub mod header;
pub mod parf;
pub mod unified;

pub use arff::{read_arff, read_arff_from_str, read_arff_with};
pub use header::parse_attribute_line;
pub use parf::{read_parf, read_parf_from_str, read_parf_with};
pub use unified::read_from_path;
