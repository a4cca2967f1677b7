//! Serializers.
//!
//! - [`arff`]: plain ARFF, one line per row
//! - [`parf`]: row-chunked ARFF for consumers with line-length limits
//! - [`unified`]: [`write_to_path`], choosing the encoding by extension
//!
//! Every writer validates first and renders the whole document before writing, so a failure never
//! leaves partial output behind.

pub mod arff;
pub mod parf;
pub mod unified;

pub use arff::{to_arff_string, write_arff};
pub use parf::{chunk_row, to_parf_string, write_parf};
pub use unified::write_to_path;
