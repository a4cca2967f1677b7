//! `arff-relation` reads, validates, and writes ARFF (Attribute-Relation File Format) datasets
//! into an in-memory [`types::Dataset`].
//!
//! An ARFF document is a header (relation name, typed attribute list, `%` comments) followed by
//! comma-separated rows after `@data`. Cells are kept as raw strings; each attribute's
//! [`types::AttributeType`] decides which strings are acceptable for its column.
//!
//! ## Attribute types
//!
//! - [`types::AttributeType::Numeric`]: `numeric`, integer or decimal with optional exponent
//! - [`types::AttributeType::Nominal`]: `{a,b,c}`, one of a fixed ordered set
//! - [`types::AttributeType::String`]: `string`, a `'quoted run'` or a bare token
//! - [`types::AttributeType::Date`]: placeholder only, never parsed or rendered
//!
//! The missing-value token `?` is accepted by every type.
//!
//! ## Reading
//!
//! ```rust
//! use arff_relation::ingestion::read_arff_from_str;
//! use arff_relation::types::AttributeType;
//!
//! # fn main() -> Result<(), arff_relation::ArffError> {
//! let ds = read_arff_from_str(
//!     "@relation weather\n\
//!      @attribute outlook {sunny,overcast,rainy}\n\
//!      @attribute temperature numeric\n\
//!      @data\n\
//!      sunny,85\n\
//!      rainy,70\n",
//! )?;
//! assert_eq!(ds.name, "weather");
//! assert_eq!(ds.attributes[1].attribute_type, AttributeType::Numeric);
//! assert_eq!(ds.row_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Parsing is all-or-nothing: the parsed dataset is validated before it is returned.
//!
//! ## Building and writing
//!
//! ```rust
//! use arff_relation::output::{to_arff_string, to_parf_string};
//! use arff_relation::options::ParfOptions;
//! use arff_relation::types::{AttributeType, Dataset};
//!
//! # fn main() -> Result<(), arff_relation::ArffError> {
//! let mut ds = Dataset::new("weather")
//!     .with_attribute("outlook", AttributeType::nominal(["sunny", "overcast", "rainy"]))
//!     .with_attribute("temperature", AttributeType::Numeric);
//! ds.push_row(["sunny", "85"]);
//! ds.push_row(["rainy", "NA"]);
//!
//! // PARF treats `NA` as missing.
//! let parf = to_parf_string(&ds, &ParfOptions::default())?;
//! assert!(parf.ends_with("rainy,?\n"));
//!
//! // Plain ARFF does not.
//! assert!(to_arff_string(&ds).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## PARF
//!
//! PARF is a private, ARFF-derived encoding for consumers with line-length limits. The header is
//! unchanged; each row is split into chunks of at most 500 cells, and every chunk except the last
//! ends with an extra `&` cell. See [`output::parf`] and [`ingestion::parf`].
//!
//! ## Modules
//!
//! - [`types`]: attribute types and the dataset model
//! - [`validation`]: schema/data consistency checks
//! - [`ingestion`]: header grammar, ARFF/PARF parsing, path-level reading
//! - [`output`]: ARFF/PARF writers, path-level writing
//! - [`options`]: configuration for path-level operations and PARF
//! - [`observability`]: observer hooks for path-level operations
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod observability;
pub mod options;
pub mod output;
pub mod types;
pub mod validation;

pub use error::{ArffError, ArffResult, ValidationError};
