use thiserror::Error;

/// Convenience result type for reading and writing relations.
pub type ArffResult<T> = Result<T, ArffError>;

/// A [`crate::types::Dataset`] broke one of its schema/data invariants.
///
/// Returned by [`crate::validation::validate`]. Row and column indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The relation name is empty or does not look like a valid `string` token.
    #[error("relation name {name:?} is missing or is not a valid string token")]
    MissingRelationName { name: String },

    /// An attribute declaration is not a well-formed (name, type) pair.
    #[error("malformed attribute #{index} ('{name}'): {message}")]
    MalformedSchema {
        index: usize,
        name: String,
        message: String,
    },

    /// A row's width disagrees with the number of declared attributes.
    #[error("row {row} has {found} cells but {expected} attributes are declared")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell does not satisfy its column's attribute type.
    #[error("invalid value at row {row} column {column} ('{attribute}'): {value:?}")]
    InvalidCellValue {
        row: usize,
        column: usize,
        attribute: String,
        value: String,
    },

    /// A comment carries structure (a line break) that would corrupt the header.
    #[error("comment #{index} must be a single line of plain text")]
    InvalidComment { index: usize },

    /// Date attributes can be declared but never rendered or matched against real values.
    #[error("attribute '{attribute}' uses the unimplemented date type")]
    AbstractTypeUsed { attribute: String },
}

/// Error type returned by the reading and writing entry points.
#[derive(Debug, Error)]
pub enum ArffError {
    /// Underlying I/O error (e.g. file not found, broken pipe).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The data section could not be read as delimited records.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An `@attribute` line uses a form this crate does not support.
    #[error("unsupported attribute declaration {line:?}: {reason}")]
    UnsupportedDeclaration { line: String, reason: String },

    /// The input ended before an `@data` directive was seen.
    #[error("input has no @data section")]
    MissingDataSection,

    /// A PARF document ended while a row was still being continued with `&`.
    #[error("input ended inside continued row {row}")]
    TruncatedRow { row: usize },

    /// The file format could not be chosen (no or unknown extension).
    #[error("unknown format: {message}")]
    UnknownFormat { message: String },

    /// The parsed or supplied dataset failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl ArffError {
    /// Returns the validation failure, if this error wraps one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ArffError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
