//! Path-level reading.
//!
//! [`read_from_path`] opens a file, picks ARFF or PARF parsing, and reports the outcome to the
//! configured [`crate::observability::ArffObserver`].

use std::path::Path;

use crate::error::{ArffError, ArffResult};
use crate::observability::{self, Operation, OperationContext, OperationStats};
use crate::options::{ArffFormat, ArffOptions};
use crate::types::Dataset;

use super::{arff, parf};

/// Read and validate a relation from `path`.
///
/// - If `options.format` is `None`, the format is inferred from the extension (`.arff`/`.parf`).
/// - `options.validation` controls the post-parse validation.
///
/// # Examples
///
/// ```no_run
/// use arff_relation::ingestion::read_from_path;
/// use arff_relation::options::ArffOptions;
///
/// # fn main() -> Result<(), arff_relation::ArffError> {
/// let ds = read_from_path("weather.arff", &ArffOptions::default())?;
/// println!("{} rows", ds.row_count());
/// # Ok(())
/// # }
/// ```
///
/// Forcing PARF for a file without a telling extension:
///
/// ```no_run
/// use arff_relation::ingestion::read_from_path;
/// use arff_relation::options::{ArffFormat, ArffOptions};
///
/// # fn main() -> Result<(), arff_relation::ArffError> {
/// let opts = ArffOptions {
///     format: Some(ArffFormat::Parf),
///     ..Default::default()
/// };
/// let _ds = read_from_path("export.txt", &opts)?;
/// # Ok(())
/// # }
/// ```
pub fn read_from_path(path: impl AsRef<Path>, options: &ArffOptions) -> ArffResult<Dataset> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = OperationContext {
        path: path.to_path_buf(),
        format,
        operation: Operation::Read,
    };

    let result = match format {
        ArffFormat::Arff => arff::read_arff_from_path(path, &options.validation),
        ArffFormat::Parf => parf::read_parf_from_path(path, &options.validation),
    };

    observability::report(options, &ctx, &result, |ds| OperationStats {
        rows: ds.row_count(),
        attributes: ds.column_count(),
    });

    result
}

pub(crate) fn infer_format_from_path(path: &Path) -> ArffResult<ArffFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ArffError::UnknownFormat {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    ArffFormat::from_extension(ext).ok_or_else(|| ArffError::UnknownFormat {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
