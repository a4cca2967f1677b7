//! Path-level writing.

use std::fs;
use std::path::Path;

use crate::error::ArffResult;
use crate::ingestion::unified::infer_format_from_path;
use crate::observability::{self, Operation, OperationContext, OperationStats};
use crate::options::{ArffFormat, ArffOptions};
use crate::types::Dataset;

use super::{arff, parf};

/// Validate `dataset` and write it to `path` as ARFF or PARF.
///
/// - If `options.format` is `None`, the format is inferred from the extension.
/// - The file is only created once the whole document has been rendered.
///
/// ```no_run
/// use arff_relation::output::write_to_path;
/// use arff_relation::options::ArffOptions;
/// use arff_relation::types::{AttributeType, Dataset};
///
/// # fn main() -> Result<(), arff_relation::ArffError> {
/// let mut ds = Dataset::new("iris").with_attribute("petal_length", AttributeType::Numeric);
/// ds.push_row(["1.4"]);
/// write_to_path(&ds, "iris.arff", &ArffOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn write_to_path(dataset: &Dataset, path: impl AsRef<Path>, options: &ArffOptions) -> ArffResult<()> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = OperationContext {
        path: path.to_path_buf(),
        format,
        operation: Operation::Write,
    };

    let result = render_for(dataset, format, options).and_then(|text| {
        fs::write(path, text)?;
        Ok(())
    });

    observability::report(options, &ctx, &result, |_| OperationStats {
        rows: dataset.row_count(),
        attributes: dataset.column_count(),
    });

    result
}

fn render_for(dataset: &Dataset, format: ArffFormat, options: &ArffOptions) -> ArffResult<String> {
    match format {
        ArffFormat::Arff => {
            dataset.validate_with(&options.validation)?;
            arff::render(dataset)
        }
        ArffFormat::Parf => parf::render_validated(dataset, &options.validation, &options.parf),
    }
}
