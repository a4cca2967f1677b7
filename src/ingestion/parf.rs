//! PARF parsing.
//!
//! PARF shares the ARFF header. In the data section, a physical line whose last cell is `&` is
//! continued by the next line; the marker itself is not data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ArffError, ArffResult};
use crate::types::Dataset;
use crate::validation::ValidationOptions;

use super::arff::{data_records, finish, read_header};

/// Continuation marker closing every non-final chunk of a row.
pub const CONTINUATION_MARKER: &str = "&";

/// Read a PARF document and validate it with [`ValidationOptions::default`].
pub fn read_parf<R: BufRead>(reader: R) -> ArffResult<Dataset> {
    read_parf_with(reader, &ValidationOptions::default())
}

/// Read a PARF document from an in-memory string.
pub fn read_parf_from_str(input: &str) -> ArffResult<Dataset> {
    read_parf(input.as_bytes())
}

/// Read a PARF file from disk.
pub fn read_parf_from_path(path: impl AsRef<Path>, options: &ValidationOptions) -> ArffResult<Dataset> {
    let file = File::open(path)?;
    read_parf_with(BufReader::new(file), options)
}

/// Read a PARF document, joining continued lines back into logical rows.
///
/// A trailing cell equal to `&` on the last line of input is reported as
/// [`ArffError::TruncatedRow`]. A row whose genuine last value is `&` cannot be represented.
pub fn read_parf_with<R: BufRead>(mut reader: R, options: &ValidationOptions) -> ArffResult<Dataset> {
    let mut dataset = read_header(&mut reader)?;
    let mut pending: Vec<String> = Vec::new();
    let mut continued = false;

    for record in data_records(&mut reader).records() {
        let record = record?;
        let mut cells: Vec<&str> = record.iter().collect();
        continued = cells.last() == Some(&CONTINUATION_MARKER);
        if continued {
            cells.pop();
        }
        pending.extend(cells.into_iter().map(str::to_owned));
        if !continued {
            dataset.data.push(std::mem::take(&mut pending));
        }
    }

    if continued {
        return Err(ArffError::TruncatedRow {
            row: dataset.row_count(),
        });
    }
    finish(dataset, options)
}
