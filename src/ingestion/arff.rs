//! ARFF parsing: header state machine plus CSV records for the data section.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ArffError, ArffResult};
use crate::types::Dataset;
use crate::validation::ValidationOptions;

use super::header::{self, HeaderLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    ScanningHeader,
    Done,
}

/// Read an ARFF document and validate it with [`ValidationOptions::default`].
pub fn read_arff<R: BufRead>(reader: R) -> ArffResult<Dataset> {
    read_arff_with(reader, &ValidationOptions::default())
}

/// Read an ARFF document from an in-memory string.
pub fn read_arff_from_str(input: &str) -> ArffResult<Dataset> {
    read_arff(input.as_bytes())
}

/// Read an ARFF file from disk.
pub fn read_arff_from_path(path: impl AsRef<Path>, options: &ValidationOptions) -> ArffResult<Dataset> {
    let file = File::open(path)?;
    read_arff_with(BufReader::new(file), options)
}

/// Read an ARFF document and validate it with `options`.
///
/// Rules:
///
/// - Header lines before `@data` are trimmed; blank lines are skipped.
/// - `%` lines are comments, `@relation`/`@attribute`/`@data` are directives (case-insensitive).
/// - Any other header line is ignored.
/// - After `@data`, every non-blank record is one row of raw, comma-separated cells
///   (double-quote CSV quoting). A leading `%` is data there, not a comment.
///
/// Nothing is returned unless the whole document parses and validates.
pub fn read_arff_with<R: BufRead>(mut reader: R, options: &ValidationOptions) -> ArffResult<Dataset> {
    let mut dataset = read_header(&mut reader)?;
    for record in data_records(&mut reader).records() {
        let record = record?;
        dataset.data.push(record.iter().map(str::to_owned).collect());
    }
    finish(dataset, options)
}

/// Consume header lines up to and including `@data`.
pub(crate) fn read_header<R: BufRead>(reader: &mut R) -> ArffResult<Dataset> {
    let mut dataset = Dataset::default();
    let mut state = ParseState::ScanningHeader;
    let mut line = String::new();
    let mut line_no = 0usize;

    while state == ParseState::ScanningHeader {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ArffError::MissingDataSection);
        }
        line_no += 1;

        match header::classify_line(&line) {
            HeaderLine::Blank => {}
            HeaderLine::Comment(text) => dataset.comments.push(text.to_string()),
            HeaderLine::Relation(name) => dataset.name = name.to_string(),
            HeaderLine::Attribute(decl) => {
                let attr = header::parse_attribute_line(decl)?;
                trace!(line = line_no, name = %attr.name, "attribute declared");
                dataset.attributes.push(attr);
            }
            HeaderLine::Data => state = ParseState::Done,
            HeaderLine::Other(text) => {
                debug!(line = line_no, text, "ignoring unrecognized header line");
            }
        }
    }

    Ok(dataset)
}

/// CSV reader over the data section. Widths are not enforced here; validation reports them.
pub(crate) fn data_records<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

pub(crate) fn finish(dataset: Dataset, options: &ValidationOptions) -> ArffResult<Dataset> {
    dataset.validate_with(options)?;
    debug!(
        relation = %dataset.name,
        attributes = dataset.column_count(),
        rows = dataset.row_count(),
        "parsed relation"
    );
    Ok(dataset)
}
