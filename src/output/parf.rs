//! PARF serialization: ARFF with wide rows split across physical lines.
//!
//! PARF is a private extension, not a standard format. The header is identical to ARFF. Every
//! logical row is cut into chunks of at most [`ParfOptions::chunk_size`] cells; each chunk but the
//! last ends with an extra `&` cell. `NA` cells are written as `?`. Cells are quoted the same way
//! as in ARFF.

use std::borrow::Cow;
use std::io::Write;

use tracing::debug;

use crate::error::ArffResult;
use crate::ingestion::parf::CONTINUATION_MARKER;
use crate::options::ParfOptions;
use crate::types::{Dataset, MISSING_VALUE};
use crate::validation::ValidationOptions;

use super::arff::{encode_records, header_lines};

/// Token rewritten to the missing-value token before chunking.
pub const NA_TOKEN: &str = "NA";

/// Validate `dataset` (treating `NA` as missing) and render it as PARF text.
///
/// Every line, including the last, ends with `\n`.
pub fn to_parf_string(dataset: &Dataset, options: &ParfOptions) -> ArffResult<String> {
    render_validated(dataset, &ValidationOptions::default(), options)
}

pub(crate) fn render_validated(
    dataset: &Dataset,
    validation: &ValidationOptions,
    options: &ParfOptions,
) -> ArffResult<String> {
    let normalized = normalize_missing(dataset);
    normalized.validate_with(validation)?;
    render(&normalized, options)
}

/// Validate `dataset` and write it to `writer` as PARF.
///
/// The document is rendered completely before anything is written.
pub fn write_parf<W: Write>(dataset: &Dataset, mut writer: W, options: &ParfOptions) -> ArffResult<()> {
    let text = to_parf_string(dataset, options)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Copy of `dataset` with every `NA` cell replaced by `?`. Borrows when there is nothing to do.
pub(crate) fn normalize_missing(dataset: &Dataset) -> Cow<'_, Dataset> {
    if !dataset.data.iter().flatten().any(|cell| cell == NA_TOKEN) {
        return Cow::Borrowed(dataset);
    }
    let mut owned = dataset.clone();
    for cell in owned.data.iter_mut().flatten() {
        if *cell == NA_TOKEN {
            *cell = MISSING_VALUE.to_string();
        }
    }
    Cow::Owned(owned)
}

/// Physical records for one logical row: chunks of at most `chunk_size` cells, every chunk but
/// the last closed by a [`CONTINUATION_MARKER`] cell. A `chunk_size` of 0 is treated as 1.
fn chunk_records(row: &[String], chunk_size: usize) -> impl Iterator<Item = Vec<&str>> {
    let chunk_size = chunk_size.max(1);
    let n_chunks = row.len().div_ceil(chunk_size);
    row.chunks(chunk_size).enumerate().map(move |(i, chunk)| {
        let mut cells: Vec<&str> = chunk.iter().map(String::as_str).collect();
        if i + 1 < n_chunks {
            cells.push(CONTINUATION_MARKER);
        }
        cells
    })
}

/// Split one logical row into physical lines, without line terminators.
///
/// Cells are written as they are; `NA` rewriting happens before chunking, in the PARF writer.
pub fn chunk_row(row: &[String], chunk_size: usize) -> ArffResult<Vec<String>> {
    let encoded = encode_records(chunk_records(row, chunk_size))?;
    Ok(encoded.lines().map(str::to_owned).collect())
}

/// Render without validating. `dataset` is expected to be normalized already.
pub(crate) fn render(dataset: &Dataset, options: &ParfOptions) -> ArffResult<String> {
    let mut out = header_lines(dataset)?.join("\n");
    out.push('\n');
    let records = dataset
        .data
        .iter()
        .flat_map(|row| chunk_records(row, options.chunk_size));
    out.push_str(&encode_records(records)?);
    debug!(
        relation = %dataset.name,
        rows = dataset.row_count(),
        physical_lines = out.lines().count(),
        "rendered parf"
    );
    Ok(out)
}
