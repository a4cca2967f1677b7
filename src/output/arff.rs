//! ARFF serialization.

use std::io::{self, Write};

use tracing::debug;

use crate::error::{ArffError, ArffResult, ValidationError};
use crate::types::Dataset;

/// Render `dataset` as ARFF text after validating it with the default options.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn to_arff_string(dataset: &Dataset) -> ArffResult<String> {
    dataset.validate()?;
    render(dataset)
}

/// Validate `dataset` and write it to `writer` as ARFF.
///
/// The document is rendered completely before anything is written, so a failing dataset leaves
/// `writer` untouched.
pub fn write_arff<W: Write>(dataset: &Dataset, mut writer: W) -> ArffResult<()> {
    let text = to_arff_string(dataset)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Comment, relation, attribute, and `@data` lines shared by ARFF and PARF.
pub(crate) fn header_lines(dataset: &Dataset) -> ArffResult<Vec<String>> {
    let mut lines = Vec::with_capacity(dataset.comments.len() + dataset.attributes.len() + 2);
    lines.extend(dataset.comments.iter().map(|c| format!("% {c}")));
    lines.push(format!("@relation {}", dataset.name));
    for attr in &dataset.attributes {
        if attr.attribute_type.is_date() {
            return Err(ValidationError::AbstractTypeUsed {
                attribute: attr.name.clone(),
            }
            .into());
        }
        lines.push(format!("@attribute {} {}", attr.name, attr.attribute_type));
    }
    lines.push("@data".to_string());
    Ok(lines)
}

/// Encode data records, one `\n`-terminated line each.
///
/// Cells holding `,` or `"` are double-quoted (inner `"` doubled), which is exactly what the
/// data-section reader undoes. Every other cell is written verbatim.
pub(crate) fn encode_records<I, R, S>(records: I) -> ArffResult<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ArffError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Render without validating; callers validate with the options they were given.
pub(crate) fn render(dataset: &Dataset) -> ArffResult<String> {
    let mut out = header_lines(dataset)?.join("\n");
    if !dataset.data.is_empty() {
        let records = encode_records(&dataset.data)?;
        out.push('\n');
        out.push_str(records.strip_suffix('\n').unwrap_or(&records));
    }
    debug!(relation = %dataset.name, rows = dataset.row_count(), "rendered arff");
    Ok(out)
}
