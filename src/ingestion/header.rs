//! Header grammar: directive recognizers and the `@attribute` declaration parser.

use crate::error::{ArffError, ArffResult};
use crate::types::{Attribute, AttributeType};

/// Classification of one header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// Empty after trimming.
    Blank,
    /// `% text`; carries the text.
    Comment(&'a str),
    /// `@relation name`; carries the name.
    Relation(&'a str),
    /// `@attribute decl`; carries the declaration.
    Attribute(&'a str),
    /// `@data`.
    Data,
    /// Anything else. Ignored by the parser.
    Other(&'a str),
}

/// Classify a header line. Surrounding whitespace is ignored; directives are case-insensitive.
///
/// Comment text keeps its trailing whitespace; only the line ending is dropped.
pub fn classify_line(line: &str) -> HeaderLine<'_> {
    let unterminated = line.trim_end_matches(['\n', '\r']);
    if let Some(text) = unterminated.trim_start().strip_prefix('%') {
        // `% text` is how comments are written back out.
        return HeaderLine::Comment(text.strip_prefix(' ').unwrap_or(text));
    }
    let line = unterminated.trim();
    if line.is_empty() {
        return HeaderLine::Blank;
    }
    if let Some(rest) = strip_directive(line, "@relation") {
        return HeaderLine::Relation(rest);
    }
    if let Some(rest) = strip_directive(line, "@attribute") {
        return HeaderLine::Attribute(rest);
    }
    if line.eq_ignore_ascii_case("@data") {
        return HeaderLine::Data;
    }
    HeaderLine::Other(line)
}

/// Case-insensitive `keyword` followed by at least one whitespace character.
fn strip_directive<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Parse the part of an `@attribute` line after the directive, e.g. `age numeric`.
///
/// Recognized types are `numeric` and `string` (case-insensitive) and nominal sets written as
/// `{a,b,c}`. Nominal values are split on `,` exactly as written: no trimming, no unquoting.
///
/// # Errors
///
/// [`ArffError::UnsupportedDeclaration`] for quoted names, a missing type, or any other type.
pub fn parse_attribute_line(text: &str) -> ArffResult<Attribute> {
    let text = text.trim();
    let unsupported = |reason: &str| ArffError::UnsupportedDeclaration {
        line: text.to_string(),
        reason: reason.to_string(),
    };

    let (name, rest) = match text.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (text, ""),
    };

    if name.is_empty() {
        return Err(unsupported("missing attribute name"));
    }
    if name.starts_with(['\'', '"']) {
        return Err(unsupported("quoted attribute names are not supported"));
    }
    if rest.is_empty() {
        return Err(unsupported("missing attribute type"));
    }

    let attribute_type = if rest.eq_ignore_ascii_case("numeric") {
        AttributeType::Numeric
    } else if rest.eq_ignore_ascii_case("string") {
        AttributeType::string()
    } else if let Some(inner) = rest.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        AttributeType::nominal(inner.split(','))
    } else {
        return Err(unsupported("unrecognized attribute type"));
    };

    Ok(Attribute::new(name, attribute_type))
}
