//! Core data model: attribute types, attribute declarations, and the [`Dataset`] relation.
//!
//! Cells are kept as raw strings. An attribute's [`AttributeType`] decides which raw strings are
//! acceptable for its column; nothing is coerced at parse time.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{self, ValidationOptions};

/// The missing-value token. Every attribute type accepts it.
pub const MISSING_VALUE: &str = "?";

/// Default quote character for `string` attributes and relation names.
pub const DEFAULT_QUOTE: char = '\'';

static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.?|(?:[0-9]+)?\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("numeric pattern is a valid regex")
});

static DEFAULT_STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| string_regex(DEFAULT_QUOTE));

/// Builds the full-match pattern for a `string` value quoted with `quote`.
///
/// Two disjoint forms are accepted:
///
/// - a quoted run: `q ... q`, where inner quotes and backslashes must be backslash-escaped
/// - a bare token: no whitespace, and not starting with `q`
fn string_regex(quote: char) -> Regex {
    // `\x{..}` is valid both inside and outside a character class, whatever the quote is.
    let q = format!(r"\x{{{:X}}}", quote as u32);
    let pattern = format!(
        r"^(?:{q}(?:(?:[^\\{q}]|\\[^{q}])*\\{q})*(?:[^\\{q}]|\\[^{q}])*{q}|[^{q}\s]\S*)$"
    );
    Regex::new(&pattern).expect("hex-escaped quote always yields a valid regex")
}

/// Compiled matcher for `string` attribute values, parameterized by its quote character.
///
/// Equality and serialization only consider the quote character.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub struct StringPattern {
    quote: char,
    regex: Regex,
}

impl StringPattern {
    /// Compile a matcher for values quoted with `quote`.
    pub fn new(quote: char) -> Self {
        let regex = if quote == DEFAULT_QUOTE {
            DEFAULT_STRING_PATTERN.clone()
        } else {
            string_regex(quote)
        };
        Self { quote, regex }
    }

    /// The quote character this matcher was built for.
    pub fn quote(&self) -> char {
        self.quote
    }

    /// Full-match test against the quoted-run or bare-token form.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Default for StringPattern {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE)
    }
}

impl PartialEq for StringPattern {
    fn eq(&self, other: &Self) -> bool {
        self.quote == other.quote
    }
}

impl Eq for StringPattern {}

impl fmt::Debug for StringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringPattern")
            .field("quote", &self.quote)
            .finish()
    }
}

impl From<char> for StringPattern {
    fn from(quote: char) -> Self {
        Self::new(quote)
    }
}

impl From<StringPattern> for char {
    fn from(pattern: StringPattern) -> Self {
        pattern.quote
    }
}

/// Declared type of an attribute (column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// Integer or decimal number, optionally with an exponent.
    Numeric,
    /// One of a fixed, ordered set of values.
    Nominal(Vec<String>),
    /// A quoted string or a single bare token.
    String(StringPattern),
    /// Placeholder. Declarable in a programmatic schema but never parsed or rendered.
    Date,
}

impl AttributeType {
    /// A `string` type using the default `'` quote.
    pub fn string() -> Self {
        Self::String(StringPattern::default())
    }

    /// A `string` type using a custom quote character.
    pub fn string_with_quote(quote: char) -> Self {
        Self::String(StringPattern::new(quote))
    }

    /// A nominal type over `values`, in the given order.
    pub fn nominal<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Nominal(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for the unimplemented date placeholder.
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date)
    }

    /// Returns `true` if `value` is acceptable for this type.
    ///
    /// Total over all inputs: `?` always matches, and a date column matches nothing else.
    pub fn matches(&self, value: &str) -> bool {
        if value == MISSING_VALUE {
            return true;
        }
        match self {
            Self::Numeric => NUMERIC_PATTERN.is_match(value),
            Self::Nominal(values) => values.iter().any(|v| v == value),
            Self::String(pattern) => pattern.is_match(value),
            Self::Date => false,
        }
    }

    /// Header form of the type, as written after the attribute name.
    pub fn declaration_text(&self) -> String {
        match self {
            Self::Numeric => "numeric".to_string(),
            Self::Nominal(values) => format!("{{{}}}", values.join(",")),
            Self::String(_) => "string".to_string(),
            Self::Date => "Unimplemented".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration_text())
    }
}

/// A single named, typed attribute in a relation's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute/column name.
    pub name: String,
    /// Attribute type.
    pub attribute_type: AttributeType,
}

impl Attribute {
    /// Create a new attribute declaration.
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }
}

/// An ARFF relation: name, schema, header comments, and row-major raw cells.
///
/// Rows are stored in the same order as [`Dataset::attributes`]. A dataset is a plain value; it is
/// only known to be consistent right after [`Dataset::validate`] succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Relation name.
    pub name: String,
    /// Ordered attribute declarations; column `i` is described by `attributes[i]`.
    pub attributes: Vec<Attribute>,
    /// Row-major raw cell storage.
    pub data: Vec<Vec<String>>,
    /// Header comments, written as `% <text>` lines.
    pub comments: Vec<String>,
}

impl Dataset {
    /// Create an empty relation with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style [`Dataset::push_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.push_attribute(name, attribute_type);
        self
    }

    /// Append an attribute declaration (a new last column).
    pub fn push_attribute(&mut self, name: impl Into<String>, attribute_type: AttributeType) {
        self.attributes.push(Attribute::new(name, attribute_type));
    }

    /// Append a row of raw cells.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.push(cells.into_iter().map(Into::into).collect());
    }

    /// Append a header comment.
    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Number of declared attributes.
    pub fn column_count(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the index of an attribute by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Returns an attribute declaration by name, if present.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Iterate the cells of column `idx`. Rows too short to have that column are skipped.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.data
            .iter()
            .filter_map(move |row| row.get(idx).map(String::as_str))
    }

    /// Validate with [`ValidationOptions::default`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(self, &ValidationOptions::default())
    }

    /// Validate with explicit options.
    pub fn validate_with(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        validation::validate(self, options)
    }
}
