//! Schema/data consistency checks for a [`Dataset`].
//!
//! [`validate`] runs its checks in a fixed order and stops at the first failure:
//!
//! 1. relation name
//! 2. attribute declarations
//! 3. row widths
//! 4. cell values against their column type
//! 5. comments

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{AttributeType, Dataset, StringPattern};

/// What to do with a relation that declares no attributes at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyRelationPolicy {
    /// Accept it. With no attributes, only zero-width rows are valid.
    #[default]
    Permit,
    /// Reject it as [`ValidationError::MalformedSchema`].
    RequireAttributes,
}

/// Options controlling validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Policy for relations without attributes.
    pub empty_relation: EmptyRelationPolicy,
}

/// Validate `dataset` against its own schema.
pub fn validate(dataset: &Dataset, options: &ValidationOptions) -> Result<(), ValidationError> {
    check_name(dataset)?;
    check_schema(dataset, options)?;
    check_row_widths(dataset)?;
    check_cells(dataset)?;
    check_comments(dataset)
}

fn check_name(dataset: &Dataset) -> Result<(), ValidationError> {
    if StringPattern::default().is_match(&dataset.name) {
        Ok(())
    } else {
        Err(ValidationError::MissingRelationName {
            name: dataset.name.clone(),
        })
    }
}

fn check_schema(dataset: &Dataset, options: &ValidationOptions) -> Result<(), ValidationError> {
    if dataset.attributes.is_empty() && options.empty_relation == EmptyRelationPolicy::RequireAttributes {
        return Err(ValidationError::MalformedSchema {
            index: 0,
            name: String::new(),
            message: "relation declares no attributes".to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(dataset.attributes.len());
    for (index, attr) in dataset.attributes.iter().enumerate() {
        let malformed = |message: &str| ValidationError::MalformedSchema {
            index,
            name: attr.name.clone(),
            message: message.to_string(),
        };

        if attr.name.is_empty() {
            return Err(malformed("attribute name is empty"));
        }
        if attr.name.chars().any(char::is_whitespace) {
            return Err(malformed("attribute name contains whitespace"));
        }
        if attr.name.starts_with(['\'', '"']) {
            return Err(malformed("quoted attribute names are not supported"));
        }
        if !seen.insert(attr.name.as_str()) {
            return Err(malformed("duplicate attribute name"));
        }
        if let AttributeType::Nominal(values) = &attr.attribute_type {
            if values.is_empty() {
                return Err(malformed("nominal attribute has no values"));
            }
            if values.iter().any(|v| v.contains(',')) {
                return Err(malformed("nominal value contains ','"));
            }
        }
    }
    Ok(())
}

fn check_row_widths(dataset: &Dataset) -> Result<(), ValidationError> {
    let expected = dataset.attributes.len();
    match dataset
        .data
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        Some((row, cells)) => Err(ValidationError::ColumnCountMismatch {
            row,
            expected,
            found: cells.len(),
        }),
        None => Ok(()),
    }
}

// Column-major so a failure names the first bad cell of the leftmost bad column.
fn check_cells(dataset: &Dataset) -> Result<(), ValidationError> {
    for (column, attr) in dataset.attributes.iter().enumerate() {
        for (row, value) in dataset.column(column).enumerate() {
            if attr.attribute_type.matches(value) {
                continue;
            }
            if attr.attribute_type.is_date() {
                return Err(ValidationError::AbstractTypeUsed {
                    attribute: attr.name.clone(),
                });
            }
            return Err(ValidationError::InvalidCellValue {
                row,
                column,
                attribute: attr.name.clone(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn check_comments(dataset: &Dataset) -> Result<(), ValidationError> {
    match dataset
        .comments
        .iter()
        .position(|c| c.contains(['\n', '\r']))
    {
        Some(index) => Err(ValidationError::InvalidComment { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Dataset {
        let mut ds = Dataset::new("weather")
            .with_attribute("outlook", AttributeType::nominal(["sunny", "overcast", "rainy"]))
            .with_attribute("temperature", AttributeType::Numeric);
        ds.push_row(["sunny", "85"]);
        ds.push_row(["rainy", "70"]);
        ds
    }

    #[test]
    fn valid_dataset_passes() {
        assert_eq!(weather().validate(), Ok(()));
    }

    #[test]
    fn empty_name_fails_first() {
        let mut ds = weather();
        ds.name.clear();
        // Also break a row; the name check must win.
        ds.data[0].push("extra".to_string());
        assert_eq!(
            ds.validate(),
            Err(ValidationError::MissingRelationName { name: String::new() })
        );
    }

    #[test]
    fn name_with_whitespace_must_be_quoted() {
        let mut ds = weather();
        ds.name = "my weather".to_string();
        assert!(matches!(ds.validate(), Err(ValidationError::MissingRelationName { .. })));
        ds.name = "'my weather'".to_string();
        assert_eq!(ds.validate(), Ok(()));
    }

    #[test]
    fn malformed_attribute_names_are_reported_with_index() {
        let mut ds = weather();
        ds.attributes[1].name = "temp erature".to_string();
        assert!(matches!(
            ds.validate(),
            Err(ValidationError::MalformedSchema { index: 1, .. })
        ));

        let mut ds = weather();
        ds.attributes[0].name.clear();
        assert!(matches!(
            ds.validate(),
            Err(ValidationError::MalformedSchema { index: 0, .. })
        ));
    }

    #[test]
    fn duplicate_attribute_names_are_rejected() {
        let mut ds = weather();
        ds.attributes[1].name = "outlook".to_string();
        let err = ds.validate().unwrap_err();
        assert!(matches!(err, ValidationError::MalformedSchema { index: 1, .. }));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn nominal_values_must_be_renderable() {
        let ds = Dataset::new("r").with_attribute("c", AttributeType::nominal(["a,b", "c"]));
        assert!(matches!(ds.validate(), Err(ValidationError::MalformedSchema { .. })));

        let ds = Dataset::new("r").with_attribute("c", AttributeType::nominal(Vec::<String>::new()));
        assert!(matches!(ds.validate(), Err(ValidationError::MalformedSchema { .. })));
    }

    #[test]
    fn wide_row_is_a_column_count_mismatch() {
        let mut ds = weather();
        ds.push_row(["sunny", "80", "high"]);
        assert_eq!(
            ds.validate(),
            Err(ValidationError::ColumnCountMismatch {
                row: 2,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn invalid_cell_carries_position() {
        let mut ds = weather();
        ds.data[1][0] = "cloudy".to_string();
        assert_eq!(
            ds.validate(),
            Err(ValidationError::InvalidCellValue {
                row: 1,
                column: 0,
                attribute: "outlook".to_string(),
                value: "cloudy".to_string(),
            })
        );
    }

    #[test]
    fn missing_values_pass_every_column() {
        let mut ds = weather();
        ds.push_row(["?", "?"]);
        assert_eq!(ds.validate(), Ok(()));
    }

    #[test]
    fn date_columns_only_hold_missing_values() {
        let mut ds = Dataset::new("events").with_attribute("when", AttributeType::Date);
        ds.push_row(["?"]);
        assert_eq!(ds.validate(), Ok(()));

        ds.push_row(["2009-11-10"]);
        assert_eq!(
            ds.validate(),
            Err(ValidationError::AbstractTypeUsed {
                attribute: "when".to_string()
            })
        );
    }

    #[test]
    fn multi_line_comment_is_rejected() {
        let mut ds = weather();
        ds.push_comment("fine");
        ds.push_comment("two\nlines");
        assert_eq!(ds.validate(), Err(ValidationError::InvalidComment { index: 1 }));
    }

    #[test]
    fn empty_relation_is_permitted_by_default() {
        let ds = Dataset::new("empty");
        assert_eq!(ds.validate(), Ok(()));
    }

    #[test]
    fn empty_relation_can_be_rejected() {
        let ds = Dataset::new("empty");
        let opts = ValidationOptions {
            empty_relation: EmptyRelationPolicy::RequireAttributes,
        };
        assert!(matches!(
            ds.validate_with(&opts),
            Err(ValidationError::MalformedSchema { .. })
        ));
        assert_eq!(weather().validate_with(&opts), Ok(()));
    }

    #[test]
    fn attributes_without_rows_are_valid() {
        let ds = Dataset::new("schema_only").with_attribute("x", AttributeType::Numeric);
        assert_eq!(ds.validate(), Ok(()));
    }
}
