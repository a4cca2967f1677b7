use arff_relation::ingestion::arff::read_arff_from_path;
use arff_relation::ingestion::{read_arff, read_arff_from_str, read_arff_with};
use arff_relation::output::to_arff_string;
use arff_relation::types::{Attribute, AttributeType, Dataset};
use arff_relation::validation::{EmptyRelationPolicy, ValidationOptions};
use arff_relation::{ArffError, ValidationError};

const WEATHER: &str = "@relation weather
@attribute outlook {sunny,overcast,rainy}
@attribute temperature numeric
@data
sunny,85
rainy,70
";

#[test]
fn weather_example_parses_and_validates() {
    let ds = read_arff_from_str(WEATHER).unwrap();

    assert_eq!(ds.name, "weather");
    assert_eq!(
        ds.attributes,
        vec![
            Attribute::new("outlook", AttributeType::nominal(["sunny", "overcast", "rainy"])),
            Attribute::new("temperature", AttributeType::Numeric),
        ]
    );
    assert_eq!(ds.data, vec![vec!["sunny", "85"], vec!["rainy", "70"]]);
    assert!(ds.comments.is_empty());
    assert_eq!(ds.validate(), Ok(()));
}

#[test]
fn mutated_weather_fails_on_outlook() {
    let mut ds = read_arff_from_str(WEATHER).unwrap();
    ds.data[1] = vec!["cloudy".to_string(), "70".to_string()];

    match ds.validate() {
        Err(ValidationError::InvalidCellValue {
            row,
            column,
            attribute,
            value,
        }) => {
            assert_eq!((row, column), (1, 0));
            assert_eq!(attribute, "outlook");
            assert_eq!(value, "cloudy");
        }
        other => panic!("expected InvalidCellValue, got {other:?}"),
    }
}

#[test]
fn read_fixture_from_path() {
    let ds = read_arff_from_path("tests/fixtures/weather.arff", &ValidationOptions::default()).unwrap();

    assert_eq!(ds.name, "weather");
    assert_eq!(ds.column_count(), 6);
    assert_eq!(ds.row_count(), 5);
    assert_eq!(
        ds.comments,
        vec![
            "Quinlan's weather sample, trimmed.".to_string(),
            "Used by the integration tests.".to_string(),
        ]
    );
    assert_eq!(ds.data[0][5], "'hot day'");
    assert_eq!(ds.data[4][5], r"'it\'s damp'");
    assert_eq!(ds.column(0).collect::<Vec<_>>(), vec!["sunny", "sunny", "overcast", "rainy", "rainy"]);
}

#[test]
fn arff_round_trip_preserves_everything() {
    let mut ds = Dataset::new("'mixed relation'")
        .with_attribute("id", AttributeType::Numeric)
        .with_attribute("label", AttributeType::nominal(["a", "b", "c"]))
        .with_attribute("text", AttributeType::string());
    ds.push_comment("generated for a round trip");
    ds.push_comment("");
    ds.push_comment("  indented");
    ds.push_comment("trailing  ");
    ds.push_row(["1", "a", "'hello world'"]);
    ds.push_row(["2.5e3", "?", "token"]);
    ds.push_row(["?", "c", r"'esc\'aped'"]);

    let text = to_arff_string(&ds).unwrap();
    let back = read_arff_from_str(&text).unwrap();

    assert_eq!(back, ds);
}

#[test]
fn unrecognized_header_lines_are_ignored() {
    let input = "this line means nothing
@relation r
@RELATIONSHIP nope
@attribute a numeric
junk before data
@data
1
";
    let ds = read_arff_from_str(input).unwrap();
    assert_eq!(ds.name, "r");
    assert_eq!(ds.attributes.len(), 1);
    assert_eq!(ds.data, vec![vec!["1"]]);
}

#[test]
fn directives_are_case_insensitive() {
    let input = "@RELATION r\n@Attribute a NUMERIC\n@Attribute b {x,y}\n@DATA\n1,x\n";
    let ds = read_arff_from_str(input).unwrap();
    assert_eq!(ds.attributes[0].attribute_type, AttributeType::Numeric);
    assert_eq!(ds.data, vec![vec!["1", "x"]]);
}

#[test]
fn blank_lines_in_data_are_skipped() {
    let input = "@relation r\n@attribute a numeric\n@data\n\n1\n\n2\n";
    let ds = read_arff_from_str(input).unwrap();
    assert_eq!(ds.data, vec![vec!["1"], vec!["2"]]);
}

#[test]
fn percent_leading_string_cell_round_trips() {
    let mut ds = Dataset::new("discounts").with_attribute("code", AttributeType::string());
    ds.push_row(["%off"]);
    ds.push_row(["x"]);
    ds.validate().unwrap();

    let text = to_arff_string(&ds).unwrap();
    assert_eq!(read_arff_from_str(&text).unwrap(), ds);
}

#[test]
fn cells_with_delimiters_and_quotes_round_trip() {
    let mut ds = Dataset::new("quoting")
        .with_attribute("quoted", AttributeType::string())
        .with_attribute("bare", AttributeType::string());
    ds.push_row(["'a,b'", "\"x\""]);
    ds.push_row(["'plain'", "a\"b"]);
    ds.validate().unwrap();

    let text = to_arff_string(&ds).unwrap();
    assert!(text.ends_with("@data\n\"'a,b'\",\"\"\"x\"\"\"\n'plain',\"a\"\"b\""));
    assert_eq!(read_arff_from_str(&text).unwrap(), ds);
}

#[test]
fn width_mismatch_in_data_is_reported_by_row() {
    let input = "@relation r\n@attribute a numeric\n@attribute b numeric\n@data\n1,2\n1,2,3\n";
    let err = read_arff_from_str(input).unwrap_err();
    assert!(matches!(
        err,
        ArffError::Validation(ValidationError::ColumnCountMismatch {
            row: 1,
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn bad_cell_aborts_parse() {
    let input = "@relation r\n@attribute a numeric\n@data\n1\nabc\n";
    let err = read_arff_from_str(input).unwrap_err();
    assert!(err.to_string().contains("row 1 column 0"));
}

#[test]
fn empty_relation_policy_applies_to_parsing() {
    let input = "@relation nothing\n@data\n";
    assert!(read_arff(input.as_bytes()).is_ok());

    let strict = ValidationOptions {
        empty_relation: EmptyRelationPolicy::RequireAttributes,
    };
    let err = read_arff_with(input.as_bytes(), &strict).unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::MalformedSchema { .. })
    ));
}

#[test]
fn dataset_serializes_to_json() {
    let ds = read_arff_from_str(WEATHER).unwrap();
    let json = serde_json::to_value(&ds).unwrap();
    assert_eq!(json["name"], "weather");
    assert_eq!(json["attributes"][1]["attribute_type"], "numeric");
    assert_eq!(
        json["attributes"][0]["attribute_type"]["nominal"],
        serde_json::json!(["sunny", "overcast", "rainy"])
    );

    let back: Dataset = serde_json::from_value(json).unwrap();
    assert_eq!(back, ds);
}

#[test]
fn string_quote_survives_json() {
    let ds = Dataset::new("r").with_attribute("s", AttributeType::string_with_quote('"'));
    let text = serde_json::to_string(&ds).unwrap();
    assert!(text.contains(r#""string":"\"""#));
    let back: Dataset = serde_json::from_str(&text).unwrap();
    assert_eq!(back.attributes[0].attribute_type, AttributeType::string_with_quote('"'));
}
