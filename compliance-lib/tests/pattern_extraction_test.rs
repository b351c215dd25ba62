use compliance_lib::PatternFilter;
use compliance_lib::calamine::Data;
use compliance_lib::pattern::extract_patterns;
use proptest::prelude::*;

mod common;

#[test]
fn test_loose_keeps_code_like_values() {
    let cells = common::grid(&[&[
        "101-22-*",
        "",
        "Optional",
        "see page 3-4",
        "  200-1?-01  ",
        "NO-DIGITS",
    ]]);

    let patterns = extract_patterns(&cells[0], PatternFilter::Loose);
    assert_eq!(patterns, vec!["101-22-*", "SEE PAGE 3-4", "200-1?-01"]);
}

#[test]
fn test_strict_keeps_only_three_two_two_shape() {
    let cells = common::grid(&[&[
        "101-22-*",
        "101-22-33",
        "1*1-2?-33",
        "see page 3-4",
        "101-2-33",
        "101-22-334",
    ]]);

    let patterns = extract_patterns(&cells[0], PatternFilter::Strict);
    assert_eq!(patterns, vec!["101-22-33", "1*1-2?-33"]);
}

#[test]
fn test_group_length_mismatch_depends_on_filter() {
    assert!(!PatternFilter::Strict.accepts("101-2-33"));
    assert!(PatternFilter::Loose.accepts("101-2-33"));
}

#[test]
fn test_values_are_trimmed_and_upper_cased() {
    let cells = vec![Data::String("  ab1-cd  ".to_string())];
    assert_eq!(extract_patterns(&cells, PatternFilter::Loose), vec!["AB1-CD"]);
}

#[test]
fn test_duplicates_and_order_preserved() {
    let cells = common::grid(&[&["300-55-01", "101-22-33", "300-55-01"]]);
    assert_eq!(
        extract_patterns(&cells[0], PatternFilter::Strict),
        vec!["300-55-01", "101-22-33", "300-55-01"]
    );
}

#[test]
fn test_numeric_and_error_cells() {
    let cells = vec![
        Data::Float(10122.0),
        Data::Int(-5),
        Data::Error(calamine_error()),
        Data::Empty,
    ];

    // "-5" contains a hyphen and a digit, so the loose heuristic admits it
    assert_eq!(extract_patterns(&cells, PatternFilter::Loose), vec!["-5"]);
    assert!(extract_patterns(&cells, PatternFilter::Strict).is_empty());
}

fn calamine_error() -> compliance_lib::calamine::CellErrorType {
    compliance_lib::calamine::CellErrorType::NA
}

proptest! {
    #[test]
    fn test_loose_accepts_iff_hyphen_and_digit(value in "[A-Z0-9 *?./-]{0,12}") {
        let expected = value.contains('-') && value.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(PatternFilter::Loose.accepts(&value), expected);
    }

    #[test]
    fn test_strict_accepts_generated_shapes(value in "[0-9*?]{3}-[0-9*?]{2}-[0-9*?]{2}") {
        prop_assert!(PatternFilter::Strict.accepts(&value));
    }

    #[test]
    fn test_strict_rejects_trailing_text(
        value in "[0-9*?]{3}-[0-9*?]{2}-[0-9*?]{2}",
        suffix in "[0-9A-Z*?-]{1,4}"
    ) {
        let with_suffix = format!("{}{}", value, suffix);
        let with_prefix = format!("{}{}", suffix, value);
        prop_assert!(!PatternFilter::Strict.accepts(&with_suffix));
        prop_assert!(!PatternFilter::Strict.accepts(&with_prefix));
    }

    #[test]
    fn test_strict_accepted_values_are_loose_too(value in "[0-9*?]{3}-[0-9*?]{2}-[0-9*?]{2}") {
        // Every strict pattern has a hyphen, but may lack a digit ("***-**-**")
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(PatternFilter::Loose.accepts(&value), has_digit);
    }
}
