use calamine::Data;

/// Render a cell the way a spreadsheet user would read it.
/// Empty and error cells become an empty string.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        // Whole floats print without the fractional part ("101" not "101.0")
        other => other.to_string(),
    }
}

/// True for cells that carry no value at all
pub fn is_blank_cell(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Error(_))
}

/// Trim surrounding whitespace and upper-case, so order codes and
/// spec patterns compare in the same case
pub fn normalize_code(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
