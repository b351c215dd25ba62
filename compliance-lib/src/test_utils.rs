// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::Data;

use crate::order::OrderTable;
use crate::spec_table::SpecTable;

/// Turn a text cell into calamine data. `""` becomes an empty cell.
pub fn text_cell(value: &str) -> Data {
    if value.is_empty() {
        Data::Empty
    } else {
        Data::String(value.to_string())
    }
}

/// Build a grid of text cells from string literals
pub fn grid(rows: &[&[&str]]) -> Vec<Vec<Data>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| text_cell(cell)).collect())
        .collect()
}

/// Build a spec tab from string literals
pub fn spec_table(name: &str, rows: &[&[&str]]) -> SpecTable {
    SpecTable::new(name, grid(rows))
}

/// A typical state tab: two banner rows, a blank line, the header, then
/// a mix of code patterns, notes and blanks
pub fn create_test_spec_table() -> SpecTable {
    spec_table(
        "MN",
        &[
            &["Minnesota School Bus Specifications", "", "", ""],
            &["Revised 2024", "", "", ""],
            &["", "", "", ""],
            &["Item", "MFSAB", "Type AI", "Type AII"],
            &["Stop arm", "101-22-*", "101-22-*", "101-22-*"],
            &["Crossing arm", "200-*-*", "", "200-1?-01"],
            &["Note", "see page 3-4", "Optional", ""],
            &["Strobe", "300-55-0?", "300-55-01", "3-1"],
        ],
    )
}

/// Order codes matching the first row of the test spec tab
pub fn create_test_order_table() -> OrderTable {
    OrderTable::from_codes(["101-22-33", " 999-00-00 ", "300-55-01"])
}
