use calamine::{Data, Range};

use crate::utils::cell_to_string;

/// One tab of a state spec workbook, fully materialized as a row-major grid.
///
/// Nothing about the layout is assumed: banner rows, notes and blank lines
/// may sit anywhere above the real header.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTable {
    name: String,
    rows: Vec<Vec<Data>>,
}

impl SpecTable {
    pub fn new(name: &str, rows: Vec<Vec<Data>>) -> Self {
        SpecTable {
            name: name.to_string(),
            rows,
        }
    }

    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let rows = range.rows().map(|row| row.to_vec()).collect();
        Self::new(name, rows)
    }

    /// Tab name the table was read from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first row for which `predicate` holds on any stringified cell
    pub fn find_row<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&str) -> bool,
    {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| predicate(&cell_to_string(cell))))
    }
}
