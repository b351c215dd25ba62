use calamine::{Data, Range};

use crate::error::{ComplianceError, Result};
use crate::utils::{cell_to_string, is_blank_cell, normalize_code};

/// Item codes of a purchase order, trimmed and upper-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTable {
    codes: Vec<String>,
}

impl OrderTable {
    /// Build from raw code strings, normalizing each one. Blank codes are dropped.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| normalize_code(code.as_ref()))
            .filter(|code| !code.is_empty())
            .collect();
        OrderTable { codes }
    }

    /// Read `column` from a sheet whose first row holds the column names
    pub fn from_rows(sheet: &str, rows: &[Vec<Data>], column: &str) -> Result<Self> {
        let column_not_found = || ComplianceError::OrderColumnNotFound {
            sheet: sheet.to_string(),
            column: column.to_string(),
        };

        let (header, body) = rows.split_first().ok_or_else(column_not_found)?;
        let column_index = header
            .iter()
            .position(|cell| cell_to_string(cell).trim() == column)
            .ok_or_else(column_not_found)?;

        let codes = body
            .iter()
            .filter_map(|row| row.get(column_index))
            .filter(|cell| !is_blank_cell(cell))
            .map(cell_to_string);

        Ok(Self::from_codes(codes))
    }

    pub fn from_range(sheet: &str, range: &Range<Data>, column: &str) -> Result<Self> {
        let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
        Self::from_rows(sheet, &rows, column)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
