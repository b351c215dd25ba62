use calamine::Data;
use tracing::debug;

use crate::error::{ComplianceError, Result};
use crate::spec_table::SpecTable;
use crate::utils::{cell_to_string, contains_ignore_case};

static EMPTY_CELL: Data = Data::Empty;

/// How the vehicle-type column is picked out of the discovered header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    /// Header text must equal the vehicle type exactly
    Exact,
    /// Header text only has to contain the vehicle type, ignoring case.
    /// The leftmost such column wins.
    #[default]
    Fuzzy,
}

impl ColumnPolicy {
    pub fn resolve(&self, headers: &[String], vehicle_type: &str) -> Option<usize> {
        match self {
            ColumnPolicy::Exact => headers.iter().position(|header| header == vehicle_type),
            ColumnPolicy::Fuzzy => headers
                .iter()
                .position(|header| contains_ignore_case(header.trim(), vehicle_type)),
        }
    }
}

/// A spec tab reshaped around its discovered header row
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleColumn {
    /// Index of the header row in the original tab
    pub header_row: usize,
    /// Stringified header cells, one per column
    pub headers: Vec<String>,
    /// Index of the resolved vehicle-type column within `headers`
    pub column: usize,
    /// Rows strictly below the header row
    pub rows: Vec<Vec<Data>>,
}

impl VehicleColumn {
    pub fn column_name(&self) -> &str {
        &self.headers[self.column]
    }

    /// Cells of the vehicle-type column in row order. Short rows yield empty cells.
    pub fn cells(&self) -> impl Iterator<Item = &Data> + '_ {
        self.rows
            .iter()
            .map(|row| row.get(self.column).unwrap_or(&EMPTY_CELL))
    }
}

/// Row index of the first row that mentions `vehicle_type` in any cell,
/// ignoring case. Rows are scanned top to bottom, so banner rows that do not
/// mention the vehicle type are skipped.
pub fn find_header_row(table: &SpecTable, vehicle_type: &str) -> Option<usize> {
    table.find_row(|cell| contains_ignore_case(cell, vehicle_type))
}

/// Locate the header row for `vehicle_type` and resolve its column under `policy`
pub fn locate_vehicle_column(
    table: &SpecTable,
    vehicle_type: &str,
    policy: ColumnPolicy,
) -> Result<VehicleColumn> {
    let header_row = find_header_row(table, vehicle_type).ok_or_else(|| {
        ComplianceError::VehicleTypeNotFound {
            vehicle_type: vehicle_type.to_string(),
            sheet: table.name().to_string(),
        }
    })?;

    let headers: Vec<String> = table.rows()[header_row]
        .iter()
        .map(cell_to_string)
        .collect();

    let column = policy.resolve(&headers, vehicle_type).ok_or_else(|| {
        ComplianceError::VehicleColumnNotFound {
            vehicle_type: vehicle_type.to_string(),
        }
    })?;

    debug!(
        sheet = table.name(),
        header_row,
        column,
        column_name = headers[column].as_str(),
        "resolved vehicle column"
    );

    Ok(VehicleColumn {
        header_row,
        headers,
        column,
        rows: table.rows()[header_row + 1..].to_vec(),
    })
}
