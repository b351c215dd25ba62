use calamine::{Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use crate::error::{ComplianceError, Result};
use crate::order::OrderTable;
use crate::spec_table::SpecTable;
use crate::vehicle::StateTab;

/// Load the order codes from `column` of `sheet` in the order workbook
pub fn load_order_table<P: AsRef<Path>>(path: P, sheet: &str, column: &str) -> Result<OrderTable> {
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(ComplianceError::OrderSheetNotFound {
            sheet: sheet.to_string(),
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    let order = OrderTable::from_range(sheet, &range, column)?;
    debug!(sheet, column, codes = order.len(), "loaded order codes");

    Ok(order)
}

/// Load the tab for `state` from the spec workbook
pub fn load_spec_table<P: AsRef<Path>>(path: P, state: &StateTab) -> Result<SpecTable> {
    let mut workbook = open_workbook_auto(path)?;
    let tab = state.tab_name();

    if !workbook.sheet_names().iter().any(|name| name == tab) {
        return Err(ComplianceError::StateTabNotFound {
            state: tab.to_string(),
        });
    }

    let range = workbook.worksheet_range(tab)?;
    let table = SpecTable::from_range(tab, &range);
    debug!(tab, rows = table.row_count(), "loaded spec tab");

    Ok(table)
}
