//! Common test utilities for the compliance-lib tests

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Re-export shared test utilities from src/test_utils.rs
#[allow(unused_imports)]
pub use compliance_lib::test_utils::{
    create_test_order_table, create_test_spec_table, grid, spec_table,
};

/// Write a workbook with one worksheet per `(name, rows)` entry.
/// Empty strings leave the cell blank.
#[allow(dead_code)]
pub fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(row_index as u32, col_index as u16, *value)
                    .unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// An order workbook with the default `Mapics` sheet and `Item Numbers` column
#[allow(dead_code)]
pub fn create_order_workbook(dir: &TempDir, codes: &[&str]) -> PathBuf {
    let path = dir.path().join("order.xlsx");
    let mut rows: Vec<Vec<&str>> = vec![vec!["Line", "Item Numbers", "Description"]];
    for code in codes {
        rows.push(vec!["1", code, "part"]);
    }
    let rows: Vec<&[&str]> = rows.iter().map(|row| row.as_slice()).collect();
    write_workbook(&path, &[("Mapics", rows.as_slice())]);
    path
}

/// A spec workbook with an MN tab laid out like a real state sheet and an
/// AL tab that never mentions MFSAB
#[allow(dead_code)]
pub fn create_spec_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("spec.xlsx");
    write_workbook(
        &path,
        &[
            (
                "MN",
                &[
                    &["Minnesota School Bus Specifications", "", ""],
                    &["", "", ""],
                    &["Item", "MFSAB", "Type AI"],
                    &["Stop arm", "101-22-*", "101-22-*"],
                    &["Crossing arm", "200-*-*", ""],
                    &["Note", "Optional", "see page 3-4"],
                ],
            ),
            (
                "AL",
                &[
                    &["Alabama", ""],
                    &["Item", "Type AI"],
                    &["Stop arm", "101-22-*"],
                ],
            ),
        ],
    );
    path
}
