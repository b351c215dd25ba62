//! Common test utilities for the order-compliance binary tests

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

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
                if !value.is_empty() {
                    worksheet
                        .write_string(row_index as u32, col_index as u16, *value)
                        .unwrap();
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Order and spec workbooks for the MN / MFSAB scenario
#[allow(dead_code)]
pub fn create_test_workbooks(dir: &TempDir) -> (PathBuf, PathBuf) {
    let order_path = dir.path().join("order.xlsx");
    write_workbook(
        &order_path,
        &[(
            "Mapics",
            &[
                &["Line", "Item Numbers"],
                &["1", "101-22-33"],
                &["2", "999-00-00"],
            ],
        )],
    );

    let spec_path = dir.path().join("spec.xlsx");
    write_workbook(
        &spec_path,
        &[(
            "MN",
            &[
                &["Minnesota School Bus Specifications", ""],
                &["Item", "MFSAB"],
                &["Stop arm", "101-22-*"],
                &["Crossing arm", "200-*-*"],
                &["Note", "Optional"],
            ],
        )],
    );

    (order_path, spec_path)
}
