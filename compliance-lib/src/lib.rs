#![allow(clippy::needless_return)]

mod checker;
pub mod error;
pub mod glob;
pub mod header_locator;
pub mod matcher;
pub mod order;
pub mod pattern;
pub mod spec_table;
pub mod utils;
pub mod vehicle;
mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use calamine;
pub use checker::{
    CheckOptions, ComplianceChecker, ComplianceCheckerBuilder, required_patterns, run_check,
};
pub use error::{ComplianceError, Result};
pub use header_locator::{ColumnPolicy, VehicleColumn};
pub use matcher::{ComplianceReport, ComplianceResult, DebugSample, PatternStatus};
pub use order::OrderTable;
pub use pattern::PatternFilter;
pub use spec_table::SpecTable;
pub use vehicle::{StateTab, VehicleType};
pub use workbook::{load_order_table, load_spec_table};

pub const ERRORS_LOG_FILE: &str = "errors.log";

/// Sheet of the order workbook that holds the order lines
pub const DEFAULT_ORDER_SHEET: &str = "Mapics";

/// Column of the order sheet that holds the item codes
pub const DEFAULT_ORDER_COLUMN: &str = "Item Numbers";

/// Number of order codes and patterns kept in a [`DebugSample`]
pub const DEBUG_SAMPLE_SIZE: usize = 10;
