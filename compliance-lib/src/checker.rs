use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ComplianceError;
use crate::header_locator::{ColumnPolicy, locate_vehicle_column};
use crate::matcher::{ComplianceReport, DebugSample, check_compliance};
use crate::order::OrderTable;
use crate::pattern::{PatternFilter, extract_patterns};
use crate::spec_table::SpecTable;
use crate::vehicle::{StateTab, VehicleType};
use crate::workbook::{load_order_table, load_spec_table};
use crate::{DEFAULT_ORDER_COLUMN, DEFAULT_ORDER_SHEET};

/// Policies used while reading a spec tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOptions {
    pub column_policy: ColumnPolicy,
    pub pattern_filter: PatternFilter,
}

impl CheckOptions {
    /// Fuzzy column lookup with the strict `DDD-DD-DD` pattern filter
    pub fn strict() -> Self {
        CheckOptions {
            column_policy: ColumnPolicy::Fuzzy,
            pattern_filter: PatternFilter::Strict,
        }
    }
}

/// Required patterns for `vehicle_type` in `spec`, in row order
pub fn required_patterns(
    spec: &SpecTable,
    vehicle_type: VehicleType,
    options: CheckOptions,
) -> Result<Vec<String>, ComplianceError> {
    let column = locate_vehicle_column(spec, vehicle_type.as_str(), options.column_policy)?;
    let patterns = extract_patterns(column.cells(), options.pattern_filter);
    debug!(
        column = column.column_name(),
        patterns = patterns.len(),
        filter = ?options.pattern_filter,
        "extracted required patterns"
    );
    Ok(patterns)
}

/// Run the whole check over already loaded tables
pub fn run_check(
    order: &OrderTable,
    spec: &SpecTable,
    vehicle_type: VehicleType,
    options: CheckOptions,
) -> Result<ComplianceReport, ComplianceError> {
    let patterns = required_patterns(spec, vehicle_type, options)?;
    Ok(check_compliance(&patterns, order.codes()))
}

/// Both workbooks loaded for one state and vehicle type, ready to check
pub struct ComplianceChecker {
    order: OrderTable,
    spec: SpecTable,
    vehicle_type: VehicleType,
    options: CheckOptions,
}

pub struct ComplianceCheckerBuilder {
    order_path: PathBuf,
    spec_path: PathBuf,
    state: StateTab,
    vehicle_type: VehicleType,
    options: CheckOptions,
    order_sheet: String,
    order_column: String,
}

impl ComplianceCheckerBuilder {
    /// Create a new ComplianceCheckerBuilder
    ///
    /// # Arguments
    /// * `order_path` - Path to the order workbook
    /// * `spec_path` - Path to the state spec workbook
    /// * `state` - Tab of the spec workbook to read
    /// * `vehicle_type` - Vehicle type whose column holds the required patterns
    pub fn new(
        order_path: impl Into<PathBuf>,
        spec_path: impl Into<PathBuf>,
        state: StateTab,
        vehicle_type: VehicleType,
    ) -> Self {
        ComplianceCheckerBuilder {
            order_path: order_path.into(),
            spec_path: spec_path.into(),
            state,
            vehicle_type,
            options: CheckOptions::default(),
            order_sheet: DEFAULT_ORDER_SHEET.to_string(),
            order_column: DEFAULT_ORDER_COLUMN.to_string(),
        }
    }

    pub fn options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    pub fn order_sheet(mut self, sheet: &str) -> Self {
        self.order_sheet = sheet.to_string();
        self
    }

    pub fn order_column(mut self, column: &str) -> Self {
        self.order_column = column.to_string();
        self
    }

    /// Read both workbooks once. Later checks run on the cached tables.
    pub fn build(self) -> Result<ComplianceChecker> {
        let order = load_order_table(&self.order_path, &self.order_sheet, &self.order_column)?;
        let spec = load_spec_table(&self.spec_path, &self.state)?;

        Ok(ComplianceChecker {
            order,
            spec,
            vehicle_type: self.vehicle_type,
            options: self.options,
        })
    }
}

impl ComplianceChecker {
    pub fn order(&self) -> &OrderTable {
        &self.order
    }

    pub fn spec(&self) -> &SpecTable {
        &self.spec
    }

    pub fn check(&self) -> Result<ComplianceReport> {
        let report = run_check(&self.order, &self.spec, self.vehicle_type, self.options)?;
        info!(
            state = self.spec.name(),
            vehicle_type = %self.vehicle_type,
            matched = report.matched.len(),
            missing = report.missing.len(),
            "compliance check finished"
        );
        Ok(report)
    }

    /// First order codes and first checked patterns
    pub fn debug_sample(&self) -> Result<DebugSample> {
        let patterns = required_patterns(&self.spec, self.vehicle_type, self.options)?;
        Ok(DebugSample::new(self.order.codes(), &patterns))
    }
}
