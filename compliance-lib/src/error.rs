use thiserror::Error;

/// Errors raised while loading the workbooks or running a compliance check
#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("State tab '{state}' not found.")]
    StateTabNotFound { state: String },

    #[error("Order sheet '{sheet}' not found.")]
    OrderSheetNotFound { sheet: String },

    #[error("Order column '{column}' not found in sheet '{sheet}'.")]
    OrderColumnNotFound { sheet: String, column: String },

    #[error("Vehicle type '{vehicle_type}' not found in {sheet} tab.")]
    VehicleTypeNotFound { vehicle_type: String, sheet: String },

    #[error("Vehicle column matching '{vehicle_type}' not found after header parsing.")]
    VehicleColumnNotFound { vehicle_type: String },

    #[error("Unknown vehicle type '{0}'. Expected one of: MFSAB, Type AI, Type AII, Type W/C")]
    UnknownVehicleType(String),

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ComplianceError {
    /// Configuration and input problems the user can fix by choosing another
    /// tab, vehicle type or column. Everything else is an unexpected failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ComplianceError::StateTabNotFound { .. }
                | ComplianceError::OrderSheetNotFound { .. }
                | ComplianceError::OrderColumnNotFound { .. }
                | ComplianceError::VehicleTypeNotFound { .. }
                | ComplianceError::VehicleColumnNotFound { .. }
                | ComplianceError::UnknownVehicleType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
