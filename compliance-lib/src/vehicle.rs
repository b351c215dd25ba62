use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ComplianceError;

/// School bus vehicle types that have their own column in a state spec sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VehicleType {
    #[serde(rename = "MFSAB")]
    Mfsab,
    #[serde(rename = "Type AI")]
    TypeAI,
    #[serde(rename = "Type AII")]
    TypeAII,
    #[serde(rename = "Type W/C")]
    TypeWC,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Mfsab,
        VehicleType::TypeAI,
        VehicleType::TypeAII,
        VehicleType::TypeWC,
    ];

    /// Heading text used in the spec sheets
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Mfsab => "MFSAB",
            VehicleType::TypeAI => "Type AI",
            VehicleType::TypeAII => "Type AII",
            VehicleType::TypeWC => "Type W/C",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|vehicle_type| vehicle_type.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ComplianceError::UnknownVehicleType(s.to_string()))
    }
}

/// A tab of the state spec workbook. The four known states have fixed tab
/// names; any other tab can be selected by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateTab {
    MN,
    AL,
    TX,
    CA,
    Other(String),
}

impl StateTab {
    pub fn tab_name(&self) -> &str {
        match self {
            StateTab::MN => "MN",
            StateTab::AL => "AL",
            StateTab::TX => "TX",
            StateTab::CA => "CA",
            StateTab::Other(name) => name,
        }
    }
}

impl fmt::Display for StateTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_name())
    }
}

impl From<&str> for StateTab {
    fn from(value: &str) -> Self {
        match value.trim() {
            "MN" => StateTab::MN,
            "AL" => StateTab::AL,
            "TX" => StateTab::TX,
            "CA" => StateTab::CA,
            other => StateTab::Other(other.to_string()),
        }
    }
}
