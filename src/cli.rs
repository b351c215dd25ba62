use clap::{Parser, ValueEnum};
use compliance_lib::{
    CheckOptions, ColumnPolicy, DEFAULT_ORDER_COLUMN, DEFAULT_ORDER_SHEET, PatternFilter,
    StateTab, VehicleType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary counts and a pattern/status table
    Table,
    /// The report as pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "order-compliance")]
#[command(about = "Check a school bus order against the state-mandated equipment codes")]
#[command(version)]
pub struct Args {
    /// Order workbook (.xlsx or .xls)
    #[arg(short, long)]
    pub order_file: String,

    /// State spec workbook with one tab per state
    #[arg(short, long)]
    pub spec_file: String,

    /// State tab to check against (MN, AL, TX, CA or any other tab name)
    #[arg(long)]
    pub state: String,

    /// Vehicle type: MFSAB, "Type AI", "Type AII" or "Type W/C"
    #[arg(long, value_parser = parse_vehicle_type)]
    pub vehicle_type: VehicleType,

    /// Only accept patterns shaped like DDD-DD-DD (digits, * or ?)
    #[arg(long)]
    pub strict: bool,

    /// Require the vehicle column header to equal the vehicle type exactly
    #[arg(long)]
    pub exact_column: bool,

    /// Sheet of the order workbook holding the order lines
    #[arg(long, default_value = DEFAULT_ORDER_SHEET)]
    pub order_sheet: String,

    /// Column of the order sheet holding the item numbers
    #[arg(long, default_value = DEFAULT_ORDER_COLUMN)]
    pub order_column: String,

    /// Where to write the Pattern/Status CSV summary
    #[arg(long, default_value = "compliance_summary.csv")]
    pub output: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the first order codes and checked patterns
    #[arg(long)]
    pub debug: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn state_tab(&self) -> StateTab {
        StateTab::from(self.state.as_str())
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            column_policy: if self.exact_column {
                ColumnPolicy::Exact
            } else {
                ColumnPolicy::Fuzzy
            },
            pattern_filter: if self.strict {
                PatternFilter::Strict
            } else {
                PatternFilter::Loose
            },
        }
    }
}

fn parse_vehicle_type(value: &str) -> Result<VehicleType, String> {
    value.parse().map_err(|e: compliance_lib::ComplianceError| e.to_string())
}
