use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::DEBUG_SAMPLE_SIZE;
use crate::error::Result;
use crate::glob::glob_match;

/// Whether any order code satisfies a required pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternStatus {
    Matched,
    Missing,
}

impl PatternStatus {
    /// Literal written to the `Status` column of the exported CSV
    pub fn label(&self) -> &'static str {
        match self {
            PatternStatus::Matched => "✅ Matched",
            PatternStatus::Missing => "❌ Missing",
        }
    }
}

impl fmt::Display for PatternStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub pattern: String,
    pub status: PatternStatus,
}

/// Required patterns split into those satisfied by the order and those not.
/// Each list keeps the order in which the patterns were found in the spec sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl ComplianceReport {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    pub fn is_compliant(&self) -> bool {
        self.missing.is_empty()
    }

    /// One row per pattern, matched patterns first
    pub fn results(&self) -> Vec<ComplianceResult> {
        let matched = self.matched.iter().map(|pattern| ComplianceResult {
            pattern: pattern.clone(),
            status: PatternStatus::Matched,
        });
        let missing = self.missing.iter().map(|pattern| ComplianceResult {
            pattern: pattern.clone(),
            status: PatternStatus::Missing,
        });
        matched.chain(missing).collect()
    }

    /// Write the `Pattern,Status` summary to any writer
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        // Quote fields only when necessary (e.g. patterns containing commas)
        let mut wtr = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        wtr.write_record(["Pattern", "Status"])?;
        for result in self.results() {
            wtr.write_record([result.pattern.as_str(), result.status.label()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Export the summary to a CSV file, replacing any existing file
    pub fn export_to_csv<P: AsRef<Path>>(&self, csv_path: P) -> Result<()> {
        let file = std::fs::File::create(csv_path)?;
        self.write_csv(file)
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_json_with_sample(None)
    }

    /// JSON document for the report, with the debug sample under `debug` when given
    pub fn to_json_with_sample(&self, sample: Option<&DebugSample>) -> Result<String> {
        let mut value = serde_json::json!({
            "matched": self.matched.len(),
            "missing": self.missing.len(),
            "results": self.results(),
        });
        if let Some(sample) = sample {
            value["debug"] = serde_json::to_value(sample)?;
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Classify every pattern against the order codes.
///
/// Both sides must already be in the same case. A pattern is matched when
/// at least one code matches it in full.
pub fn check_compliance(patterns: &[String], order_codes: &[String]) -> ComplianceReport {
    let mut report = ComplianceReport::default();

    for pattern in patterns {
        if order_codes.iter().any(|code| glob_match(pattern, code)) {
            report.matched.push(pattern.clone());
        } else {
            report.missing.push(pattern.clone());
        }
    }

    report
}

/// The first few order codes and checked patterns, for troubleshooting
/// a spec sheet or order export that matches less than expected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugSample {
    pub order_codes: Vec<String>,
    pub patterns: Vec<String>,
}

impl DebugSample {
    pub fn new(order_codes: &[String], patterns: &[String]) -> Self {
        DebugSample {
            order_codes: order_codes.iter().take(DEBUG_SAMPLE_SIZE).cloned().collect(),
            patterns: patterns.iter().take(DEBUG_SAMPLE_SIZE).cloned().collect(),
        }
    }
}
