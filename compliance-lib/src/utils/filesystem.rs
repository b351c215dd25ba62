use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::ERRORS_LOG_FILE;
use crate::utils::get_utc_iso_datetime;

/// Append a timestamped entry to the log file at `path`
///
/// # Arguments
/// * `path` - Log file, created on first use
/// * `category` - What failed (e.g., "Compliance Check Error")
/// * `message` - Details shown under the category line
pub fn append_error_log(path: &Path, category: &str, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let timestamp = get_utc_iso_datetime();
    writeln!(file, "\n[{timestamp}] {category}:\n{message}\n")
}

/// Record a failed check in [`ERRORS_LOG_FILE`]. A log that cannot be
/// written is reported through tracing; the check's own error still wins.
pub fn write_error_to_log(category: &str, message: &str) {
    if let Err(e) = append_error_log(Path::new(ERRORS_LOG_FILE), category, message) {
        warn!(log_file = ERRORS_LOG_FILE, error = %e, "could not write error log");
    }
}
