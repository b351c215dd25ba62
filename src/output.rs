use compliance_lib::{ComplianceReport, DebugSample};

/// Lay out rows under a header with space-padded columns
pub fn format_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let pad = |cell: &str, width: usize| {
        let fill = width.saturating_sub(cell.chars().count());
        format!("{}{}", cell, " ".repeat(fill))
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    lines.push(header_row.join("  ").trim_end().to_string());

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    lines.push(sep.join("  "));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

pub fn render_summary(report: &ComplianceReport) -> String {
    let rows = report
        .results()
        .into_iter()
        .map(|result| vec![result.pattern, result.status.label().to_string()])
        .collect();

    format!(
        "Compliance Summary\n✅ Matched: {}\n❌ Missing: {}\n\n{}",
        report.matched.len(),
        report.missing.len(),
        format_table(&["Pattern", "Status"], rows)
    )
}

pub fn render_debug_sample(sample: &DebugSample) -> String {
    format!(
        "Debug Info\nOrder Codes Sample: {:?}\nPatterns Checked Sample: {:?}",
        sample.order_codes, sample.patterns
    )
}
