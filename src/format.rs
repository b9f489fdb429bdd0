//! Presentation formatting for result rows.
//!
//! Renders a materialized result as plain text, one line per row with
//! cells separated by single spaces. This is purely a presentation
//! concern — the driver itself never consumes the formatted output.

use crate::types::Row;

/// Formats rows as newline-terminated lines of space-separated cells.
///
/// Booleans render lowercase and NULL cells render as `NULL`. A row whose
/// rendering is empty becomes a single tab so that downstream line-based
/// diffing still sees the row.
pub fn format_rows(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|value| value.to_display_string())
            .collect::<Vec<_>>()
            .join(" ");
        if line.is_empty() {
            out.push('\t');
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}
