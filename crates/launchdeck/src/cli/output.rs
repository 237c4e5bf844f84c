//! Output formatting for launch lists and launch details.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Result;
use crate::launch::LaunchRecord;
use crate::view::{list_row, ListRow, PayloadMass, ViewFields, UNKNOWN};

/// Mission names longer than this are cut in the human list.
const MISSION_COLUMN_WIDTH: usize = 32;

/// JSON output structure for a launch list.
#[derive(Debug, Serialize)]
struct JsonList<'a> {
    query: &'a str,
    count: usize,
    launches: Vec<ListRow<'a>>,
}

/// Rows for `launches` in display order.
#[must_use]
pub fn rows<'a>(launches: &[&'a LaunchRecord], newest_first: bool) -> Vec<ListRow<'a>> {
    let rows = launches.iter().copied().map(list_row);
    if newest_first {
        rows.rev().collect()
    } else {
        rows.collect()
    }
}

/// Formats a launch list for human-readable terminal output.
#[must_use]
pub fn format_list_human(query: &str, rows: &[ListRow<'_>]) -> String {
    if rows.is_empty() {
        return if query.is_empty() {
            "No launches.\n".to_string()
        } else {
            format!("No launches match \"{query}\".\n")
        };
    }

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:<12}  {}",
            row.flight_number,
            truncate(row.mission_name, MISSION_COLUMN_WIDTH),
            row.date.to_string(),
            row.site_name,
            width = MISSION_COLUMN_WIDTH,
        );
    }
    out
}

/// Formats a launch list as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_list_json(query: &str, rows: Vec<ListRow<'_>>) -> Result<String> {
    let output = JsonList {
        query,
        count: rows.len(),
        launches: rows,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Formats the detail panel for human-readable terminal output.
#[must_use]
pub fn format_detail_human(fields: &ViewFields<'_>) -> String {
    let payload = match fields.payload_mass_kg {
        PayloadMass::Kg(_) => format!("{} kg", fields.payload_mass_kg),
        PayloadMass::Unknown => UNKNOWN.to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} (flight {})", fields.mission_name, fields.flight_number);
    let _ = writeln!(out, "  \u{2022} {} \u{2022} {}", fields.date, fields.site_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Rocket:          {}", fields.rocket_name);
    let _ = writeln!(out, "  Payload:         {payload}");
    let _ = writeln!(out, "  Launch success:  {}", fields.success);
    let _ = writeln!(out, "  Video:           {}", fields.links.video.unwrap_or(UNKNOWN));
    let _ = writeln!(out, "  Wikipedia:       {}", fields.links.wikipedia.unwrap_or(UNKNOWN));
    let _ = writeln!(out, "  Details:         {}", fields.details);
    out
}

/// Formats the detail panel as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_detail_json(fields: &ViewFields<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(fields)?)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
