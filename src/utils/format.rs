//! Formatting utilities for numeric table cells.

use crate::config::MAX_DECIMALS;

/// Parse a cell as a number, ignoring surrounding whitespace.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number for a table cell (e.g., "3", "0.5", "1.234568").
///
/// Integral values print without decimals, others with at most
/// `MAX_DECIMALS` places and no trailing zeros.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let fixed = format!("{:.*}", MAX_DECIMALS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
