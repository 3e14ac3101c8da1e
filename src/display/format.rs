//! Formatting helpers shared by the report writers and terminal output
//!
//! All helpers are pure functions; there is no formatter state to share.

use chrono::NaiveDate;

use crate::models::{Money, Month};

/// Format an amount with exactly two decimals and no currency symbol
pub fn format_amount(amount: Money) -> String {
    amount.to_string()
}

/// Format a date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a month as YYYY-MM
pub fn format_month(month: Month) -> String {
    month.to_string()
}

/// Divisor for proportional bars: the largest amount, or 1.0 when there is
/// none or it is zero
pub fn bar_divisor(max_amount: Option<Money>) -> f64 {
    match max_amount {
        Some(max) if !max.is_zero() => max.as_f64(),
        _ => 1.0,
    }
}

/// Number of bar units for `value` relative to `max_value`, scaled to `scale`
///
/// Rounds half away from zero. Negative ratios clamp to zero.
pub fn bar_units(value: Money, max_value: f64, scale: usize) -> usize {
    let units = (value.as_f64() * scale as f64 / max_value).round();
    if units.is_finite() && units > 0.0 {
        units as usize
    } else {
        0
    }
}

/// Create a textual bar of `fill` characters, at most `width` long
pub fn format_bar(value: Money, max_value: f64, width: usize, fill: char) -> String {
    std::iter::repeat(fill)
        .take(bar_units(value, max_value, width))
        .collect()
}

/// Indent a title by `indent` spaces and pad it on the right to `width`
pub fn format_header(title: &str, indent: usize, width: usize) -> String {
    format!(
        "{:indent$}{:<rest$}",
        "",
        title,
        indent = indent,
        rest = width.saturating_sub(indent)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
