//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Placeholder for values the API did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a timestamp as a UTC date, or `N/A` when absent.
///
/// # Example output
/// `2024-01-15`
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format an optional flag as `yes` / `no` / `N/A`.
pub fn format_flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an optional value with `Display`, or `N/A`.
pub fn format_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Show the first and last characters of a secret.
///
/// # Example output
/// `sntr…f00d`
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}
