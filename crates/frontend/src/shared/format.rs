//! Number and date formatting for tables and forms (fr-FR conventions)

use chrono::{DateTime, Utc};

/// Formats a number with space thousands separators and a comma decimal separator
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert a space every 3 digits from the end of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Price cell: "1 234,50 €", or an em dash when the item has no price
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} €", format_number_with_decimals(v, 2)),
        None => "—".to_string(),
    }
}

/// Parses a price typed in a form. Accepts "12,5", "12.5" and "1 234,50"; empty means no price.
pub fn parse_price(input: &str) -> Result<Option<f64>, String> {
    let cleaned: String = input
        .trim()
        .trim_end_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("Prix invalide : {}", input.trim()))
}

/// Timestamp cell: "15/03/2024 14:02"
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}
