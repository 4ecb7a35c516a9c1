//! Display formatting for counts, money and table cells.

/// Integer with `,` thousands separators, e.g. `12,345`.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Cost with a `$` prefix and exactly two decimals, e.g. `$45.99`.
pub fn format_cost(value: f64) -> String {
    format!("${:.2}", value)
}

/// Clicks / impressions cell: absent values show as `-`.
pub fn count_cell(value: Option<i64>) -> String {
    value.map(format_count).unwrap_or_else(|| "-".to_string())
}

/// Cost cell: absent cost shows as `$0.00`.
pub fn cost_cell(value: Option<f64>) -> String {
    format_cost(value.unwrap_or(0.0))
}

/// Staggered entry animation delay for the row at `index`.
pub fn row_delay(index: usize) -> String {
    format!("{}ms", index * 50)
}
