/// Rounds to four decimal places so repeated layout passes reproduce the
/// same coordinates bit for bit.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Shortest round-trip decimal form used for path data and attributes.
///
/// Negative zero is written as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
