//! Brazilian Real formatting (`R$ 1.234,50`), independent of the host locale.

/// Formats `value` as `R$ X.XXX,XX`: dot thousands separator, comma decimal
/// separator, always two decimal places.
///
/// Non-finite values render as zero, following the lenient rendering policy
/// for malformed input.
pub fn format_brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // A value that rounds to zero never carries a sign.
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!(
        "R$ {}{},{}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}
