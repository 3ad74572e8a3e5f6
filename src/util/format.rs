/// Formats a number for display with at most `decimal_places` decimals.
///
/// Trailing zeros and a trailing decimal point are removed, and a result
/// that rounds to zero is shown as `0` rather than `-0`.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `decimal_places`: Maximum number of digits after the decimal point.
///
/// ## Example
/// ```
/// use pemdas::util::format::format_number;
///
/// assert_eq!(format_number(8.0, 10), "8");
/// assert_eq!(format_number(0.1 + 0.2, 10), "0.3");
/// assert_eq!(format_number(-2.5, 10), "-2.5");
/// assert_eq!(format_number(2.0 / 3.0, 3), "0.667");
/// assert_eq!(format_number(-0.0000001, 3), "0");
/// ```
#[must_use]
pub fn format_number(value: f64, decimal_places: usize) -> String {
    let text = format!("{value:.decimal_places$}");
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
