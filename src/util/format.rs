/// Renders a float the way JavaScript prints numbers: `NaN`, `Infinity` and
/// `-Infinity` for the non-finite values, the shortest round-tripping decimal
/// form otherwise (`3` rather than `3.0`).
///
/// ## Example
/// ```
/// use dynvar::util::format::format_float;
///
/// assert_eq!(format_float(1.5), "1.5");
/// assert_eq!(format_float(3.0), "3");
/// assert_eq!(format_float(f64::NAN), "NaN");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // Both zeros print as `0`.
        "0".to_string()
    } else {
        value.to_string()
    }
}
