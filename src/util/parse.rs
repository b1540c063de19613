/// Parses a decimal integer with an optional sign, ignoring surrounding
/// spaces and tabs.
///
/// Returns `None` for empty input, stray characters or values outside the
/// `i64` range.
///
/// ## Example
/// ```
/// use dynvar::util::parse::parse_integer;
///
/// assert_eq!(parse_integer(" -42\t"), Some(-42));
/// assert_eq!(parse_integer("+7"), Some(7));
/// assert_eq!(parse_integer("4x"), None);
/// assert_eq!(parse_integer("99999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_matches(is_blank);
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.strip_prefix('+').unwrap_or(trimmed).parse().ok()
}
/// Parses a plain decimal float (`[+-]digits[.digits]`), ignoring surrounding
/// whitespace.
///
/// At least one digit is required on either side of the decimal point.
/// Exponents, `inf` and `NaN` spellings are rejected.
///
/// ## Example
/// ```
/// use dynvar::util::parse::parse_float;
///
/// assert_eq!(parse_float("10.5"), Some(10.5));
/// assert_eq!(parse_float("-.5"), Some(-0.5));
/// assert_eq!(parse_float("3."), Some(3.0));
/// assert_eq!(parse_float("."), None);
/// assert_eq!(parse_float("1e5"), None);
/// ```
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    trimmed.strip_prefix('+').unwrap_or(trimmed).parse().ok()
}
/// Converts text to a number the way JavaScript's `ToNumber` does for the
/// plain decimal forms: blank text is `0`, unparsable text is `NaN`.
///
/// ## Example
/// ```
/// use dynvar::util::parse::text_to_number;
///
/// assert_eq!(text_to_number("  "), 0.0);
/// assert_eq!(text_to_number("1"), 1.0);
/// assert!(text_to_number("one").is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_to_number(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    parse_integer(text).map_or_else(|| parse_float(text).unwrap_or(f64::NAN), |i| i as f64)
}

const fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}
