use std::cmp::Ordering;

use crate::{error::ValueError, value::core::ValueResult};

/// `2^63` as an `f64`; the first float above the `i64` range.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns [`ValueError::OutOfRange`] for non-finite or out-of-range values and
/// [`ValueError::Fractional`] for values with a fractional part.
///
/// ## Example
/// ```
/// use dynvar::{error::ValueError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, ValueError::Fractional { .. }));
///
/// let err = f64_to_i64_checked(1e20).unwrap_err();
/// assert!(matches!(err, ValueError::OutOfRange { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64) -> ValueResult<i64> {
    if !value.is_finite() || value < -TWO_POW_63 || value >= TWO_POW_63 {
        return Err(ValueError::OutOfRange { value:  value.to_string(),
                                            target: "i64", });
    }
    if value.fract() != 0.0 {
        return Err(ValueError::Fractional { value:  value.to_string(),
                                            target: "i64", });
    }
    Ok(value as i64)
}
/// Safely converts an `i64` to a `usize` if it can be represented exactly.
///
/// ## Errors
/// Returns [`ValueError::OutOfRange`] if the value is negative or exceeds the
/// maximum representable `usize`.
pub fn i64_to_usize_checked(value: i64) -> ValueResult<usize> {
    usize::try_from(value).map_err(|_| ValueError::OutOfRange { value:  value.to_string(),
                                                                target: "usize", })
}
/// Safely converts a `usize` to an `i64`.
///
/// ## Errors
/// Returns [`ValueError::OutOfRange`] on targets where `usize` is wider than
/// the positive `i64` range and the value does not fit.
pub fn usize_to_i64_checked(value: usize) -> ValueResult<i64> {
    i64::try_from(value).map_err(|_| ValueError::OutOfRange { value:  value.to_string(),
                                                              target: "i64", })
}
/// Compares an integer against a float without rounding the integer first.
///
/// Returns `None` when `float` is NaN.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use dynvar::util::num::cmp_i64_f64;
///
/// assert_eq!(cmp_i64_f64(3, 3.0), Some(Ordering::Equal));
/// assert_eq!(cmp_i64_f64(3, 3.5), Some(Ordering::Less));
/// assert_eq!(cmp_i64_f64(i64::MAX, 9.3e18), Some(Ordering::Less));
/// assert_eq!(cmp_i64_f64(0, f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn cmp_i64_f64(integer: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if float < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    // `float` now lies in the `i64` range, so its integral part is exact.
    let truncated = float.trunc();
    match integer.cmp(&(truncated as i64)) {
        Ordering::Equal => {
            let fract = float - truncated;
            Some(if fract > 0.0 {
                     Ordering::Less
                 } else if fract < 0.0 {
                     Ordering::Greater
                 } else {
                     Ordering::Equal
                 })
        },
        ordering => Some(ordering),
    }
}
