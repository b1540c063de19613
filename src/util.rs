/// Number formatting helpers.
///
/// Renders floats the way the dynamic value prints them, so that string
/// concatenation and `Display` agree on the textual form of a number.
pub mod format;
/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// All fallible functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or a [`ValueError`](crate::error::ValueError) if the
/// value is out of range or not an integer.
pub mod num;
/// Best-effort numeric recognition in text.
///
/// Used by loose equality (string against number) and by the line classifier.
pub mod parse;
