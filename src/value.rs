/// Indexing, field lookup and the callable protocol.
///
/// Lookups that miss hand out the shared
/// [`UNDEFINED`](crate::value::core::UNDEFINED) sentinel by shared reference;
/// mutable lookups return `Option` instead.
pub mod access;
/// Strict equality, JavaScript loose equality and the total value ordering.
pub mod compare;
/// The compile-time subset of the dynamic value.
///
/// [`ConstValue`](crate::value::constant::ConstValue) holds the scalar kinds
/// without any heap data, so values can be built and combined inside
/// `const fn` and `const`/`static` items. Its operators follow the same
/// dispatch table as [`Value`](crate::value::core::Value) with two
/// restrictions:
///
/// - operations that must allocate a new string (concatenation, repetition)
///   are refused with
///   [`ConstEvalError::StringOperation`](crate::error::ConstEvalError::StringOperation);
/// - `%` with a float operand is refused with
///   [`ConstEvalError::FloatRemainder`](crate::error::ConstEvalError::FloatRemainder):
///   the floating remainder is a run-time operation of this crate. Evaluating
///   it through [`const_unwrap`](crate::value::constant::const_unwrap) in a
///   constant is a compile error.
///
/// ```compile_fail
/// use dynvar::value::constant::{ConstValue, const_unwrap};
///
/// static REMAINDER: ConstValue =
///     const_unwrap(ConstValue::float(10.5).rem(ConstValue::integer(3)));
/// ```
///
/// The integer remainder is fine:
///
/// ```
/// use dynvar::value::constant::{ConstValue, const_unwrap};
///
/// static REMAINDER: ConstValue = const_unwrap(ConstValue::integer(10).rem(ConstValue::integer(3)));
/// assert_eq!(REMAINDER, ConstValue::integer(1));
/// ```
pub mod constant;
/// Conversion of values back into native Rust types.
///
/// The rules mirror a strictly typed boundary:
/// - `bool`: undefined and null are `false`, numbers are `true` when non-zero
///   and not NaN, strings when non-empty; containers and functions fail.
/// - numeric types: null is `0`, booleans are `0`/`1`, numbers convert when
///   they fit the target exactly; undefined, strings, containers and functions
///   fail.
/// - `String`: only a string converts. Numbers do not turn into text
///   implicitly.
pub mod convert;
/// The `Value` enum, its sentinel and its textual rendering.
pub mod core;
/// Construction of values from native Rust data.
///
/// Every integral type normalizes to
/// [`Value::Integer`](crate::value::core::Value::Integer), every float type to
/// [`Value::Float`](crate::value::core::Value::Float) and every string-like
/// type is copied into [`Value::String`](crate::value::core::Value::String).
/// Integral types wider than `i64` convert through `TryFrom` and fail when the
/// number does not fit.
pub mod from;
/// Shared, immutable callables stored in a value.
pub mod function;
/// Best-effort classification of text lines into values.
pub mod input;
/// The kind tag of a value.
pub mod kind;
/// Ordered name/value records.
pub mod object;
