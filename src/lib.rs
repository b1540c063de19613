//! # dynvar
//!
//! dynvar is a dynamically typed value for Rust with JavaScript-like
//! arithmetic, comparison and coercion, plus a bridge that turns values into
//! flat blobs and back.
//!
//! ```
//! use dynvar::{array, object, value::core::Value};
//!
//! let x = Value::from(5);
//! assert_eq!((&x + &Value::from("3")).unwrap(), Value::from("53"));
//!
//! let arr = array![1, "two", 3.0];
//! assert_eq!(arr.length().unwrap(), Value::from(3));
//! assert_eq!(arr.index(1).unwrap(), &Value::from("two"));
//!
//! let obj = object! { "name" => "Max", "age" => 23 };
//! assert_eq!(obj.get("age").unwrap(), &Value::from(23));
//! assert!(obj.get("missing").unwrap().is_undefined());
//! ```
//!
//! Values cross the describe/run boundary as blobs:
//!
//! ```
//! use dynvar::{
//!     bridge::{deserialize::deserialize_record, describe::Describer, trim::trim},
//!     object,
//! };
//!
//! let record = object! { "num" => 5, "str" => "mama" };
//!
//! let described = Describer::new().describe_record(&record).unwrap();
//! let blobs = trim(described).unwrap();
//!
//! assert_eq!(deserialize_record(&blobs).unwrap(), record);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Moves values across the describe/run boundary.
///
/// A value is first described into an oversized descriptor, then trimmed into
/// a tight blob, and finally reconstructed from that blob. The size query and
/// the fixed-size encode are separate calls, so the payload size is always
/// known before its buffer exists.
///
/// # Responsibilities
/// - Reports payload sizes and encodes scalars into exactly sized buffers.
/// - Builds and trims `{ type, data, len }` descriptors.
/// - Rebuilds values from blobs, failing on anything it cannot rebuild.
/// - Produces the same flat blobs in `const fn` form.
pub mod bridge;
/// Structural descriptors of data layouts.
///
/// Descriptors are ordered, immutable records made of fields, arrays and
/// objects over a fixed vocabulary of elements. They only live long enough to
/// drive the bridge.
///
/// # Responsibilities
/// - Defines the element vocabulary and its serialization tags.
/// - Builds field, array and object descriptors, appending only where the
///   kinds match.
/// - Looks up entries by name or by bounds-checked position.
pub mod descriptor;
/// Provides unified error types for values, descriptors and the bridge.
///
/// Every fallible operation returns one of these errors; none of them is
/// swallowed or replaced by a NaN or undefined result.
///
/// # Responsibilities
/// - Defines the type and domain error families of value operations.
/// - Defines descriptor build and lookup errors.
/// - Defines serialization and reconstruction errors.
pub mod error;
/// Arithmetic operators on dynamic values.
///
/// Each operator is a total function over the pairing of operand kinds:
/// every pairing either has a rule or yields a type error.
pub mod operator;
/// General helpers for numeric conversion, parsing and formatting.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data
///   loss.
/// - Recognize integers and floats in text on a best-effort basis.
/// - Render floats the way JavaScript does.
pub mod util;
/// The dynamic value type.
///
/// # Responsibilities
/// - Defines `Value`, its kinds and its construction from native types.
/// - Converts values back into native types with defined failures.
/// - Provides lookup, indexing, calls, comparison and text input/output.
pub mod value;
