/// Flat blobs built at compile time.
///
/// Every function here is a `const fn` producing the same `[tag, payload...]`
/// layout as [`Blob::to_bytes`](crate::bridge::core::Blob::to_bytes), so a
/// blob can be baked into a `static` byte array and rebuilt at run time with
/// [`deserialize_bytes`](crate::bridge::deserialize::deserialize_bytes).
///
/// Variable-length payloads keep the two-step protocol: ask for the size
/// first, then build an array of exactly that size.
///
/// ```
/// use dynvar::{
///     bridge::{
///         constant::{blob, blob_size, string_blob, string_blob_size},
///         deserialize::deserialize_bytes,
///     },
///     value::{
///         constant::{ConstValue, const_unwrap},
///         core::Value,
///     },
/// };
///
/// const GREETING: &str = "mama";
/// static GREETING_BLOB: [u8; string_blob_size(GREETING)] = string_blob(GREETING);
///
/// const SUM: ConstValue = const_unwrap(ConstValue::integer(2).add(ConstValue::integer(3)));
/// static SUM_BLOB: [u8; blob_size(SUM)] = blob(SUM);
///
/// assert_eq!(deserialize_bytes(&GREETING_BLOB).unwrap(), Value::from("mama"));
/// assert_eq!(deserialize_bytes(&SUM_BLOB).unwrap(), Value::from(5));
/// ```
pub mod constant;
/// The blob type, its two layouts and the bridge result alias.
///
/// A blob is a `{ type, data }` object descriptor, or `[tag, payload...]` as
/// flat bytes. The field order is fixed.
pub mod core;
/// The describe phase.
///
/// Produces oversized `{ type, data, len }` descriptors of values and records
/// of such descriptors for object values.
pub mod describe;
/// Reconstruction of values from blobs.
///
/// Unknown tags and payloads that do not match their tag are hard errors.
/// Arrays, objects and functions cannot be rebuilt from a blob.
pub mod deserialize;
/// The size query, the fixed-size encode and one-step serialization.
pub mod serialize;
/// Replacement of oversized buffers by tight copies.
pub mod trim;
