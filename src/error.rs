/// Bridge errors.
///
/// Defines all error types that can occur while describing, trimming,
/// serializing or deserializing a value. Deserialization errors are fatal to
/// the reconstruction attempt: an unknown tag never falls back to a guessed
/// kind.
pub mod bridge_error;
/// Compile-time evaluation errors.
///
/// A `Copy`, allocation free error type for the `const fn` subset of the
/// value operators.
pub mod const_eval_error;
/// Descriptor errors.
///
/// Raised while building a descriptor (appending to the wrong kind) or while
/// reading one (unknown field names, out-of-range positions).
pub mod descriptor_error;
/// Value errors.
///
/// Contains all error types that can be raised by operators, conversions,
/// indexing and calls on a dynamic value. Type errors signal pairings of kinds
/// without a rule; domain errors signal well-typed but invalid arguments.
pub mod value_error;

pub use bridge_error::BridgeError;
pub use const_eval_error::ConstEvalError;
pub use descriptor_error::DescriptorError;
pub use value_error::ValueError;
