/// Lookup by name and by position.
///
/// Name lookups scan linearly and return the first match; position lookups
/// are bounds-checked against the number of fields or elements.
pub mod accessor;
/// Fixed-capacity byte buffers.
pub mod buffer;
/// Field, array and object descriptors and the append operation.
///
/// Descriptors are built bottom-up and are immutable apart from `append`,
/// which consumes the descriptor and returns the grown one.
pub mod core;
/// Serialization tags.
pub mod data_type;
/// The vocabulary of descriptor payloads.
pub mod element;
