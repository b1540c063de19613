use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while building or reading a
/// descriptor.
pub enum DescriptorError {
    /// Tried to append a node to a descriptor of the wrong kind, such as a
    /// field to an array or an untagged value to an object.
    #[error("Cannot append a {node} to a {descriptor} descriptor.")]
    AppendMismatch {
        /// Kind of the receiving descriptor.
        descriptor: &'static str,
        /// Kind of the node that was appended.
        node:       &'static str,
    },
    /// No field with the requested name exists.
    #[error("Descriptor has no field named '{name}'.")]
    UnknownField {
        /// The requested field name.
        name: String,
    },
    /// Tried to access a field or element outside the descriptor.
    #[error("Index out of bounds. Descriptor holds {len} entries, but found index {found}.")]
    IndexOutOfBounds {
        /// Number of entries in the descriptor.
        len:   usize,
        /// The index that was actually requested.
        found: usize,
    },
}
