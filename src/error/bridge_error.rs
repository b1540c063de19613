use thiserror::Error;

use crate::{
    descriptor::data_type::DataType,
    error::{DescriptorError, ValueError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors raised while moving a value across the
/// describe/run boundary.
pub enum BridgeError {
    /// The blob carries a type tag this crate does not know.
    #[error("Unknown type tag {tag} in blob.")]
    UnknownTypeTag {
        /// The raw tag byte.
        tag: u8,
    },
    /// The tag is known but cannot be rebuilt into a value.
    #[error("Cannot reconstruct a value of type {data_type} from a blob.")]
    ReconstructionUnsupported {
        /// The tag that was read.
        data_type: DataType,
    },
    /// The payload does not match what its tag requires.
    #[error("Invalid {data_type} payload: {details}.")]
    InvalidPayload {
        /// The tag that was read.
        data_type: DataType,
        /// Details about the mismatch.
        details:   String,
    },
    /// A field required by the blob layout is missing or misplaced.
    #[error("Blob is malformed: {details}.")]
    MalformedBlob {
        /// Details about the layout violation.
        details: String,
    },
    /// A field holds an element of the wrong data type.
    #[error("Field '{field}' holds {found}, expected {expected}.")]
    UnexpectedElement {
        /// Name of the field.
        field:    String,
        /// The expected data type.
        expected: DataType,
        /// The data type that was found instead.
        found:    DataType,
    },
    /// An oversized buffer field is not immediately followed by its size.
    #[error("Buffer field '{field}' must be followed by a size field.")]
    BufferWithoutSize {
        /// Name of the buffer field.
        field: String,
    },
    /// The recorded size of a buffer is larger than the buffer itself.
    #[error("Buffer field '{field}' records {size} bytes but only holds {capacity}.")]
    SizeExceedsCapacity {
        /// Name of the buffer field.
        field:    String,
        /// The recorded size.
        size:     usize,
        /// The capacity of the buffer.
        capacity: usize,
    },
    /// The payload of a value does not fit the configured buffer capacity.
    #[error("Payload of {size} bytes exceeds the buffer capacity of {capacity} bytes.")]
    CapacityExceeded {
        /// Bytes required by the payload.
        size:     usize,
        /// Configured capacity.
        capacity: usize,
    },
    /// `encode` was handed a buffer whose length differs from
    /// `required_size`.
    #[error("Encode buffer holds {found} bytes, but the value requires exactly {expected}.")]
    SizeMismatch {
        /// Bytes required by the value.
        expected: usize,
        /// Bytes offered by the caller.
        found:    usize,
    },
    /// A descriptor operation failed.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    /// A value operation failed.
    #[error(transparent)]
    Value(#[from] ValueError),
}
