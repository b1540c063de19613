use crate::descriptor::{
    buffer::Buffer,
    core::{ArrayDescriptor, ObjectDescriptor},
    data_type::DataType,
};

/// The payload of a descriptor slot.
///
/// Scalar elements mirror the scalar kinds of a value. Native elements
/// (`Tag`, `Size`, `Buffer`) carry layout metadata and raw bytes. Nested
/// descriptors make the structure recursive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Owned string.
    String(String),
    /// Explicit null.
    Null,
    /// Absence of a value.
    Undefined,
    /// A serialization tag.
    Tag(DataType),
    /// A byte count, recording the meaningful length of the buffer before it.
    Size(usize),
    /// A fixed-capacity byte buffer.
    Buffer(Buffer),
    /// A nested array descriptor.
    Array(ArrayDescriptor),
    /// A nested object descriptor.
    Object(ObjectDescriptor),
}

impl Element {
    /// The serialization tag of this element. Tags, sizes and buffers are all
    /// [`DataType::Native`].
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Integer,
            Self::Float(_) => DataType::Float,
            Self::Bool(_) => DataType::Bool,
            Self::String(_) => DataType::String,
            Self::Null => DataType::Null,
            Self::Undefined => DataType::Undefined,
            Self::Tag(_) | Self::Size(_) | Self::Buffer(_) => DataType::Native,
            Self::Array(_) => DataType::Array,
            Self::Object(_) => DataType::Object,
        }
    }

    /// Short lowercase name of the element variant, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Tag(_) => "tag",
            Self::Size(_) => "size",
            Self::Buffer(_) => "buffer",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// The tag payload, if this is a tag element.
    #[must_use]
    pub const fn as_tag(&self) -> Option<DataType> {
        match self {
            Self::Tag(data_type) => Some(*data_type),
            _ => None,
        }
    }

    /// The size payload, if this is a size element.
    #[must_use]
    pub const fn as_size(&self) -> Option<usize> {
        match self {
            Self::Size(size) => Some(*size),
            _ => None,
        }
    }

    /// The buffer payload, if this is a buffer element.
    #[must_use]
    pub const fn as_buffer(&self) -> Option<&Buffer> {
        match self {
            Self::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// The nested object descriptor, if this is an object element.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectDescriptor> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DataType> for Element {
    fn from(value: DataType) -> Self {
        Self::Tag(value)
    }
}

impl From<Buffer> for Element {
    fn from(value: Buffer) -> Self {
        Self::Buffer(value)
    }
}

impl From<ArrayDescriptor> for Element {
    fn from(value: ArrayDescriptor) -> Self {
        Self::Array(value)
    }
}

impl From<ObjectDescriptor> for Element {
    fn from(value: ObjectDescriptor) -> Self {
        Self::Object(value)
    }
}
