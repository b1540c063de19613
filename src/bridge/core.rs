use crate::{
    descriptor::{
        buffer::Buffer,
        core::{Field, ObjectDescriptor},
        data_type::DataType,
        element::Element,
    },
    error::BridgeError,
};

/// Result type used by the describe/run bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Name of the field holding the serialization tag.
pub const TYPE_FIELD: &str = "type";
/// Name of the field holding the payload bytes.
pub const DATA_FIELD: &str = "data";
/// Name of the field recording how many payload bytes are meaningful.
pub const LEN_FIELD: &str = "len";

/// A serialized scalar: a type tag and a tightly sized payload.
///
/// As a descriptor a blob is an object with exactly two fields, `type` then
/// `data`, in that order. As flat bytes it is the tag byte followed by the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data_type: DataType,
    data:      Buffer,
}

impl Blob {
    /// Creates a blob from a tag and an already encoded payload.
    #[must_use]
    pub const fn new(data_type: DataType, data: Buffer) -> Self {
        Self { data_type, data }
    }

    /// The serialization tag.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Flattens the blob into `[tag, payload...]`.
    ///
    /// # Example
    /// ```
    /// use dynvar::{bridge::serialize::serialize, value::core::Value};
    ///
    /// let blob = serialize(&Value::from(true)).unwrap();
    /// assert_eq!(blob.to_bytes(), vec![5, 1]);
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.data.capacity());
        bytes.push(self.data_type.tag());
        bytes.extend_from_slice(self.data());
        bytes
    }

    /// Reads a blob from its flat form.
    ///
    /// # Errors
    /// Returns [`BridgeError::MalformedBlob`] for an empty slice and
    /// [`BridgeError::UnknownTypeTag`] when the first byte names no data
    /// type.
    pub fn from_bytes(bytes: &[u8]) -> BridgeResult<Self> {
        let (&tag, payload) = bytes.split_first()
                                   .ok_or_else(|| BridgeError::MalformedBlob { details: "missing type tag".to_string() })?;
        let data_type = DataType::from_tag(tag).ok_or(BridgeError::UnknownTypeTag { tag })?;

        Ok(Self::new(data_type, Buffer::from(payload)))
    }

    /// Converts the blob into its descriptor form, `{ type, data }`.
    #[must_use]
    pub fn into_descriptor(self) -> ObjectDescriptor {
        ObjectDescriptor::new().with(TYPE_FIELD, self.data_type)
                               .with(DATA_FIELD, self.data)
    }

    /// Reads a blob from its descriptor form.
    ///
    /// The descriptor must hold exactly two fields, `type` (a tag) and `data`
    /// (a buffer), in that order.
    ///
    /// # Errors
    /// Returns [`BridgeError::MalformedBlob`] when fields are missing, extra,
    /// out of order or hold the wrong kind of element.
    pub fn from_descriptor(descriptor: &ObjectDescriptor) -> BridgeResult<Self> {
        if descriptor.len() != 2 {
            return Err(BridgeError::MalformedBlob { details: format!("expected 2 fields, found {}",
                                                                     descriptor.len()) });
        }

        let type_field = expect_name(descriptor.field_at(0)?, TYPE_FIELD)?;
        let data_field = expect_name(descriptor.field_at(1)?, DATA_FIELD)?;

        let data_type = type_field.element()
                                  .as_tag()
                                  .ok_or_else(|| unexpected(type_field, "tag"))?;
        let data = data_field.element()
                             .as_buffer()
                             .ok_or_else(|| unexpected(data_field, "buffer"))?;

        Ok(Self::new(data_type, data.clone()))
    }
}

impl From<Blob> for ObjectDescriptor {
    fn from(blob: Blob) -> Self {
        blob.into_descriptor()
    }
}

impl TryFrom<&ObjectDescriptor> for Blob {
    type Error = BridgeError;

    fn try_from(descriptor: &ObjectDescriptor) -> BridgeResult<Self> {
        Self::from_descriptor(descriptor)
    }
}

impl From<Blob> for Element {
    fn from(blob: Blob) -> Self {
        Self::Object(blob.into_descriptor())
    }
}

fn expect_name<'a>(field: &'a Field, name: &str) -> BridgeResult<&'a Field> {
    if field.name() == name {
        Ok(field)
    } else {
        Err(BridgeError::MalformedBlob { details: format!("expected field '{name}', found '{}'",
                                                          field.name()) })
    }
}

fn unexpected(field: &Field, expected: &str) -> BridgeError {
    BridgeError::MalformedBlob { details: format!("field '{}' holds a {}, expected a {expected}",
                                                  field.name(),
                                                  field.element().name()) }
}
