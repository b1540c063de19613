use tracing::{debug, trace};

use crate::{
    bridge::core::{BridgeResult, DATA_FIELD, LEN_FIELD, TYPE_FIELD},
    descriptor::{buffer::Buffer, core::ObjectDescriptor, data_type::DataType, element::Element},
    error::BridgeError,
    value::core::Value,
};

/// Default capacity of the oversized buffer produced by [`Describer`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Builds oversized descriptors of values.
///
/// A description is the shape a value has before its final size is fixed:
///
/// ```text
/// { type: Tag, data: Buffer(capacity), len: Size }
/// ```
///
/// The buffer is allocated generously, the payload is written at its start
/// and `len` records how many bytes are meaningful.
/// [`trim`](crate::bridge::trim::trim) later turns this into a tight blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Describer {
    capacity: usize,
}

impl Default for Describer {
    fn default() -> Self {
        Self::new()
    }
}

impl Describer {
    /// A describer with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A describer whose buffers hold `capacity` bytes.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The configured buffer capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Describes a single value.
    ///
    /// # Errors
    /// Returns [`BridgeError::CapacityExceeded`] if the payload is larger than
    /// the configured capacity.
    ///
    /// # Example
    /// ```
    /// use dynvar::{
    ///     bridge::describe::Describer,
    ///     descriptor::{data_type::DataType, element::Element},
    ///     value::core::Value,
    /// };
    ///
    /// let description = Describer::new().describe(&Value::from("mama")).unwrap();
    ///
    /// assert_eq!(description.get("type").unwrap(), &Element::Tag(DataType::String));
    /// assert_eq!(description.get("len").unwrap(), &Element::Size(5));
    /// assert_eq!(description.get("data").unwrap().as_buffer().unwrap().capacity(), 1024);
    ///
    /// assert!(Describer::with_capacity(4).describe(&Value::from("mama")).is_err());
    /// ```
    pub fn describe(&self, value: &Value) -> BridgeResult<ObjectDescriptor> {
        let data_type = DataType::of(value.kind());
        let size = value.required_size();
        if size > self.capacity {
            return Err(BridgeError::CapacityExceeded { size,
                                                       capacity: self.capacity });
        }

        let mut buffer = Buffer::zeroed(self.capacity);
        value.encode(&mut buffer.as_bytes_mut()[..size])?;

        debug!(%data_type, size, capacity = self.capacity, "value described");

        Ok(ObjectDescriptor::new().with(TYPE_FIELD, data_type)
                                  .with(DATA_FIELD, buffer)
                                  .with(LEN_FIELD, Element::Size(size)))
    }

    /// Describes every member of an object value, producing a record whose
    /// fields are the members' descriptions in order.
    ///
    /// # Errors
    /// Returns a conversion error if `value` is not an object, and
    /// [`BridgeError::CapacityExceeded`] if any member does not fit.
    ///
    /// # Example
    /// ```
    /// use dynvar::{bridge::describe::Describer, object};
    ///
    /// let record = Describer::new().describe_record(&object! { "num" => 5, "str" => "mama" }).unwrap();
    ///
    /// assert_eq!(record.len(), 2);
    /// assert_eq!(record.field_at(1).unwrap().name(), "str");
    /// ```
    pub fn describe_record(&self, value: &Value) -> BridgeResult<ObjectDescriptor> {
        let object = value.as_object()?;
        let mut record = ObjectDescriptor::new();

        for (name, member) in object.iter() {
            trace!(field = %name, kind = %member.kind(), "describing field");
            record = record.with(name.to_owned(), self.describe(member)?);
        }

        debug!(fields = record.len(), "record described");
        Ok(record)
    }
}
