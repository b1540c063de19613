use tracing::{debug, trace};

use crate::{
    bridge::core::{Blob, BridgeResult},
    descriptor::{buffer::Buffer, data_type::DataType},
    error::BridgeError,
    value::core::Value,
};

/// Width of an encoded integer or float.
pub const NUMBER_WIDTH: usize = 8;

impl Value {
    /// Exact number of payload bytes [`Value::encode`] writes for the value's
    /// current contents.
    ///
    /// Integers and floats take 8 bytes, booleans 1, strings their UTF-8
    /// length plus a terminator. Every other kind serializes as a bare tag
    /// and takes 0.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert_eq!(Value::from(5).required_size(), 8);
    /// assert_eq!(Value::from("mama").required_size(), 5);
    /// assert_eq!(Value::Null.required_size(), 0);
    /// ```
    #[must_use]
    pub fn required_size(&self) -> usize {
        match self {
            Self::Integer(_) | Self::Float(_) => NUMBER_WIDTH,
            Self::Boolean(_) => 1,
            Self::String(s) => s.len() + 1,
            Self::Undefined | Self::Null | Self::Array(_) | Self::Object(_) | Self::Function(_) => 0,
        }
    }

    /// Writes the payload into `buffer`, which must be exactly
    /// [`Value::required_size`] bytes long.
    ///
    /// Numbers are little-endian bit patterns, booleans a single `0`/`1`
    /// byte, strings their UTF-8 bytes followed by a `0` terminator.
    ///
    /// # Errors
    /// Returns [`BridgeError::SizeMismatch`] when the buffer length differs
    /// from the required size.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// let value = Value::from("hi");
    /// let mut buffer = vec![0; value.required_size()];
    ///
    /// value.encode(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"hi\0");
    /// assert!(value.encode(&mut [0; 8]).is_err());
    /// ```
    pub fn encode(&self, buffer: &mut [u8]) -> BridgeResult<()> {
        let expected = self.required_size();
        if buffer.len() != expected {
            return Err(BridgeError::SizeMismatch { expected,
                                                   found: buffer.len() });
        }

        match self {
            Self::Integer(i) => buffer.copy_from_slice(&i.to_le_bytes()),
            Self::Float(f) => buffer.copy_from_slice(&f.to_le_bytes()),
            Self::Boolean(b) => buffer[0] = u8::from(*b),
            Self::String(s) => {
                let (text, terminator) = buffer.split_at_mut(s.len());
                text.copy_from_slice(s.as_bytes());
                terminator[0] = 0;
            },
            Self::Undefined | Self::Null | Self::Array(_) | Self::Object(_) | Self::Function(_) => {},
        }

        Ok(())
    }
}

/// Serializes a value into a blob in one step: queries the size, allocates a
/// buffer of exactly that size and encodes into it.
///
/// Arrays, objects and functions produce their tag with an empty payload.
///
/// # Errors
/// Only fails if encoding fails, which the size query rules out.
///
/// # Example
/// ```
/// use dynvar::{
///     bridge::{deserialize::deserialize, serialize::serialize},
///     descriptor::data_type::DataType,
///     value::core::Value,
/// };
///
/// let blob = serialize(&Value::from(10.5)).unwrap();
///
/// assert_eq!(blob.data_type(), DataType::Float);
/// assert_eq!(blob.data(), &10.5f64.to_le_bytes());
/// assert_eq!(deserialize(&blob).unwrap(), Value::from(10.5));
/// ```
pub fn serialize(value: &Value) -> BridgeResult<Blob> {
    let data_type = DataType::of(value.kind());
    let mut buffer = Buffer::zeroed(value.required_size());
    value.encode(buffer.as_bytes_mut())?;

    debug!(%data_type, size = buffer.capacity(), "value serialized");
    trace!(payload = ?buffer.as_bytes(), "serialized payload");

    Ok(Blob::new(data_type, buffer))
}
