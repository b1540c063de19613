use tracing::{debug, trace};

use crate::{
    bridge::{
        core::{Blob, BridgeResult},
        serialize::NUMBER_WIDTH,
    },
    descriptor::{core::ObjectDescriptor, data_type::DataType, element::Element},
    error::BridgeError,
    value::{core::Value, object::Object},
};

/// Rebuilds a value from a blob.
///
/// The tag selects the branch: integers and floats need exactly 8 payload
/// bytes, booleans a single `0` or `1`, strings UTF-8 bytes ending in a `0`
/// terminator, null and undefined an empty payload.
///
/// # Errors
/// Returns [`BridgeError::InvalidPayload`] when the payload does not match its
/// tag, and [`BridgeError::ReconstructionUnsupported`] for arrays, objects,
/// functions and the non-value tags. Nothing is guessed.
///
/// # Example
/// ```
/// use dynvar::{
///     bridge::{deserialize::deserialize, serialize::serialize},
///     value::core::Value,
/// };
///
/// let original = Value::from("mama");
/// let blob = serialize(&original).unwrap();
///
/// assert_eq!(deserialize(&blob).unwrap(), original);
/// ```
pub fn deserialize(blob: &Blob) -> BridgeResult<Value> {
    let data_type = blob.data_type();
    let data = blob.data();

    trace!(%data_type, size = data.len(), "deserializing blob");

    let value = match data_type {
        DataType::Integer => Value::Integer(i64::from_le_bytes(fixed_width(data_type, data)?)),
        DataType::Float => Value::Float(f64::from_le_bytes(fixed_width(data_type, data)?)),
        DataType::Bool => match data {
            [0] => Value::Boolean(false),
            [1] => Value::Boolean(true),
            _ => return Err(invalid(data_type, format!("expected a single 0 or 1 byte, found {data:?}"))),
        },
        DataType::String => {
            let text = data.strip_suffix(&[0u8])
                           .ok_or_else(|| invalid(data_type, "missing terminator".to_string()))?;
            let text = std::str::from_utf8(text).map_err(|e| invalid(data_type, e.to_string()))?;
            Value::from(text)
        },
        DataType::Null | DataType::Undefined if !data.is_empty() => {
            return Err(invalid(data_type, format!("expected no payload, found {} bytes", data.len())));
        },
        DataType::Null => Value::Null,
        DataType::Undefined => Value::Undefined,
        DataType::Array
        | DataType::Object
        | DataType::Function
        | DataType::Native
        | DataType::None => return Err(BridgeError::ReconstructionUnsupported { data_type }),
    };

    debug!(%data_type, kind = %value.kind(), "blob deserialized");
    Ok(value)
}

/// Rebuilds a value from a blob in descriptor form, `{ type, data }`.
///
/// # Errors
/// Fails like [`Blob::from_descriptor`] and [`deserialize`].
pub fn deserialize_descriptor(descriptor: &ObjectDescriptor) -> BridgeResult<Value> {
    deserialize(&Blob::from_descriptor(descriptor)?)
}

/// Rebuilds a value from its flat form, `[tag, payload...]`.
///
/// # Errors
/// Returns [`BridgeError::UnknownTypeTag`] for an unrecognized tag byte, and
/// fails like [`deserialize`] otherwise.
///
/// # Example
/// ```
/// use dynvar::{bridge::deserialize::deserialize_bytes, value::core::Value};
///
/// assert_eq!(deserialize_bytes(&[5, 1]).unwrap(), Value::from(true));
/// assert!(deserialize_bytes(&[200]).is_err());
/// ```
pub fn deserialize_bytes(bytes: &[u8]) -> BridgeResult<Value> {
    deserialize(&Blob::from_bytes(bytes)?)
}

/// Rebuilds an object value from a record whose fields are blobs, as
/// produced by trimming a described record.
///
/// Field names and order are preserved.
///
/// # Errors
/// Returns [`BridgeError::UnexpectedElement`] when a field does not hold a
/// nested descriptor, and fails like [`deserialize_descriptor`] for each
/// member.
///
/// # Example
/// ```
/// use dynvar::{
///     bridge::{deserialize::deserialize_record, describe::Describer, trim::trim},
///     object,
/// };
///
/// let record = object! { "num" => 5, "str" => "mama" };
/// let described = Describer::new().describe_record(&record).unwrap();
///
/// assert_eq!(deserialize_record(&trim(described).unwrap()).unwrap(), record);
/// ```
pub fn deserialize_record(record: &ObjectDescriptor) -> BridgeResult<Value> {
    let mut object = Object::new();

    for field in record.fields() {
        let Element::Object(blob) = field.element() else {
            return Err(BridgeError::UnexpectedElement { field:    field.name().to_owned(),
                                                        expected: DataType::Object,
                                                        found:    field.element().data_type(), });
        };

        trace!(field = field.name(), "deserializing field");
        object.push(field.name(), deserialize_descriptor(blob)?);
    }

    debug!(fields = object.len(), "record deserialized");
    Ok(Value::Object(object))
}

fn fixed_width(data_type: DataType, data: &[u8]) -> BridgeResult<[u8; NUMBER_WIDTH]> {
    data.try_into().map_err(|_| {
                       invalid(data_type,
                               format!("expected {NUMBER_WIDTH} bytes, found {}", data.len()))
                   })
}

fn invalid(data_type: DataType, details: String) -> BridgeError {
    BridgeError::InvalidPayload { data_type, details }
}
