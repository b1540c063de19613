use crate::{
    bridge::serialize::NUMBER_WIDTH,
    descriptor::data_type::DataType,
    value::constant::ConstValue,
};

/// Length of a flat integer or float blob.
pub const NUMBER_BLOB_SIZE: usize = 1 + NUMBER_WIDTH;
/// Length of a flat boolean blob.
pub const BOOL_BLOB_SIZE: usize = 2;

/// Copies `payload` behind the tag into `out`.
const fn write_tagged<const N: usize>(data_type: DataType, payload: &[u8]) -> [u8; N] {
    assert!(N == 1 + payload.len(), "blob length does not match its payload");

    let mut out = [0; N];
    out[0] = data_type.tag();

    let mut i = 0;
    while i < payload.len() {
        out[i + 1] = payload[i];
        i += 1;
    }

    out
}

/// Flat blob of an integer.
#[must_use]
pub const fn integer_blob(value: i64) -> [u8; NUMBER_BLOB_SIZE] {
    write_tagged(DataType::Integer, &value.to_le_bytes())
}

/// Flat blob of a float.
#[must_use]
pub const fn float_blob(value: f64) -> [u8; NUMBER_BLOB_SIZE] {
    write_tagged(DataType::Float, &value.to_le_bytes())
}

/// Flat blob of a boolean.
#[must_use]
pub const fn bool_blob(value: bool) -> [u8; BOOL_BLOB_SIZE] {
    [DataType::Bool.tag(), value as u8]
}

/// Length of the flat blob of `text`: tag, bytes and terminator.
#[must_use]
pub const fn string_blob_size(text: &str) -> usize {
    text.len() + 2
}

/// Flat blob of a string. `N` must equal [`string_blob_size`] of `text`.
///
/// # Panics
/// Panics (a compile error in constant context) when `N` is wrong.
#[must_use]
pub const fn string_blob<const N: usize>(text: &str) -> [u8; N] {
    assert!(N == string_blob_size(text), "string blob length must be string_blob_size(text)");

    let bytes = text.as_bytes();
    let mut out = [0; N];
    out[0] = DataType::String.tag();

    let mut i = 0;
    while i < bytes.len() {
        out[i + 1] = bytes[i];
        i += 1;
    }

    out
}

/// Length of the flat blob of any compile-time value.
#[must_use]
pub const fn blob_size(value: ConstValue) -> usize {
    match value {
        ConstValue::Undefined | ConstValue::Null => 1,
        ConstValue::Integer(_) | ConstValue::Float(_) => NUMBER_BLOB_SIZE,
        ConstValue::Boolean(_) => BOOL_BLOB_SIZE,
        ConstValue::Str(text) => string_blob_size(text),
    }
}

/// Flat blob of any compile-time value. `N` must equal [`blob_size`] of
/// `value`.
///
/// # Panics
/// Panics (a compile error in constant context) when `N` is wrong.
#[must_use]
pub const fn blob<const N: usize>(value: ConstValue) -> [u8; N] {
    match value {
        ConstValue::Undefined => write_tagged(DataType::Undefined, &[]),
        ConstValue::Null => write_tagged(DataType::Null, &[]),
        ConstValue::Integer(i) => write_tagged(DataType::Integer, &i.to_le_bytes()),
        ConstValue::Float(f) => write_tagged(DataType::Float, &f.to_le_bytes()),
        ConstValue::Boolean(b) => write_tagged(DataType::Bool, &[b as u8]),
        ConstValue::Str(text) => string_blob(text),
    }
}
