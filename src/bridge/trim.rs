use tracing::{debug, trace};

use crate::{
    bridge::core::BridgeResult,
    descriptor::{
        core::{ArrayDescriptor, Field, ObjectDescriptor},
        element::Element,
    },
    error::BridgeError,
};

/// Replaces every oversized buffer of an object descriptor with a tightly
/// sized copy.
///
/// Each buffer field must be immediately followed by a size field recording
/// how many of its bytes are meaningful. Only that many bytes are kept and the
/// size field is dropped; all other fields pass through in order. Nested
/// object and array descriptors are trimmed recursively, so a described record
/// becomes a record of blobs. Inside an array a buffer entry must be followed
/// by a size entry, and errors name the entry by its index, as in `[2]`.
///
/// # Errors
/// Returns [`BridgeError::BufferWithoutSize`] when a buffer is not followed by
/// a size field, and [`BridgeError::SizeExceedsCapacity`] when the recorded
/// size is larger than the buffer.
///
/// # Example
/// ```
/// use dynvar::{
///     bridge::{core::Blob, describe::Describer, trim::trim},
///     value::core::Value,
/// };
///
/// let description = Describer::new().describe(&Value::from(5)).unwrap();
/// let blob = Blob::from_descriptor(&trim(description).unwrap()).unwrap();
///
/// assert_eq!(blob.data(), &5i64.to_le_bytes());
/// ```
pub fn trim(descriptor: ObjectDescriptor) -> BridgeResult<ObjectDescriptor> {
    let mut fields = descriptor.into_fields().into_iter();
    let mut trimmed = Vec::new();

    while let Some(field) = fields.next() {
        let (name, element) = field.into_parts();
        let element = trim_element(&name, element, || fields.next().and_then(|next| next.element().as_size()))?;
        trimmed.push(Field::new(name, element));
    }

    debug!(fields = trimmed.len(), "descriptor trimmed");
    Ok(trimmed.into_iter().collect())
}

/// Array entries follow the object rules, with entry `[i]` named by index.
fn trim_array(array: ArrayDescriptor) -> BridgeResult<ArrayDescriptor> {
    let mut entries = array.elements.into_iter().enumerate();
    let mut trimmed = Vec::new();

    while let Some((index, element)) = entries.next() {
        let name = format!("[{index}]");
        trimmed.push(trim_element(&name, element, || entries.next().and_then(|(_, next)| next.as_size()))?);
    }

    Ok(trimmed.into_iter().collect())
}

fn trim_element(name: &str,
                element: Element,
                next_size: impl FnOnce() -> Option<usize>)
                -> BridgeResult<Element> {
    match element {
        Element::Buffer(buffer) => {
            let size = next_size().ok_or_else(|| BridgeError::BufferWithoutSize { field: name.to_string() })?;

            trace!(field = %name, size, capacity = buffer.capacity(), "trimming buffer");

            let tight = buffer.trimmed(size)
                              .ok_or_else(|| BridgeError::SizeExceedsCapacity { field:    name.to_string(),
                                                                                size,
                                                                                capacity: buffer.capacity(), })?;
            Ok(Element::Buffer(tight))
        },
        Element::Object(nested) => {
            trace!(field = %name, "trimming nested object");
            Ok(Element::Object(trim(nested)?))
        },
        Element::Array(nested) => {
            trace!(field = %name, "trimming nested array");
            Ok(Element::Array(trim_array(nested)?))
        },
        other => Ok(other),
    }
}
