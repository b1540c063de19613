use crate::value::core::Value;

/// An ordered list of name/value pairs.
///
/// Names are not required to be unique: lookups scan in insertion order and
/// the first match wins. The record owns its values outright.
///
/// # Example
/// ```
/// use dynvar::value::{core::Value, object::Object};
///
/// let mut record = Object::new();
/// record.push("a", 1);
/// record.push("a", 2);
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("a"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field after all existing ones.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns the value of the first field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value of the first field called
    /// `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.iter_mut().find(|(field, _)| field == name).map(|(_, value)| value)
    }

    /// Replaces the value of the first field called `name`, or appends a new
    /// field when there is none. Returns the previous value, if any.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        if let Some(slot) = self.get_mut(name) {
            return Some(std::mem::replace(slot, value));
        }
        self.fields.push((name.to_string(), value));
        None
    }

    /// Number of fields, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over the field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl<N, V> FromIterator<(N, V)> for Object
    where N: Into<String>,
          V: Into<Value>
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter()
                           .map(|(name, value)| (name.into(), value.into()))
                           .collect(), }
    }
}

impl<N, V, const LEN: usize> From<[(N, V); LEN]> for Object
    where N: Into<String>,
          V: Into<Value>
{
    fn from(fields: [(N, V); LEN]) -> Self {
        fields.into_iter().collect()
    }
}

impl IntoIterator for Object {
    type IntoIter = std::vec::IntoIter<(String, Value)>;
    type Item = (String, Value);

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
