use crate::{
    error::ValueError,
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
    value::{
        core::{UNDEFINED, Value, ValueResult},
        object::Object,
    },
};

impl Value {
    /// Looks up a field of an object by name.
    ///
    /// Returns the first field whose name matches, or the shared
    /// [`UNDEFINED`] sentinel on a miss.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// object.
    ///
    /// # Example
    /// ```
    /// use dynvar::{object, value::core::Value};
    ///
    /// let obj = object! { "name" => "Max", "age" => 23 };
    ///
    /// assert_eq!(obj.get("age").unwrap(), &Value::Integer(23));
    /// assert!(obj.get("missing").unwrap().is_undefined());
    /// assert!(Value::from(1).get("age").is_err());
    /// ```
    pub fn get(&self, name: &str) -> ValueResult<&Self> {
        match self {
            Self::Object(object) => Ok(object.get(name).unwrap_or(&UNDEFINED)),
            _ => Err(ValueError::operation("field lookup", self.kind())),
        }
    }

    /// Mutable field lookup. A miss yields `None`; there is no writable
    /// sentinel.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// object.
    pub fn get_mut(&mut self, name: &str) -> ValueResult<Option<&mut Self>> {
        match self {
            Self::Object(object) => Ok(object.get_mut(name)),
            _ => Err(ValueError::operation("field lookup", self.kind())),
        }
    }

    /// Returns the array element at `index`, or the shared [`UNDEFINED`]
    /// sentinel when the index is past the end.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// array.
    ///
    /// # Example
    /// ```
    /// use dynvar::{array, value::core::Value};
    ///
    /// let arr = array![1, "two", 3.0];
    ///
    /// assert_eq!(arr.index(1).unwrap(), &Value::from("two"));
    /// assert!(arr.index(10).unwrap().is_undefined());
    /// ```
    pub fn index(&self, index: usize) -> ValueResult<&Self> {
        match self {
            Self::Array(items) => Ok(items.get(index).unwrap_or(&UNDEFINED)),
            _ => Err(ValueError::operation("index", self.kind())),
        }
    }

    /// Mutable counterpart of [`Value::index`]; out-of-range yields `None`.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// array.
    pub fn index_mut(&mut self, index: usize) -> ValueResult<Option<&mut Self>> {
        match self {
            Self::Array(items) => Ok(items.get_mut(index)),
            _ => Err(ValueError::operation("index", self.kind())),
        }
    }

    /// Array access that resolves negative positions from the end: `at(-1)` is
    /// the last element. Anything outside `-len..len` yields [`UNDEFINED`].
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// array.
    ///
    /// # Example
    /// ```
    /// use dynvar::array;
    ///
    /// let arr = array![1, 2, 3];
    ///
    /// assert_eq!(arr.at(-1).unwrap(), arr.index(2).unwrap());
    /// assert!(arr.at(-4).unwrap().is_undefined());
    /// ```
    pub fn at(&self, position: i64) -> ValueResult<&Self> {
        match self {
            Self::Array(items) => {
                Ok(resolve_position(items.len(), position).and_then(|index| items.get(index))
                                                          .unwrap_or(&UNDEFINED))
            },
            _ => Err(ValueError::operation("at", self.kind())),
        }
    }

    /// Mutable counterpart of [`Value::at`]; out-of-range yields `None`.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// array.
    pub fn at_mut(&mut self, position: i64) -> ValueResult<Option<&mut Self>> {
        match self {
            Self::Array(items) => {
                Ok(resolve_position(items.len(), position).and_then(|index| items.get_mut(index)))
            },
            _ => Err(ValueError::operation("at", self.kind())),
        }
    }

    /// Appends an element to an array.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// array.
    pub fn push(&mut self, value: impl Into<Self>) -> ValueResult<()> {
        match self {
            Self::Array(items) => {
                items.push(value.into());
                Ok(())
            },
            _ => Err(ValueError::operation("push", self.kind())),
        }
    }

    /// Number of elements of an array, or of characters of a string, as an
    /// integer value.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] for every other kind.
    ///
    /// # Example
    /// ```
    /// use dynvar::{array, value::core::Value};
    ///
    /// assert_eq!(array![1, "two", 3.0].length().unwrap(), Value::Integer(3));
    /// assert_eq!(Value::from("mama").length().unwrap(), Value::Integer(4));
    /// ```
    pub fn length(&self) -> ValueResult<Self> {
        let len = match self {
            Self::Array(items) => items.len(),
            Self::String(s) => s.chars().count(),
            _ => return Err(ValueError::operation("length", self.kind())),
        };
        Ok(Self::Integer(usize_to_i64_checked(len)?))
    }

    /// Names of an object's fields, in order, as an array of strings.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedOperation`] if the value is not an
    /// object.
    ///
    /// # Example
    /// ```
    /// use dynvar::{array, object};
    ///
    /// let obj = object! { "name" => "Max", "age" => 23 };
    /// assert_eq!(obj.keys().unwrap(), array!["name", "age"]);
    /// ```
    pub fn keys(&self) -> ValueResult<Self> {
        match self {
            Self::Object(object) => Ok(object.names().map(Self::from).collect()),
            _ => Err(ValueError::operation("keys", self.kind())),
        }
    }

    /// Invokes the value with an argument record.
    ///
    /// # Errors
    /// Returns [`ValueError::NotCallable`] unless the value holds a function,
    /// and propagates any error raised by the function itself.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::{core::Value, function::Function, object::Object};
    ///
    /// let zero = Value::from(Function::new(|_| Ok(Value::from(0))));
    ///
    /// assert_eq!(zero.call(&Object::new()).unwrap(), Value::Integer(0));
    /// assert!(Value::from(1).call(&Object::new()).is_err());
    /// ```
    pub fn call(&self, args: &Object) -> ValueResult<Self> {
        match self {
            Self::Function(function) => function.call(args),
            _ => Err(ValueError::NotCallable { kind: self.kind() }),
        }
    }
}

/// Turns a possibly negative position into an index, or `None` when it falls
/// before the start.
fn resolve_position(len: usize, position: i64) -> Option<usize> {
    if position >= 0 {
        return i64_to_usize_checked(position).ok();
    }
    let from_end = usize::try_from(position.unsigned_abs()).ok()?;
    len.checked_sub(from_end)
}
