use std::borrow::Cow;

use crate::{
    error::ValueError,
    value::{core::Value, function::Function, object::Object},
};

/// Marker converting into [`Value::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undefined;

/// Marker converting into [`Value::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

impl From<Undefined> for Value {
    fn from(_: Undefined) -> Self {
        Self::Undefined
    }
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

macro_rules! from_lossless_integer {
    ($($native:ty),*) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Self::Integer(i64::from(v))
                }
            }
        )*
    };
}

from_lossless_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! try_from_wide_integer {
    ($($native:ty),*) => {
        $(
            impl TryFrom<$native> for Value {
                type Error = ValueError;

                fn try_from(v: $native) -> Result<Self, Self::Error> {
                    i64::try_from(v).map(Self::Integer)
                                    .map_err(|_| ValueError::OutOfRange { value:  v.to_string(),
                                                                          target: "i64", })
                }
            }
        )*
    };
}

try_from_wide_integer!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Self::String(v.into_owned())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Null`].
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

/// Builds a [`Value::Array`] from a list of expressions convertible into
/// values.
///
/// # Example
/// ```
/// use dynvar::{array, value::core::Value};
///
/// let arr = array![1, "two", 3.0];
/// assert_eq!(arr.length().unwrap(), Value::Integer(3));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::core::Value::Array(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::value::core::Value::Array(::std::vec![$($crate::value::core::Value::from($item)),+])
    };
}

/// Builds a [`Value::Object`] from `name => value` pairs, keeping their order.
///
/// # Example
/// ```
/// use dynvar::{object, value::core::Value};
///
/// let obj = object! { "name" => "Max", "age" => 23 };
/// assert_eq!(obj.get("age").unwrap(), &Value::Integer(23));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::core::Value::Object($crate::value::object::Object::new())
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::value::object::Object::new();
        $(record.push($name, $crate::value::core::Value::from($value));)+
        $crate::value::core::Value::Object(record)
    }};
}
