use crate::{
    error::ValueError,
    util::num::f64_to_i64_checked,
    value::core::Value,
};

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Undefined | Value::Null => Ok(false),
            Value::Integer(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0 && !f.is_nan()),
            Value::Boolean(b) => Ok(*b),
            Value::String(s) => Ok(!s.is_empty()),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => {
                Err(ValueError::Conversion { from:   value.kind(),
                                             target: "bool", })
            },
        }
    }
}

/// Reads any numeric-like value as an `i64`, the common ground for every
/// integer target.
fn integer_of(value: &Value, target: &'static str) -> Result<i64, ValueError> {
    match value {
        Value::Null => Ok(0),
        Value::Integer(i) => Ok(*i),
        Value::Boolean(b) => Ok(i64::from(*b)),
        Value::Float(f) => f64_to_i64_checked(*f),
        Value::Undefined
        | Value::String(_)
        | Value::Array(_)
        | Value::Object(_)
        | Value::Function(_) => Err(ValueError::Conversion { from: value.kind(),
                                                             target }),
    }
}

macro_rules! try_into_integer {
    ($($native:ty),*) => {
        $(
            impl TryFrom<&Value> for $native {
                type Error = ValueError;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    let target = stringify!($native);
                    let integer = integer_of(value, target)?;
                    <$native>::try_from(integer).map_err(|_| ValueError::OutOfRange { value: integer.to_string(),
                                                                                      target })
                }
            }
        )*
    };
}

try_into_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(0.0),
            Value::Integer(i) => Ok(*i as Self),
            Value::Float(f) => Ok(*f),
            Value::Boolean(b) => Ok(Self::from(u8::from(*b))),
            Value::Undefined
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Function(_) => Err(ValueError::Conversion { from:   value.kind(),
                                                                 target: "f64", }),
        }
    }
}

impl TryFrom<&Value> for f32 {
    type Error = ValueError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|f| f as Self)
                            .map_err(|_| ValueError::Conversion { from:   value.kind(),
                                                                  target: "f32", })
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ValueError::Conversion { from:   value.kind(),
                                              target: "String", }),
        }
    }
}

macro_rules! try_from_owned {
    ($($native:ty),*) => {
        $(
            impl TryFrom<Value> for $native {
                type Error = ValueError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    <Self as TryFrom<&Value>>::try_from(&value)
                }
            }
        )*
    };
}

try_from_owned!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl TryFrom<Value> for String {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ValueError::Conversion { from:   other.kind(),
                                                  target: "String", }),
        }
    }
}

impl Value {
    /// Converts the value into any supported native type.
    ///
    /// # Errors
    /// Returns the conversion error described in the module documentation.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert_eq!(Value::from(10).to::<i32>().unwrap(), 10);
    /// assert_eq!(Value::Null.to::<f64>().unwrap(), 0.0);
    /// assert!(!Value::Null.to::<bool>().unwrap());
    /// assert!(Value::from("5").to::<i64>().is_err());
    /// assert!(Value::from(5).to::<String>().is_err());
    /// ```
    pub fn to<'a, T>(&'a self) -> Result<T, ValueError>
        where T: TryFrom<&'a Self, Error = ValueError>
    {
        T::try_from(self)
    }
}
