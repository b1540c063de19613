use std::fmt;

use crate::{
    error::ValueError,
    util::format::format_float,
    value::{function::Function, kind::Kind, object::Object},
};

/// Result type used by every fallible value operation.
///
/// Operations return either a value of type `T` or a [`ValueError`]
/// describing the failure.
pub type ValueResult<T> = Result<T, ValueError>;

/// The shared placeholder returned by lookups that miss.
///
/// It is only ever handed out by shared reference; mutable accessors return
/// `Option<&mut Value>` instead.
pub static UNDEFINED: Value = Value::Undefined;

/// Floating point NaN as a dynamic value.
pub const NAN: Value = Value::Float(f64::NAN);

/// A dynamically typed value.
///
/// Holds exactly one kind at a time. Arrays and objects own their children,
/// so values form a tree: no container aliases another.
///
/// Equality (`==`) is strict: both kind and value must match. See
/// [`Value::loose_eq`] for JavaScript's abstract equality.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value. Default-constructed values start here.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// A 64-bit signed integer. Every native integral type normalizes here.
    Integer(i64),
    /// A floating point number. Every native float type normalizes here.
    Float(f64),
    /// `true` or `false`. Counts as `1`/`0` in arithmetic.
    Boolean(bool),
    /// An owned, mutable character buffer.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
    /// An ordered list of name/value pairs.
    Object(Object),
    /// A callable taking an argument record.
    Function(Function),
}

impl Value {
    /// Returns the kind currently held.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Boolean(_) => Kind::Boolean,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Function(_) => Kind::Function,
        }
    }

    /// JavaScript `typeof` label of the current kind.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::from(1.5).type_of(), "number");
    /// assert_eq!(Value::default().type_of(), "undefined");
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        self.kind().type_of()
    }

    /// Replaces the held value, applying the same normalization as
    /// construction.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::{core::Value, kind::Kind};
    ///
    /// let mut variable = Value::default();
    /// variable.assign(1u8);
    /// assert_eq!(variable.kind(), Kind::Integer);
    /// variable.assign("string");
    /// assert_eq!(variable.kind(), Kind::String);
    /// variable.assign(2.5f32);
    /// assert_eq!(variable.kind(), Kind::Float);
    /// ```
    pub fn assign(&mut self, value: impl Into<Self>) -> &mut Self {
        *self = value.into();
        self
    }

    /// JavaScript truthiness, used where a value acts as a condition.
    ///
    /// Unlike the `bool` conversion this never fails: containers and
    /// functions are truthy, `NaN` is falsy.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Boolean(b) => *b,
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Returns `true` if the value is [`Value::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the numeric kinds (integer, float, boolean).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Returns `true` if the value is a NaN float.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Float(f) if f.is_nan())
    }

    /// Borrows the string payload.
    ///
    /// # Errors
    /// Returns [`ValueError::Conversion`] for every other kind.
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(ValueError::Conversion { from:   self.kind(),
                                              target: "str", }),
        }
    }

    /// Borrows the array payload.
    ///
    /// # Errors
    /// Returns [`ValueError::Conversion`] for every other kind.
    pub fn as_array(&self) -> ValueResult<&[Self]> {
        match self {
            Self::Array(items) => Ok(items),
            _ => Err(ValueError::Conversion { from:   self.kind(),
                                              target: "array", }),
        }
    }

    /// Borrows the object payload.
    ///
    /// # Errors
    /// Returns [`ValueError::Conversion`] for every other kind.
    pub fn as_object(&self) -> ValueResult<&Object> {
        match self {
            Self::Object(object) => Ok(object),
            _ => Err(ValueError::Conversion { from:   self.kind(),
                                              target: "object", }),
        }
    }

    /// Writes the value the way it appears inside an array: strings are
    /// single-quoted, everything else prints as at the top level.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "'{s}'"),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", format_float(*r)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_nested(f)?;
                }

                write!(f, "]")
            },
            Self::Object(_) => write!(f, "object"),
            Self::Function(_) => write!(f, "function"),
        }
    }
}
