use std::fmt;

/// The currently active case of a [`Value`](crate::value::core::Value).
///
/// The declaration order is the kind rank used by
/// [`Value::compare`](crate::value::core::Value::compare) when two values of
/// unrelated kinds are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Absence of a value.
    Undefined,
    /// Explicit null.
    Null,
    /// 64-bit signed integer.
    Integer,
    /// Floating point number.
    Float,
    /// `true` or `false`.
    Boolean,
    /// Owned character buffer.
    String,
    /// Ordered sequence of values.
    Array,
    /// Ordered list of name/value pairs.
    Object,
    /// Callable taking an argument record.
    Function,
}

impl Kind {
    /// Canonical lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }

    /// Label reported by the JavaScript `typeof` operator for this kind.
    ///
    /// Null and arrays report `object`, both numeric kinds report `number`.
    #[must_use]
    pub const fn type_of(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null | Self::Array | Self::Object => "object",
            Self::Integer | Self::Float => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Function => "function",
        }
    }

    /// Returns `true` for the kinds that take part in arithmetic
    /// (`Integer`, `Float` and `Boolean`).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Boolean)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
