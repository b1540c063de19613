use std::fmt;

use crate::value::kind::Kind;

/// Serialization tag carried by descriptor elements and by the first byte of
/// a flat blob.
///
/// The discriminants are part of the blob layout and never change.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataType {
    /// No type. Never produced by serialization.
    None      = 0,
    /// Explicit null.
    Null      = 1,
    /// Absence of a value.
    Undefined = 2,
    /// 64-bit signed integer, 8 little-endian bytes.
    Integer   = 3,
    /// 64-bit float, 8 little-endian bytes.
    Float     = 4,
    /// One byte, `0` or `1`.
    Bool      = 5,
    /// UTF-8 bytes followed by a `0` terminator.
    String    = 6,
    /// Array of values.
    Array     = 7,
    /// Record of named values.
    Object    = 8,
    /// Untyped native payload (tags, sizes, raw buffers).
    Native    = 9,
    /// Callable.
    Function  = 10,
}

impl DataType {
    /// Every data type in tag order.
    pub const ALL: [Self; 11] = [Self::None,
                                 Self::Null,
                                 Self::Undefined,
                                 Self::Integer,
                                 Self::Float,
                                 Self::Bool,
                                 Self::String,
                                 Self::Array,
                                 Self::Object,
                                 Self::Native,
                                 Self::Function];

    /// The raw tag byte.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Decodes a raw tag byte, or `None` if the byte names no data type.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::data_type::DataType;
    ///
    /// assert_eq!(DataType::from_tag(3), Some(DataType::Integer));
    /// assert_eq!(DataType::from_tag(42), None);
    /// ```
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        if (tag as usize) < Self::ALL.len() {
            Some(Self::ALL[tag as usize])
        } else {
            None
        }
    }

    /// The data type a value of the given kind serializes under.
    #[must_use]
    pub const fn of(kind: Kind) -> Self {
        match kind {
            Kind::Undefined => Self::Undefined,
            Kind::Null => Self::Null,
            Kind::Integer => Self::Integer,
            Kind::Float => Self::Float,
            Kind::Boolean => Self::Bool,
            Kind::String => Self::String,
            Kind::Array => Self::Array,
            Kind::Object => Self::Object,
            Kind::Function => Self::Function,
        }
    }

    /// Uppercase name of the data type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Null => "NULL",
            Self::Undefined => "UNDEFINED",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Object => "OBJECT",
            Self::Native => "NATIVE",
            Self::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
