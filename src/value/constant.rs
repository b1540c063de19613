use crate::{
    error::ConstEvalError,
    value::{core::Value, kind::Kind},
};

/// Result of a compile-time operator.
pub type ConstResult = Result<ConstValue, ConstEvalError>;

/// A heap-free scalar value usable in constant evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    /// Absence of a value.
    Undefined,
    /// Explicit null.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A string literal.
    Str(&'static str),
}

/// Numeric view shared by the operators.
#[derive(Clone, Copy)]
enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl ConstValue {
    /// Integer constructor.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Float constructor.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Boolean constructor.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// String constructor.
    #[must_use]
    pub const fn str(value: &'static str) -> Self {
        Self::Str(value)
    }

    /// Returns the kind the value has once converted into a
    /// [`Value`](crate::value::core::Value).
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Boolean(_) => Kind::Boolean,
            Self::Str(_) => Kind::String,
        }
    }

    const fn number(self) -> Option<Number> {
        match self {
            Self::Integer(i) => Some(Number::Integer(i)),
            Self::Boolean(b) => Some(Number::Integer(b as i64)),
            Self::Float(f) => Some(Number::Float(f)),
            Self::Undefined | Self::Null | Self::Str(_) => None,
        }
    }

    const fn operands(operation: &'static str, left: Self, right: Self) -> ConstEvalError {
        ConstEvalError::UnsupportedOperands { operation,
                                              left: left.kind(),
                                              right: right.kind() }
    }

    /// `self + rhs`.
    ///
    /// # Errors
    /// String operands need allocation and are refused; undefined and null
    /// are unsupported; integer overflow is reported.
    pub const fn add(self, rhs: Self) -> ConstResult {
        match (self.number(), rhs.number()) {
            (Some(Number::Integer(a)), Some(Number::Integer(b))) => match a.checked_add(b) {
                Some(sum) => Ok(Self::Integer(sum)),
                None => Err(ConstEvalError::Overflow),
            },
            (Some(a), Some(b)) => Ok(Self::Float(a.as_f64() + b.as_f64())),
            _ => match (self, rhs) {
                (Self::Undefined | Self::Null, _) | (_, Self::Undefined | Self::Null) => {
                    Err(Self::operands("+", self, rhs))
                },
                _ => Err(ConstEvalError::StringOperation { operation: "concatenation" }),
            },
        }
    }

    /// `self - rhs`.
    ///
    /// # Errors
    /// Only numeric operands are supported; integer overflow is reported.
    pub const fn sub(self, rhs: Self) -> ConstResult {
        match (self.number(), rhs.number()) {
            (Some(Number::Integer(a)), Some(Number::Integer(b))) => match a.checked_sub(b) {
                Some(difference) => Ok(Self::Integer(difference)),
                None => Err(ConstEvalError::Overflow),
            },
            (Some(a), Some(b)) => Ok(Self::Float(a.as_f64() - b.as_f64())),
            _ => Err(Self::operands("-", self, rhs)),
        }
    }

    /// `self * rhs`.
    ///
    /// # Errors
    /// String repetition needs allocation and is refused; other non-numeric
    /// operands are unsupported; integer overflow is reported.
    pub const fn mul(self, rhs: Self) -> ConstResult {
        match (self.number(), rhs.number()) {
            (Some(Number::Integer(a)), Some(Number::Integer(b))) => match a.checked_mul(b) {
                Some(product) => Ok(Self::Integer(product)),
                None => Err(ConstEvalError::Overflow),
            },
            (Some(a), Some(b)) => Ok(Self::Float(a.as_f64() * b.as_f64())),
            _ => match (self, rhs) {
                (Self::Str(_), Self::Integer(_) | Self::Boolean(_))
                | (Self::Integer(_) | Self::Boolean(_), Self::Str(_)) => {
                    Err(ConstEvalError::StringOperation { operation: "repetition" })
                },
                _ => Err(Self::operands("*", self, rhs)),
            },
        }
    }

    /// `self / rhs`. Integer division truncates; float division follows IEEE.
    ///
    /// # Errors
    /// Only numeric operands are supported; integer division by zero and
    /// overflow are reported.
    pub const fn div(self, rhs: Self) -> ConstResult {
        match (self.number(), rhs.number()) {
            (Some(Number::Integer(_)), Some(Number::Integer(0))) => {
                Err(ConstEvalError::DivisionByZero)
            },
            (Some(Number::Integer(a)), Some(Number::Integer(b))) => match a.checked_div(b) {
                Some(quotient) => Ok(Self::Integer(quotient)),
                None => Err(ConstEvalError::Overflow),
            },
            (Some(a), Some(b)) => Ok(Self::Float(a.as_f64() / b.as_f64())),
            _ => Err(Self::operands("/", self, rhs)),
        }
    }

    /// `self % rhs` for integer and boolean operands.
    ///
    /// # Errors
    /// A float operand yields [`ConstEvalError::FloatRemainder`]: the
    /// floating remainder is not available at compile time. Remainder by zero
    /// and non-numeric operands are reported as well. `i64::MIN % -1` is `0`.
    pub const fn rem(self, rhs: Self) -> ConstResult {
        match (self.number(), rhs.number()) {
            (Some(Number::Integer(_)), Some(Number::Integer(0))) => {
                Err(ConstEvalError::DivisionByZero)
            },
            (Some(Number::Integer(a)), Some(Number::Integer(b))) => {
                Ok(Self::Integer(a.wrapping_rem(b)))
            },
            (Some(_), Some(_)) => Err(ConstEvalError::FloatRemainder),
            _ => Err(Self::operands("%", self, rhs)),
        }
    }
}

/// Unwraps a compile-time result, turning any error into a compile error
/// when used in a `const` or `static` initializer.
///
/// # Panics
/// Panics (at compile time in constant context) when `result` is an error.
#[must_use]
pub const fn const_unwrap(result: ConstResult) -> ConstValue {
    match result {
        Ok(value) => value,
        Err(ConstEvalError::UnsupportedOperands { .. }) => {
            panic!("unsupported operand(s) in constant expression")
        },
        Err(ConstEvalError::StringOperation { .. }) => {
            panic!("string operations are only available at run time")
        },
        Err(ConstEvalError::FloatRemainder) => {
            panic!("cannot use % on floats at compile time")
        },
        Err(ConstEvalError::DivisionByZero) => panic!("division by zero in constant expression"),
        Err(ConstEvalError::Overflow) => panic!("integer overflow in constant expression"),
    }
}

impl From<ConstValue> for Value {
    fn from(value: ConstValue) -> Self {
        match value {
            ConstValue::Undefined => Self::Undefined,
            ConstValue::Null => Self::Null,
            ConstValue::Integer(i) => Self::Integer(i),
            ConstValue::Float(f) => Self::Float(f),
            ConstValue::Boolean(b) => Self::Boolean(b),
            ConstValue::Str(s) => Self::from(s),
        }
    }
}
