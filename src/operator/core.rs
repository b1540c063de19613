use std::fmt;

use crate::{
    error::ValueError,
    value::core::{Value, ValueResult},
};

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
}

impl BinaryOperator {
    /// The operator's symbol as written in source code.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[allow(clippy::should_implement_trait)]
impl Value {
    /// Applies a binary operator to two values.
    ///
    /// Pairings touching `undefined`, `null`, arrays, objects or functions are
    /// type errors. A string on either side routes to the string rules
    /// (concatenation for `+`, repetition for `*`, a type error otherwise).
    /// Everything left is numeric.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `rhs`: Right operand.
    ///
    /// # Returns
    /// A `ValueResult<Value>` holding the freshly computed value. The operands
    /// are never modified.
    ///
    /// # Example
    /// ```
    /// use dynvar::{operator::core::BinaryOperator, value::core::Value};
    ///
    /// let x = Value::from(5);
    ///
    /// assert_eq!(x.binary(BinaryOperator::Add, &Value::from("3")).unwrap(), Value::from("53"));
    /// assert_eq!(x.binary(BinaryOperator::Div, &Value::from(2)).unwrap(), Value::from(2));
    /// assert!(x.binary(BinaryOperator::Sub, &Value::Null).is_err());
    /// ```
    pub fn binary(&self, op: BinaryOperator, rhs: &Self) -> ValueResult<Self> {
        use Value::{Array, Function, Null, Object, String, Undefined};

        match (self, rhs) {
            (Undefined | Null | Array(_) | Object(_) | Function(_), _)
            | (_, Undefined | Null | Array(_) | Object(_) | Function(_)) => {
                Err(ValueError::operands(op.symbol(), self.kind(), rhs.kind()))
            },
            (String(_), _) | (_, String(_)) => Self::eval_string_op(op, self, rhs),
            _ => Self::eval_numeric_op(op, self, rhs),
        }
    }

    /// `self + rhs`: numeric sum, or concatenation when either side is a
    /// string.
    ///
    /// # Errors
    /// Returns a type error for pairings without a rule, and
    /// [`ValueError::Overflow`] when integer addition overflows.
    pub fn add(&self, rhs: &Self) -> ValueResult<Self> {
        self.binary(BinaryOperator::Add, rhs)
    }

    /// `self - rhs`.
    ///
    /// # Errors
    /// Returns a type error unless both sides are numeric, and
    /// [`ValueError::Overflow`] when integer subtraction overflows.
    pub fn sub(&self, rhs: &Self) -> ValueResult<Self> {
        self.binary(BinaryOperator::Sub, rhs)
    }

    /// `self * rhs`: numeric product, or string repetition for a string and
    /// an integer count.
    ///
    /// # Errors
    /// Returns a type error for pairings without a rule, a domain error for a
    /// repetition count below one, and [`ValueError::Overflow`] when integer
    /// multiplication overflows.
    pub fn mul(&self, rhs: &Self) -> ValueResult<Self> {
        self.binary(BinaryOperator::Mul, rhs)
    }

    /// `self / rhs`. Integer division truncates toward zero.
    ///
    /// # Errors
    /// Returns a type error unless both sides are numeric, and
    /// [`ValueError::DivisionByZero`] for an integer division by zero.
    pub fn div(&self, rhs: &Self) -> ValueResult<Self> {
        self.binary(BinaryOperator::Div, rhs)
    }

    /// `self % rhs`. Integers use the truncated remainder, floats the
    /// floating remainder.
    ///
    /// The floating remainder is a run-time operation: the compile-time
    /// counterpart
    /// [`ConstValue::rem`](crate::value::constant::ConstValue::rem) refuses
    /// float operands.
    ///
    /// # Errors
    /// Returns a type error unless both sides are numeric, and
    /// [`ValueError::DivisionByZero`] for an integer remainder by zero.
    ///
    /// # Example
    /// ```
    /// use dynvar::value::core::Value;
    ///
    /// assert_eq!(Value::from(10).rem(&Value::from(3)).unwrap(), Value::Integer(1));
    /// assert_eq!(Value::from(10.5).rem(&Value::from(3)).unwrap(), Value::Float(1.5));
    /// ```
    pub fn rem(&self, rhs: &Self) -> ValueResult<Self> {
        self.binary(BinaryOperator::Rem, rhs)
    }
}
