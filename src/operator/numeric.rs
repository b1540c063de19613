use crate::{
    error::ValueError,
    operator::core::BinaryOperator,
    value::core::{Value, ValueResult},
};

impl Value {
    /// Integer view of an operand: integers as is, booleans as `0`/`1`.
    const fn integer_operand(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Boolean(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Float view of a numeric operand.
    #[allow(clippy::cast_precision_loss)]
    const fn float_operand(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            Self::Boolean(b) => Some(*b as i64 as f64),
            _ => None,
        }
    }

    /// Evaluates an arithmetic operator on two numeric operands.
    ///
    /// Integer and boolean pairs stay integral and are checked for overflow
    /// and division by zero. As soon as one side is a float both sides are
    /// widened and the result follows IEEE 754, so dividing by zero yields an
    /// infinity or NaN.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An integer or float value, or a type error if either operand is not
    /// numeric.
    ///
    /// # Example
    /// ```
    /// use dynvar::{operator::core::BinaryOperator, value::core::Value};
    ///
    /// let sum = Value::eval_numeric_op(BinaryOperator::Add, &Value::from(true), &Value::from(2));
    /// assert_eq!(sum.unwrap(), Value::Integer(3));
    ///
    /// let half = Value::eval_numeric_op(BinaryOperator::Div, &Value::from(1), &Value::from(2.0));
    /// assert_eq!(half.unwrap(), Value::Float(0.5));
    /// ```
    pub fn eval_numeric_op(op: BinaryOperator, left: &Self, right: &Self) -> ValueResult<Self> {
        if let (Some(a), Some(b)) = (left.integer_operand(), right.integer_operand()) {
            return eval_integer(op, a, b).map(Self::Integer);
        }

        match (left.float_operand(), right.float_operand()) {
            (Some(a), Some(b)) => Ok(Self::Float(eval_float(op, a, b))),
            _ => Err(ValueError::operands(op.symbol(), left.kind(), right.kind())),
        }
    }
}

fn eval_integer(op: BinaryOperator, a: i64, b: i64) -> ValueResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Rem, Sub};

    match op {
        Add => a.checked_add(b).ok_or(ValueError::Overflow),
        Sub => a.checked_sub(b).ok_or(ValueError::Overflow),
        Mul => a.checked_mul(b).ok_or(ValueError::Overflow),
        Div | Rem if b == 0 => Err(ValueError::DivisionByZero),
        Div => a.checked_div(b).ok_or(ValueError::Overflow),
        // `i64::MIN % -1` is zero, not an overflow.
        Rem => Ok(a.wrapping_rem(b)),
    }
}

const fn eval_float(op: BinaryOperator, a: f64, b: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Rem, Sub};

    match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
        Rem => a % b,
    }
}
