use crate::{
    error::ValueError,
    operator::core::BinaryOperator,
    value::{
        core::{Value, ValueResult},
        kind::Kind,
    },
};

impl Value {
    /// Evaluates an operator with a string on at least one side.
    ///
    /// `+` concatenates, rendering the non-string side the way
    /// [`Display`](std::fmt::Display) does. `*` repeats the string when the
    /// other side is an integer or boolean count, in either order. Every other
    /// pairing is a type error.
    ///
    /// # Example
    /// ```
    /// use dynvar::{operator::core::BinaryOperator, value::core::Value};
    ///
    /// let text = Value::from("ab");
    ///
    /// let joined = Value::eval_string_op(BinaryOperator::Add, &text, &Value::from(1.5));
    /// assert_eq!(joined.unwrap(), Value::from("ab1.5"));
    ///
    /// let repeated = Value::eval_string_op(BinaryOperator::Mul, &Value::from(3), &text);
    /// assert_eq!(repeated.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_string_op(op: BinaryOperator, left: &Self, right: &Self) -> ValueResult<Self> {
        use BinaryOperator::{Add, Mul};
        use Value::{Boolean, Integer, String};

        match (op, left, right) {
            (Add, String(_), other) | (Add, other, String(_)) if other.is_concatenable() => {
                Ok(String(format!("{left}{right}")))
            },
            (Mul, String(text), count @ (Integer(_) | Boolean(_)))
            | (Mul, count @ (Integer(_) | Boolean(_)), String(text)) => {
                repeat(text, count).map(String)
            },
            _ => Err(ValueError::operands(op.symbol(), left.kind(), right.kind())),
        }
    }

    /// Kinds that render into a concatenation.
    pub(crate) const fn is_concatenable(&self) -> bool {
        matches!(self,
                 Self::String(_) | Self::Integer(_) | Self::Float(_) | Self::Boolean(_))
    }
}

/// Repeats `text` by the count held in an integer or boolean value.
///
/// Counts below one are a domain error. A result too large to allocate is
/// [`ValueError::Overflow`].
pub(crate) fn repeat(text: &str, count: &Value) -> ValueResult<String> {
    let count = match count {
        Value::Integer(i) => *i,
        Value::Boolean(b) => i64::from(*b),
        _ => return Err(ValueError::operands("*", Kind::String, count.kind())),
    };

    if count <= 0 {
        return Err(ValueError::DomainError { details: format!("cannot repeat a string {count} times") });
    }

    if text.is_empty() {
        return Ok(String::new());
    }

    let count = usize::try_from(count).map_err(|_| ValueError::Overflow)?;
    let total = text.len()
                    .checked_mul(count)
                    .filter(|&total| isize::try_from(total).is_ok())
                    .ok_or(ValueError::Overflow)?;

    let mut repeated = String::new();
    repeated.try_reserve_exact(total).map_err(|_| ValueError::Overflow)?;
    for _ in 0..count {
        repeated.push_str(text);
    }

    Ok(repeated)
}
