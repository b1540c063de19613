use crate::{
    operator::{core::BinaryOperator, string::repeat},
    value::core::{Value, ValueResult},
};

impl Value {
    /// Applies `op` in place: `self = self op rhs`.
    ///
    /// A string on the left is extended (`+=`) or repeated (`*=`) in its own
    /// buffer. Everything else is computed with [`Value::binary`] and then
    /// stored, so a failing operator leaves `self` unchanged.
    ///
    /// # Example
    /// ```
    /// use dynvar::{operator::core::BinaryOperator, value::core::Value};
    ///
    /// let mut text = Value::from("ha");
    /// text.apply_assign(BinaryOperator::Mul, &Value::from(3)).unwrap();
    /// assert_eq!(text, Value::from("hahaha"));
    ///
    /// let mut n = Value::from(7);
    /// assert!(n.apply_assign(BinaryOperator::Sub, &Value::from("1")).is_err());
    /// assert_eq!(n, Value::from(7));
    /// ```
    pub fn apply_assign(&mut self, op: BinaryOperator, rhs: &Self) -> ValueResult<()> {
        if let Self::String(text) = self {
            match (op, rhs) {
                (BinaryOperator::Add, other) if other.is_concatenable() => {
                    text.push_str(&other.to_string());
                    return Ok(());
                },
                (BinaryOperator::Mul, count @ (Self::Integer(_) | Self::Boolean(_))) => {
                    *text = repeat(text, count)?;
                    return Ok(());
                },
                _ => {},
            }
        }

        *self = self.binary(op, rhs)?;
        Ok(())
    }

    /// `self += rhs`.
    ///
    /// # Errors
    /// Same as [`Value::add`].
    pub fn add_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        self.apply_assign(BinaryOperator::Add, rhs)
    }

    /// `self -= rhs`.
    ///
    /// # Errors
    /// Same as [`Value::sub`].
    pub fn sub_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        self.apply_assign(BinaryOperator::Sub, rhs)
    }

    /// `self *= rhs`. Repeats a string in place.
    ///
    /// # Errors
    /// Same as [`Value::mul`].
    pub fn mul_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        self.apply_assign(BinaryOperator::Mul, rhs)
    }

    /// `self /= rhs`.
    ///
    /// # Errors
    /// Same as [`Value::div`].
    pub fn div_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        self.apply_assign(BinaryOperator::Div, rhs)
    }

    /// `self %= rhs`.
    ///
    /// # Errors
    /// Same as [`Value::rem`].
    pub fn rem_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        self.apply_assign(BinaryOperator::Rem, rhs)
    }
}
