use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::{
    operator::core::BinaryOperator,
    value::core::{Value, ValueResult},
};

/// Implements a `std::ops` trait for borrowed values, forwarding to
/// [`Value::binary`].
///
/// Owned values get no impl: the trait method would shadow the inherent
/// `Value::add(&self, &Value)` family on method call syntax.
macro_rules! impl_binary_op {
    ($($trait:ident, $method:ident => $op:expr;)*) => {
        $(
            impl $trait<&Value> for &Value {
                type Output = ValueResult<Value>;

                fn $method(self, rhs: &Value) -> Self::Output {
                    self.binary($op, rhs)
                }
            }
        )*
    };
}

impl_binary_op! {
    Add, add => BinaryOperator::Add;
    Sub, sub => BinaryOperator::Sub;
    Mul, mul => BinaryOperator::Mul;
    Div, div => BinaryOperator::Div;
    Rem, rem => BinaryOperator::Rem;
}
