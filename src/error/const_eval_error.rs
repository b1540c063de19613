use thiserror::Error;

use crate::value::kind::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Errors raised by the compile-time subset of the value operators.
///
/// The type is `Copy` and allocation free so it can be produced and matched
/// inside `const fn`.
pub enum ConstEvalError {
    /// The operator has no rule for this pairing of kinds.
    #[error("Type error: unsupported operand(s) for {operation}: '{left}' and '{right}'.")]
    UnsupportedOperands {
        /// The operator that was attempted.
        operation: &'static str,
        /// Kind of the left-hand side.
        left:      Kind,
        /// Kind of the right-hand side.
        right:     Kind,
    },
    /// The operation needs to allocate a new string, which the compile-time
    /// subset cannot do.
    #[error("String {operation} is only available at run time.")]
    StringOperation {
        /// The operator that was attempted.
        operation: &'static str,
    },
    /// `%` with a float operand; the floating remainder is only available at
    /// run time.
    #[error("Cannot use % on floats at compile time.")]
    FloatRemainder,
    /// Attempted integer division or remainder by zero.
    #[error("Domain error: division by zero.")]
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    #[error("Domain error: integer overflow while trying to compute result.")]
    Overflow,
}
