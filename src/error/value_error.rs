use thiserror::Error;

use crate::value::kind::Kind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while operating on a dynamic value.
pub enum ValueError {
    /// An operator was applied to a pairing of kinds that has no rule.
    #[error("Type error: unsupported operand(s) for {operation}: '{left}' and '{right}'.")]
    UnsupportedOperands {
        /// The operator or operation that was attempted.
        operation: &'static str,
        /// Kind of the left-hand side.
        left:      Kind,
        /// Kind of the right-hand side.
        right:     Kind,
    },
    /// A unary operation (indexing, `length`, `keys`, ...) was applied to a
    /// kind that does not support it.
    #[error("Type error: '{operation}' is not supported on '{kind}'.")]
    UnsupportedOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Kind of the receiver.
        kind:      Kind,
    },
    /// A value could not be converted to the requested native type.
    #[error("Type error: cannot convert '{from}' to {target}.")]
    Conversion {
        /// Kind of the value being converted.
        from:   Kind,
        /// Name of the native target type.
        target: &'static str,
    },
    /// The value was invoked but does not hold a function.
    #[error("Type error: '{kind}' is not callable.")]
    NotCallable {
        /// Kind of the value that was invoked.
        kind: Kind,
    },
    /// An argument was well typed but outside the domain of the operation.
    #[error("Domain error: {details}.")]
    DomainError {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Attempted integer division or remainder by zero.
    #[error("Domain error: division by zero.")]
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    #[error("Domain error: integer overflow while trying to compute result.")]
    Overflow,
    /// A number does not fit the requested native type.
    #[error("Domain error: {value} does not fit into {target}.")]
    OutOfRange {
        /// Textual form of the offending number.
        value:  String,
        /// Name of the native target type.
        target: &'static str,
    },
    /// A float with a fractional part was converted to an integer type.
    #[error("Domain error: {value} is fractional and cannot be converted to {target}.")]
    Fractional {
        /// Textual form of the offending number.
        value:  String,
        /// Name of the native target type.
        target: &'static str,
    },
}

impl ValueError {
    /// Shorthand for [`ValueError::UnsupportedOperands`].
    #[must_use]
    pub const fn operands(operation: &'static str, left: Kind, right: Kind) -> Self {
        Self::UnsupportedOperands { operation, left, right }
    }

    /// Shorthand for [`ValueError::UnsupportedOperation`].
    #[must_use]
    pub const fn operation(operation: &'static str, kind: Kind) -> Self {
        Self::UnsupportedOperation { operation, kind }
    }

    /// Returns `true` for the type error family (operands, operations,
    /// conversions and calls).
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self,
                 Self::UnsupportedOperands { .. }
                 | Self::UnsupportedOperation { .. }
                 | Self::Conversion { .. }
                 | Self::NotCallable { .. })
    }

    /// Returns `true` for the domain error family.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        !self.is_type_error()
    }
}
