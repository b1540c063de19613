/// Compound assignment.
///
/// Applies an operator in place. String concatenation and repetition extend
/// the existing buffer; on error the left-hand side is left untouched.
pub mod assign;

/// Operator identifiers and the binary dispatch table.
///
/// Routes every pairing of kinds either to the numeric rules, to the string
/// rules, or to a type error. No pairing is left without a rule.
pub mod core;

/// Numeric arithmetic.
///
/// Integer and boolean operands use checked 64-bit arithmetic; any float
/// operand switches to IEEE floating point.
pub mod numeric;

/// `std::ops` integration.
///
/// Lets `&a + &b` and friends be written with the usual operators. The
/// output is a `ValueResult`, so the result must be checked like any other
/// fallible operation.
pub mod ops;

/// String concatenation and repetition.
pub mod string;
