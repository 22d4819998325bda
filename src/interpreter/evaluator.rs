/// Core evaluation logic for deferred expressions.
///
/// Splits an expression into operands and operators, evaluates parenthesized
/// sub-expressions recursively and collapses the sequence in precedence order.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, comparisons and logical connectives on numbers,
/// including integer/float promotion and division-by-zero checks.
pub mod binary;
