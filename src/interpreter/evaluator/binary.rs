use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_f64,
};

/// A numeric operand of the expression language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 64-bit signed integer.
    Integer(i64),
    /// Double precision float.
    Float(f64),
}

impl Number {
    /// The value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(f) => f,
        }
    }

    /// Returns `true` for any non-zero number.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Float(f) => f != 0.0,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(n) => Self::integer(n),
            Number::Float(f) => Self::float(f),
        }
    }
}

impl From<bool> for Number {
    fn from(b: bool) -> Self {
        Self::Integer(i64::from(b))
    }
}

/// Applies a binary operator to two numbers.
///
/// Two integers give an integer (division and remainder truncate toward zero);
/// a float on either side promotes the operation to floats. Comparisons and
/// the logical connectives always give `0` or `1`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// - `Ok(Number)`: The result.
/// - `Err(RuntimeError::DivisionByZero)`: For `/` or `%` by integer zero.
///
/// # Example
/// ```
/// use linterp::{
///     ast::BinaryOperator,
///     interpreter::evaluator::binary::{Number, eval_binary},
/// };
///
/// let q = eval_binary(BinaryOperator::Div, Number::Integer(7), Number::Integer(2), 1).unwrap();
/// assert_eq!(q, Number::Integer(3));
///
/// let q = eval_binary(BinaryOperator::Div, Number::Float(7.0), Number::Integer(2), 1).unwrap();
/// assert_eq!(q, Number::Float(3.5));
///
/// let lt = eval_binary(BinaryOperator::Less, Number::Integer(1), Number::Float(1.5), 1).unwrap();
/// assert_eq!(lt, Number::Integer(1));
///
/// assert!(eval_binary(BinaryOperator::Mod, Number::Integer(1), Number::Integer(0), 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: Number, right: Number, line: usize) -> EvalResult<Number> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    match op {
        Mul | Div | Mod | Add | Sub => eval_arithmetic(op, left, right, line),
        LessEqual | GreaterEqual | Less | Greater | Equal | NotEqual => {
            Ok(eval_comparison(op, left, right).into())
        },
        And => Ok((left.is_truthy() && right.is_truthy()).into()),
        Or => Ok((left.is_truthy() || right.is_truthy()).into()),
    }
}

/// Evaluates `*`, `/`, `%`, `+` and `-`.
///
/// Integer arithmetic wraps on overflow.
fn eval_arithmetic(op: BinaryOperator, left: Number, right: Number, line: usize) -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => {
            let n = match op {
                Mul => a.wrapping_mul(b),
                Add => a.wrapping_add(b),
                Sub => a.wrapping_sub(b),
                Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { line }),
                Div => a.wrapping_div(b),
                _ => a.wrapping_rem(b),
            };
            Ok(Number::Integer(n))
        },
        _ => {
            let (a, b) = (left.as_f64(), right.as_f64());
            let f = match op {
                Mul => a * b,
                Div => a / b,
                Mod => a % b,
                Add => a + b,
                _ => a - b,
            };
            Ok(Number::Float(f))
        },
    }
}

/// Evaluates the comparison operators.
///
/// Integers compare exactly; mixed operands compare as floats.
fn eval_comparison(op: BinaryOperator, left: Number, right: Number) -> bool {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let ordering = match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
        _ => left.as_f64().partial_cmp(&right.as_f64()),
    };

    match (op, ordering) {
        (NotEqual, None) => true,
        (_, None) => false,
        (LessEqual, Some(o)) => o.is_le(),
        (GreaterEqual, Some(o)) => o.is_ge(),
        (Less, Some(o)) => o.is_lt(),
        (Greater, Some(o)) => o.is_gt(),
        (Equal, Some(o)) => o.is_eq(),
        (_, Some(o)) => o.is_ne(),
    }
}
