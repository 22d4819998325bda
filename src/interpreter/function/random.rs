use rand::Rng;

use crate::{
    error::RuntimeError,
    interpreter::{
        engine::core::Interpreter,
        evaluator::core::EvalResult,
        value::core::{Payload, Value},
    },
    util::num::f64_to_i64_truncating,
};

/// `rand n > r`: stores a uniformly distributed integer in `[0, n)` into the
/// capture.
///
/// A float bound is truncated first.
///
/// # Errors
/// - `ExpectedNumber` when `n` is not a number.
/// - `InvalidArgument` when `n` is not positive.
pub fn rand(interp: &mut Interpreter) -> EvalResult<()> {
    let line = interp.current_line();
    let value = interp.arg(0)?;
    let bound = match value.payload() {
        Payload::Integer(n) => *n,
        Payload::Float(f) => f64_to_i64_truncating(*f),
        _ => {
            return Err(RuntimeError::ExpectedNumber { found: value.kind().type_name(),
                                                      line });
        },
    };
    if bound <= 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("rand bound must be positive, got {bound}"),
                                                   line });
    }

    let roll = interp.host_mut().rng().gen_range(0..bound);
    interp.set_return(Value::integer(roll));
    Ok(())
}
