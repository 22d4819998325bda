use crate::interpreter::{engine::core::Interpreter, evaluator::core::EvalResult, value::core::Value};

/// Natives that open an indentation block.
pub const BLOCK_OPENERS: &[&str] = &["if", "while", "func"];
/// Natives that close an indentation block.
pub const BLOCK_CLOSERS: &[&str] = &["end"];

/// `if cond`: skips the block unless `cond` is truthy.
pub fn if_native(interp: &mut Interpreter) -> EvalResult<()> {
    if !interp.arg(0)?.is_truthy() {
        interp.skip();
    }
    Ok(())
}

/// `while cond`: runs the block and comes back to this line while `cond` is
/// truthy.
pub fn while_native(interp: &mut Interpreter) -> EvalResult<()> {
    if interp.arg(0)?.is_truthy() {
        interp.enter_loop()
    } else {
        interp.skip();
        Ok(())
    }
}

/// `func name`: binds `name` to the function whose body follows, without
/// running the body.
pub fn func(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    let pc = interp.pc();
    interp.set_variable(slot, Value::script(pc));
    interp.skip();
    Ok(())
}

/// `end`: closes the innermost block.
pub fn end(interp: &mut Interpreter) -> EvalResult<()> {
    interp.close_block()
}

/// `ret [value]`: returns from the current function.
pub fn ret(interp: &mut Interpreter) -> EvalResult<()> {
    let value = if interp.arg_count() > 0 {
        Some(interp.arg(0)?.clone())
    } else {
        None
    };
    interp.return_from_call(value)
}

/// `set name value`: assigns `value` to `name`.
pub fn set(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    let value = interp.arg(1)?.clone();
    interp.set_variable(slot, value);
    Ok(())
}
