use crate::{
    error::RuntimeError,
    interpreter::{engine::core::Interpreter, evaluator::core::EvalResult, value::core::Value},
};

/// `gets name`: reads one line of input into `name` as a string.
///
/// The line break is dropped; at the end of input `name` becomes the empty
/// string. Pending output is flushed first so prompts appear before the read.
pub fn gets(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    let line = interp.current_line();
    let host = interp.host_mut();

    let text = host.output()
                   .flush()
                   .and_then(|()| host.read_line())
                   .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                   line })?;
    interp.set_variable(slot, Value::string(text.unwrap_or_default()));
    Ok(())
}
