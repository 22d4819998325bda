use crate::{
    error::RuntimeError,
    interpreter::{engine::core::Interpreter, evaluator::core::EvalResult, value::core::Value},
};

/// Writes each argument's display string, with no separator and no line
/// break.
///
/// A line break is written with a `"\n"` literal.
pub fn print(interp: &mut Interpreter) -> EvalResult<()> {
    let text = (0..interp.arg_count()).map(|index| interp.arg(index).map(Value::display))
                                      .collect::<EvalResult<String>>()?;
    write_output(interp, &text)
}

/// Writes the type name of the argument followed by a line break.
pub fn type_of(interp: &mut Interpreter) -> EvalResult<()> {
    let name = interp.arg(0)?.kind().type_name();
    write_output(interp, &format!("{name}\n"))
}

/// Does nothing.
pub const fn line(_: &mut Interpreter) -> EvalResult<()> {
    Ok(())
}

/// Writes `text` to the host's output and flushes it.
///
/// # Errors
/// `Io` when the output stream fails.
pub fn write_output(interp: &mut Interpreter, text: &str) -> EvalResult<()> {
    let line = interp.current_line();
    let output = interp.host_mut().output();
    output.write_all(text.as_bytes())
          .and_then(|()| output.flush())
          .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                          line })
}
