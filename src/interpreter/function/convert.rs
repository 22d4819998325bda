use crate::interpreter::{engine::core::Interpreter, evaluator::core::EvalResult, value::core::Value};

/// `concat name value`: appends the display string of `value` to the display
/// string of `name`, leaving a string in `name`.
pub fn concat(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    let suffix = interp.arg(1)?.display().to_string();
    let joined = format!("{}{suffix}", interp.variable_mut(slot).display());
    interp.set_variable(slot, Value::string(joined));
    Ok(())
}

/// `int name`: converts `name` to an integer in place.
pub fn to_int(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    interp.variable_mut(slot).convert_to_integer();
    Ok(())
}

/// `float name`: converts `name` to a float in place.
pub fn to_float(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    interp.variable_mut(slot).convert_to_float();
    Ok(())
}

/// `str name`: converts `name` to a string in place.
pub fn to_str(interp: &mut Interpreter) -> EvalResult<()> {
    let slot = interp.arg_slot(0)?;
    interp.variable_mut(slot).convert_to_string();
    Ok(())
}
