use crate::interpreter::{
    engine::core::Interpreter,
    evaluator::core::EvalResult,
    function::{control, convert, input, print, random},
    value::core::NativeFn,
};

/// A native's registration entry.
struct NativeDef {
    name: &'static str,
    func: NativeFn,
}

/// Defines a table of natives and the list of their names.
///
/// Each entry maps a name to a function pointer implementing the native.
///
/// The macro produces:
/// - a static table of `NativeDef` entries,
/// - a public list of the registered names.
macro_rules! native_functions {
    (
        $table:ident, $names:ident;
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static $table: &[NativeDef] = &[
            $(
                NativeDef { name: $name, func: $func },
            )*
        ];
        pub const $names: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    CORE_TABLE, CORE_NATIVES;
    "if"    => control::if_native,
    "while" => control::while_native,
    "func"  => control::func,
    "end"   => control::end,
    "ret"   => control::ret,
    "set"   => control::set,
}

native_functions! {
    LIBRARY_TABLE, LIBRARY_NATIVES;
    "print"  => print::print,
    "tp"     => print::type_of,
    "line"   => print::line,
    "gets"   => input::gets,
    "concat" => convert::concat,
    "int"    => convert::to_int,
    "float"  => convert::to_float,
    "str"    => convert::to_str,
    "rand"   => random::rand,
}

fn register_table(interp: &mut Interpreter, table: &[NativeDef]) -> EvalResult<()> {
    for native in table {
        interp.register_native(native.name, native.func)?;
    }
    Ok(())
}

/// Registers the block keywords and `set`.
///
/// Every interpreter carries them; the engine recognises blocks by these
/// names.
///
/// # Errors
/// `SymbolTableFull` if the table cannot hold them.
pub fn register_core(interp: &mut Interpreter) -> EvalResult<()> {
    register_table(interp, CORE_TABLE)
}

/// Registers the host library: output, input, conversions and random
/// numbers.
///
/// # Errors
/// `SymbolTableFull` if the table cannot hold them.
///
/// # Example
/// ```
/// use linterp::interpreter::{
///     engine::{config::EngineConfig, core::Interpreter, host::{Host, SharedBuffer}},
///     function::core::register_library,
/// };
///
/// let output = SharedBuffer::default();
/// let host = Host::new(output.clone(), std::io::empty());
/// let mut interp = Interpreter::with_host(EngineConfig::default(), host).unwrap();
/// register_library(&mut interp).unwrap();
///
/// interp.feed_line("print \"n = \" (6 * 7)").unwrap();
/// assert_eq!(output.contents(), "n = 42");
/// ```
pub fn register_library(interp: &mut Interpreter) -> EvalResult<()> {
    register_table(interp, LIBRARY_TABLE)
}
