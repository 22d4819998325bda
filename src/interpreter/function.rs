/// The native tables and their registration.
pub mod core;

/// Block keywords and assignment: `if`, `while`, `func`, `end`, `ret` and
/// `set`.
///
/// Also defines which names open and close indentation blocks.
pub mod control;

/// The `print` and `tp` natives.
///
/// Write to the host's output stream.
pub mod print;

/// The `gets` native.
///
/// Reads a line from the host's input stream.
pub mod input;

/// String and number conversions: `concat`, `int`, `float` and `str`.
pub mod convert;

/// The `rand` native.
pub mod random;
