/// Operand ownership tags.
///
/// Defines `Operand`, which distinguishes transient values owned by the line
/// or expression that produced them from references to symbol-table slots.
/// Consuming an operand moves it, so a transient can only be released once.
pub mod operand;

/// The `Value` type, its kinds and conversions.
///
/// A value is a tagged payload (string, integer, float, function or deferred
/// expression) with a cached display string. Also defines the callables a
/// line can invoke: host natives and script-defined functions.
pub mod core;
