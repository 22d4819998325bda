/// The execution engine.
///
/// Holds the program store, the symbol table, the argument and frame stacks
/// and the control state, and runs lines as they are fed.
///
/// # Responsibilities
/// - Appends tokenized lines and runs them immediately.
/// - Tracks indentation blocks and conditional skipping.
/// - Dispatches lines to natives and script-defined functions.
/// - Recovers from per-line errors and aborts the run on fatal ones.
pub mod engine;
/// The evaluator module computes parenthesized expressions.
///
/// # Responsibilities
/// - Splits expression text into operands and operators.
/// - Applies operators in table order, collapsing the sequence in place.
/// - Reports malformed expressions, undefined variables and division by zero.
pub mod evaluator;
/// Host-provided functions.
///
/// The block keywords every interpreter registers, and the library of
/// output, input, conversion and random-number natives.
pub mod function;
/// The lexer module tokenizes source text.
///
/// Two `logos` lexers share the literal and identifier grammar: one for
/// statement lines, one for the operators and operands of expressions.
///
/// # Responsibilities
/// - Recognises strings, balanced parenthesized groups, identifiers and
///   numbers.
/// - Reports unterminated strings, unbalanced parentheses and malformed
///   numbers.
pub mod lexer;
/// The parser module turns one source line into a program-store entry.
///
/// # Responsibilities
/// - Resolves identifiers to symbol-table slots.
/// - Keeps parenthesized text as deferred expressions.
/// - Handles the `>` return capture, comments and blank lines.
pub mod parser;
/// The symbol table.
///
/// A fixed-capacity set of named slots, created on first reference and kept
/// until the interpreter is dropped.
pub mod symbols;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines `Value`, its kinds and its cached display string.
/// - Implements in-place conversions between strings and numbers.
/// - Distinguishes transient values from slot references.
pub mod value;
