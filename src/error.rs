/// Tokenizer errors.
///
/// Defines all error types that can occur while turning one source line into
/// operand tokens: unterminated strings, unbalanced parentheses, malformed
/// numbers, stray characters and misplaced return captures.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while dispatching lines,
/// evaluating deferred expressions or running native functions, including the
/// structural errors of the indentation counter and the call stack.
pub mod runtime_error;
/// Per-line error reported to the host.
///
/// Wraps either a parse or a runtime error and exposes the numeric result
/// code, the source line and whether the error aborted the run.
pub mod line_error;

pub use line_error::LineError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
