//! # linterp
//!
//! linterp is a small line-oriented interpreter written in Rust.
//! Programs are fed one line at a time; each line calls a native or a
//! script-defined function with literal, variable and parenthesized-expression
//! arguments. Blocks are delimited by `if`/`while`/`func` and `end`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Cursor;

use crate::{
    error::LineError,
    interpreter::{
        engine::{
            config::EngineConfig,
            core::Interpreter,
            host::{Host, SharedBuffer},
        },
        function::core::register_library,
    },
};

/// Defines the program-store entry and the expression operators.
///
/// # Responsibilities
/// - Defines `Line`, a tokenized statement with its optional return capture.
/// - Defines the binary operators and their precedence table.
pub mod ast;
/// Provides unified error types for tokenizing and running lines.
///
/// This module defines all errors that can be raised while a line is
/// tokenized, validated or executed. Every error carries the source line it
/// happened on and maps to the numeric result code reported to the host.
///
/// # Responsibilities
/// - Defines `ParseError`, `RuntimeError` and the `LineError` wrapper.
/// - Separates fatal errors, which abort a run, from per-line errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, expression evaluation, the
/// execution engine and the native library.
pub mod interpreter;
/// General utilities for numeric conversion and parsing.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without panicking.
/// - Read the leading number of a string the way the string conversions
///   expect.
pub mod util;

/// The result of running a whole script.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Everything the script wrote.
    pub output: String,
    /// The errors of the lines that failed, in order.
    pub errors: Vec<LineError>,
}

/// Runs a script against in-memory streams.
///
/// Every line is fed in turn with the default configuration; failing lines
/// are reported and the remaining lines still run. `input` is what `gets`
/// reads.
///
/// # Errors
/// Returns an error only if the interpreter cannot be set up.
///
/// # Examples
/// ```
/// use linterp::run_source;
///
/// let outcome = run_source("set x 5\nprint x", "").unwrap();
/// assert_eq!(outcome.output, "5");
/// assert!(outcome.errors.is_empty());
///
/// let outcome = run_source("print \"oops\nprint 1", "").unwrap();
/// assert_eq!(outcome.output, "1");
/// assert_eq!(outcome.errors[0].code(), -4);
/// ```
pub fn run_source(source: &str, input: &str) -> Result<Outcome, Box<dyn std::error::Error>> {
    run_source_with(source, input, EngineConfig::default())
}

/// Runs a script against in-memory streams with the given configuration.
///
/// # Errors
/// Returns an error only if the interpreter cannot be set up.
pub fn run_source_with(source: &str,
                       input: &str,
                       config: EngineConfig)
                       -> Result<Outcome, Box<dyn std::error::Error>> {
    let output = SharedBuffer::default();
    let host = Host::new(output.clone(), Cursor::new(input.to_string()));

    let mut interp = Interpreter::with_host(config, host)?;
    register_library(&mut interp)?;

    let errors = interp.feed_source(source);
    Ok(Outcome { output: output.contents(),
                 errors })
}
