/// Core line parsing.
///
/// Turns one source line into a [`crate::ast::Line`]: literals become owned
/// values, identifiers become symbol-table slots and parenthesized text is kept
/// as a deferred expression.
pub mod core;

/// Utility functions for the parser.
///
/// Column arithmetic, comment detection and the mapping from lexer failures to
/// parse errors.
pub mod utils;
