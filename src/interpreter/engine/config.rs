use crate::interpreter::{evaluator::core::DEFAULT_MAX_DEPTH, symbols::DEFAULT_SYMBOL_CAPACITY};

/// Default number of lines the program store holds.
pub const DEFAULT_MAX_LINES: usize = 1000;
/// Default number of cells shared by the argument and frame stacks.
pub const DEFAULT_MAX_STACK: usize = 256;

/// Engine configuration.
///
/// Only limits and seeds live here; the engine enforces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of symbol-table slots, natives included.
    pub max_symbols:    usize,
    /// Number of lines the program store holds.
    pub max_lines:      usize,
    /// Number of cells shared by the argument and frame stacks.
    pub max_stack:      usize,
    /// Deepest nesting of parentheses inside one expression.
    pub max_expr_depth: usize,
    /// Seed for the random generator; `None` seeds from the OS.
    pub seed:           Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_symbols:    DEFAULT_SYMBOL_CAPACITY,
               max_lines:      DEFAULT_MAX_LINES,
               max_stack:      DEFAULT_MAX_STACK,
               max_expr_depth: DEFAULT_MAX_DEPTH,
               seed:           None, }
    }
}
