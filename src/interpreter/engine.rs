/// The interpreter state and its fetch-execute loop.
///
/// Owns the program store, the symbol table and the stacks, tracks
/// indentation and conditional skipping, and dispatches each line to a native
/// or a script-defined function.
pub mod core;

/// Resource limits and other engine settings.
pub mod config;

/// The argument stack and the frame stack.
///
/// Both stacks share a single capacity; running out of it is fatal.
pub mod stack;

/// Host I/O reached by natives: output, input and the random generator.
pub mod host;
