#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while executing lines.
pub enum RuntimeError {
    /// A line with no operand tokens, e.g. a lone return capture.
    EmptyLine {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The leading token of a line does not hold a function.
    NotCallable {
        /// Name of the leading identifier, or `(literal)`.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A native name was declared but never given an implementation.
    MissingNative {
        /// The name of the native.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A return was requested with no active call frame.
    StackUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block closer was found at indentation level zero.
    IndentUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A deferred expression could not be parsed.
    InvalidExpression {
        /// Details describing what is wrong with the expression.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The argument and frame stacks together exceeded their capacity.
    StackOverflow {
        /// The configured number of stack cells.
        capacity: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Every symbol-table slot is taken.
    SymbolTableFull {
        /// The configured number of slots.
        capacity: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The program store cannot hold another line.
    ProgramStoreFull {
        /// The configured number of lines.
        capacity: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Parenthesized sub-expressions nest deeper than allowed.
    ExpressionTooDeep {
        /// The configured nesting limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Integer division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric operand was expected.
    ExpectedNumber {
        /// Type name of the value found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A variable was used in an expression before being assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A native read past the arguments it was given.
    MissingArgument {
        /// Index of the requested argument.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A native expected a bare identifier it could assign to.
    ExpectedVariable {
        /// Index of the offending argument.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading or writing host I/O failed.
    Io {
        /// Description of the I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A native returned an error; the run is aborted.
    NativeFailure {
        /// The name the native was called through.
        name:   String,
        /// The error the native reported.
        source: Box<Self>,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Returns the numeric result code reported to the host.
    ///
    /// A native failure reports the code of the error the native raised.
    ///
    /// # Example
    /// ```
    /// use linterp::error::RuntimeError;
    ///
    /// let inner = RuntimeError::DivisionByZero { line: 4 };
    /// let err = RuntimeError::NativeFailure { name:   "print".to_string(),
    ///                                         source: Box::new(inner),
    ///                                         line:   4, };
    ///
    /// assert_eq!(err.code(), -12);
    /// assert!(err.is_fatal());
    /// ```
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::EmptyLine { .. } => -1,
            Self::NotCallable { .. } => -2,
            Self::MissingNative { .. } => -3,
            Self::StackUnderflow { .. } => -5,
            Self::IndentUnderflow { .. } => -6,
            Self::InvalidExpression { .. } => -7,
            Self::StackOverflow { .. } => -8,
            Self::SymbolTableFull { .. } => -9,
            Self::ProgramStoreFull { .. } => -10,
            Self::ExpressionTooDeep { .. } => -11,
            Self::DivisionByZero { .. } => -12,
            Self::ExpectedNumber { .. } => -13,
            Self::UndefinedVariable { .. } => -14,
            Self::MissingArgument { .. } => -15,
            Self::ExpectedVariable { .. } => -16,
            Self::Io { .. } => -17,
            Self::InvalidArgument { .. } => -18,
            Self::NativeFailure { source, .. } => source.code(),
        }
    }

    /// Returns `true` when the error aborts the whole run instead of failing
    /// a single line.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self,
                 Self::StackOverflow { .. }
                 | Self::StackUnderflow { .. }
                 | Self::NativeFailure { .. })
    }

    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::EmptyLine { line }
            | Self::NotCallable { line, .. }
            | Self::MissingNative { line, .. }
            | Self::StackUnderflow { line }
            | Self::IndentUnderflow { line }
            | Self::InvalidExpression { line, .. }
            | Self::StackOverflow { line, .. }
            | Self::SymbolTableFull { line, .. }
            | Self::ProgramStoreFull { line, .. }
            | Self::ExpressionTooDeep { line, .. }
            | Self::DivisionByZero { line }
            | Self::ExpectedNumber { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::MissingArgument { line, .. }
            | Self::ExpectedVariable { line, .. }
            | Self::Io { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::NativeFailure { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLine { line } => write!(f, "Error on line {line}: Nothing to call."),
            Self::NotCallable { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::MissingNative { name, line } => write!(f,
                                                         "Error on line {line}: Native function '{name}' has no implementation."),
            Self::StackUnderflow { line } => {
                write!(f, "Error on line {line}: Return without an active call.")
            },
            Self::IndentUnderflow { line } => {
                write!(f, "Error on line {line}: Block closed more times than opened.")
            },
            Self::InvalidExpression { details, line } => {
                write!(f, "Error on line {line}: Invalid expression: {details}.")
            },
            Self::StackOverflow { capacity, line } => write!(f,
                                                             "Error on line {line}: Call stack overflow ({capacity} cells)."),
            Self::SymbolTableFull { capacity, line } => write!(f,
                                                               "Error on line {line}: Symbol table is full ({capacity} slots)."),
            Self::ProgramStoreFull { capacity, line } => write!(f,
                                                                "Error on line {line}: Program is too long ({capacity} lines)."),
            Self::ExpressionTooDeep { limit, line } => write!(f,
                                                              "Error on line {line}: Expression nests deeper than {limit} levels."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected number, found {found}.")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' has no value.")
            },
            Self::MissingArgument { index, line } => {
                write!(f, "Error on line {line}: Missing argument {index}.")
            },
            Self::ExpectedVariable { index, line } => write!(f,
                                                             "Error on line {line}: Argument {index} must be a variable name."),
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::NativeFailure { name, source, line } => {
                write!(f, "Error on line {line}: '{name}' failed: {source}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NativeFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
