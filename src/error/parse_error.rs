/// Result code shared by every tokenizer failure.
pub const PARSE_ERROR_CODE: i32 = -4;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a source line.
///
/// Columns are 1-based byte offsets into the line text.
pub enum ParseError {
    /// A string literal was not closed on the same line.
    UnterminatedString {
        /// Column of the opening quote.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A parenthesized expression was not closed on the same line.
    UnbalancedParen {
        /// Column of the opening parenthesis.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal could not be read, e.g. `1.2.3` or `1.`.
    MalformedNumber {
        /// The offending text.
        token:  String,
        /// Column where the number starts.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The character found.
        found:  char,
        /// Column of the character.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A token was followed directly by something other than a blank.
    TrailingGarbage {
        /// Column where the garbage starts.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `>` capture without an identifier after it, or with more tokens
    /// following the captured identifier.
    MisplacedCapture {
        /// Column of the offending token.
        column: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Returns the numeric result code reported to the host.
    ///
    /// Every tokenizer failure shares the same code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        PARSE_ERROR_CODE
    }

    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnbalancedParen { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::UnexpectedCharacter { line, .. }
            | Self::TrailingGarbage { line, .. }
            | Self::MisplacedCapture { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { column, line } => write!(f,
                                                                "Error on line {line}: Unterminated string starting at column {column}."),
            Self::UnbalancedParen { column, line } => write!(f,
                                                             "Error on line {line}: Parenthesis at column {column} is never closed."),
            Self::MalformedNumber { token, column, line } => write!(f,
                                                                    "Error on line {line}: Malformed number '{token}' at column {column}."),
            Self::UnexpectedCharacter { found, column, line } => write!(f,
                                                                        "Error on line {line}: Unexpected character '{found}' at column {column}."),
            Self::TrailingGarbage { column, line } => write!(f,
                                                             "Error on line {line}: Tokens must be separated by blanks (column {column})."),
            Self::MisplacedCapture { column, line } => write!(f,
                                                              "Error on line {line}: A return capture must be a single identifier at the end of the line (column {column})."),
        }
    }
}

impl std::error::Error for ParseError {}
