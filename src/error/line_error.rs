use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq)]
/// An error reported for one line, either while tokenizing or while running.
pub enum LineError {
    /// The line could not be tokenized and was discarded.
    Parse(ParseError),
    /// The line could not be executed.
    Runtime(RuntimeError),
}

impl LineError {
    /// Returns the numeric result code reported to the host.
    ///
    /// # Example
    /// ```
    /// use linterp::error::{LineError, ParseError};
    ///
    /// let err = LineError::from(ParseError::TrailingGarbage { column: 3, line: 1 });
    /// assert_eq!(err.code(), -4);
    /// ```
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }

    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// Returns `true` when the error aborted the run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Parse(_) => false,
            Self::Runtime(e) => e.is_fatal(),
        }
    }
}

impl From<ParseError> for LineError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for LineError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
