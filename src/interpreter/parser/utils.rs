use crate::{error::ParseError, interpreter::lexer::LexError};

/// Characters that separate tokens.
pub const BLANKS: &[char] = &[' ', '\t', '\x0C', '\r'];

/// Returns `true` if the line holds nothing to load: only blanks, or a
/// comment starting with `#`.
///
/// # Example
/// ```
/// use linterp::interpreter::parser::utils::is_blank_or_comment;
///
/// assert!(is_blank_or_comment("   "));
/// assert!(is_blank_or_comment("  # note"));
/// assert!(!is_blank_or_comment("print 1 # not a comment"));
/// ```
#[must_use]
pub fn is_blank_or_comment(text: &str) -> bool {
    let trimmed = text.trim_start_matches(BLANKS);
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Converts a byte offset into a 1-based column.
#[must_use]
pub const fn column(offset: usize) -> usize {
    offset + 1
}

/// Returns the text from `start` up to the next blank or the end of the line.
#[must_use]
pub fn word_at(text: &str, start: usize) -> &str {
    let rest = text.get(start..).unwrap_or_default();
    rest.find(BLANKS).map_or(rest, |end| &rest[..end])
}

/// Maps a lexer failure at byte offset `start` to a parse error.
///
/// # Parameters
/// - `error`: What the lexer reported.
/// - `text`: The whole source line.
/// - `start`: Byte offset where the failing token starts.
/// - `line`: Source line number.
#[must_use]
pub fn lex_error_to_parse_error(error: &LexError, text: &str, start: usize, line: usize) -> ParseError {
    let column = column(start);
    match error {
        LexError::UnterminatedString => ParseError::UnterminatedString { column, line },
        LexError::UnbalancedParen => ParseError::UnbalancedParen { column, line },
        LexError::MalformedNumber => ParseError::MalformedNumber { token: word_at(text, start).to_string(),
                                                                   column,
                                                                   line },
        LexError::UnexpectedCharacter => {
            let found = text.get(start..).and_then(|rest| rest.chars().next()).unwrap_or(' ');
            ParseError::UnexpectedCharacter { found, column, line }
        },
    }
}
