use logos::Logos;

use crate::{
    ast::Line,
    error::{LineError, ParseError},
    interpreter::{
        lexer::LineToken,
        parser::utils::{column, is_blank_or_comment, lex_error_to_parse_error, word_at},
        symbols::SymbolTable,
        value::{core::Value, operand::Operand},
    },
};

pub type ParseResult<T> = Result<T, LineError>;

/// Where the tokenizer stands with respect to a `>` return capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    /// No `>` seen yet.
    Open,
    /// A `>` was seen at this byte offset; an identifier must follow.
    Expecting(usize),
    /// The capture identifier was read; nothing may follow.
    Closed,
}

/// The token read just before the current one.
#[derive(Debug, Clone, Copy)]
struct Previous {
    start:     usize,
    end:       usize,
    is_number: bool,
}

/// Tokenizes one source line.
///
/// Identifiers are resolved (and created) in `symbols` as they are read, so a
/// line that fails later may still have added names to the table.
///
/// # Parameters
/// - `text`: The line, without its line break.
/// - `line`: 1-based source line number, recorded on the result and on errors.
/// - `symbols`: Symbol table identifiers are resolved against.
///
/// # Returns
/// - `Ok(Some(Line))`: The tokenized statement.
/// - `Ok(None)`: The line is blank or a comment.
/// - `Err(LineError)`: A parse error, or `SymbolTableFull` while resolving an
///   identifier.
///
/// # Example
/// ```
/// use linterp::interpreter::{
///     parser::core::parse_line,
///     symbols::SymbolTable,
///     value::{core::Value, operand::Operand},
/// };
///
/// let mut symbols = SymbolTable::new(10);
/// let line = parse_line("rand 6 > roll", 1, &mut symbols).unwrap().unwrap();
///
/// assert_eq!(line.tokens.len(), 2);
/// assert_eq!(line.tokens[1], Operand::Owned(Value::integer(6)));
/// assert_eq!(line.capture, symbols.lookup("roll"));
///
/// assert!(parse_line("# comment", 2, &mut symbols).unwrap().is_none());
/// assert!(parse_line("print \"open", 3, &mut symbols).is_err());
/// ```
pub fn parse_line(text: &str, line: usize, symbols: &mut SymbolTable) -> ParseResult<Option<Line>> {
    if is_blank_or_comment(text) {
        return Ok(None);
    }

    let mut lexer = LineToken::lexer(text);
    let mut tokens = Vec::new();
    let mut capture = None;
    let mut state = CaptureState::Open;
    let mut previous: Option<Previous> = None;

    while let Some(result) = lexer.next() {
        let span = lexer.span();

        if let Some(prev) = previous
           && span.start == prev.end
        {
            return Err(adjacent_token_error(text, prev, span.start, line).into());
        }

        let token = result.map_err(|e| lex_error_to_parse_error(&e, text, span.start, line))?;

        match state {
            CaptureState::Closed => {
                return Err(ParseError::MisplacedCapture { column: column(span.start),
                                                          line }.into());
            },
            CaptureState::Expecting(_) => {
                let LineToken::Identifier(name) = token else {
                    return Err(ParseError::MisplacedCapture { column: column(span.start),
                                                              line }.into());
                };
                capture = Some(symbols.get_or_create(&name, line)?);
                state = CaptureState::Closed;
            },
            CaptureState::Open => {
                if token == LineToken::Capture {
                    if span.start == 0 {
                        return Err(ParseError::UnexpectedCharacter { found: '>',
                                                                     column: 1,
                                                                     line }.into());
                    }
                    state = CaptureState::Expecting(span.start);
                } else {
                    tokens.push(token_to_operand(token, span.start, line, symbols)?);
                }
            },
        }

        previous = Some(Previous { start:     span.start,
                                   end:       span.end,
                                   is_number: matches!(lexer.slice().as_bytes().first(),
                                                       Some(b'0'..=b'9')), });
    }

    if let CaptureState::Expecting(start) = state {
        return Err(ParseError::MisplacedCapture { column: column(start),
                                                  line }.into());
    }

    Ok(Some(Line { tokens, capture, line }))
}

/// Converts a lexed token into an operand.
///
/// Identifiers are resolved to slots; everything else becomes an owned value.
fn token_to_operand(token: LineToken,
                    start: usize,
                    line: usize,
                    symbols: &mut SymbolTable)
                    -> ParseResult<Operand> {
    let operand = match token {
        LineToken::Str(raw) => Operand::Owned(Value::from_literal(&raw)),
        LineToken::Group(text) => Operand::Owned(Value::deferred(text)),
        LineToken::Identifier(name) => Operand::Slot(symbols.get_or_create(&name, line)?),
        LineToken::Integer(n) => Operand::Owned(Value::integer(n)),
        LineToken::Float(f) => Operand::Owned(Value::float(f)),
        LineToken::Capture => {
            return Err(ParseError::MisplacedCapture { column: column(start),
                                                      line }.into());
        },
    };
    Ok(operand)
}

/// Builds the error for a token that starts right where the previous one ended.
///
/// Anything glued to a number makes the number malformed (`1.2.3`, `12abc`);
/// anything else is trailing garbage (`"a"b`).
fn adjacent_token_error(text: &str, previous: Previous, start: usize, line: usize) -> ParseError {
    if previous.is_number {
        ParseError::MalformedNumber { token: word_at(text, previous.start).to_string(),
                                      column: column(previous.start),
                                      line }
    } else {
        ParseError::TrailingGarbage { column: column(start),
                                      line }
    }
}
