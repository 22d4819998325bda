use logos::{Lexer, Logos};

use crate::ast::BinaryOperator;

/// Why the lexer rejected the input at some position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
    /// A `"` with no closing quote on the same line.
    UnterminatedString,
    /// A `(` with no matching `)` on the same line.
    UnbalancedParen,
    /// Digits that do not fit a 64-bit integer.
    MalformedNumber,
}

/// Represents a token of a statement line.
///
/// Statement lines are blank-separated sequences of literals, identifiers and
/// parenthesized expressions, optionally followed by a `>` return capture.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\f\r]+")]
pub enum LineToken {
    /// String literal; holds the text between the quotes, unescaped later.
    #[token("\"", lex_string)]
    Str(String),
    /// Parenthesized expression; holds the text between the outer
    /// parentheses.
    #[token("(", lex_group)]
    Group(String),
    /// Identifier tokens; variable or function names such as `x` or `print`.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Float literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// `>`
    #[token(">")]
    Capture,
}

/// Represents a token of a deferred expression.
///
/// Operands use the statement grammar; operators are matched longest first, so
/// `<=` is never read as `<` followed by `=`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\f\r]+")]
pub enum ExprToken {
    /// String literal.
    #[token("\"", lex_string)]
    Str(String),
    /// Parenthesized sub-expression, evaluated recursively.
    #[token("(", lex_group)]
    Group(String),
    /// Identifier tokens.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Float literal tokens.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Binary operators.
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">", |_| BinaryOperator::Greater)]
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("!=", |_| BinaryOperator::NotEqual)]
    #[token("&&", |_| BinaryOperator::And)]
    #[token("||", |_| BinaryOperator::Or)]
    Operator(BinaryOperator),
}

/// Consumes a string literal after its opening quote.
///
/// # Returns
/// - `Ok(String)`: The text between the quotes.
/// - `Err(LexError::UnterminatedString)`: If the line has no closing quote.
fn lex_string<'s, T>(lex: &mut Lexer<'s, T>) -> Result<String, LexError>
    where T: Logos<'s, Source = str>
{
    let rest = lex.remainder();
    let end = rest.find('"').ok_or(LexError::UnterminatedString)?;
    let content = rest[..end].to_string();
    lex.bump(end + 1);
    Ok(content)
}

/// Consumes a parenthesized group after its opening parenthesis, honouring
/// nested parentheses.
///
/// # Returns
/// - `Ok(String)`: The text between the outer parentheses.
/// - `Err(LexError::UnbalancedParen)`: If the group is never closed.
fn lex_group<'s, T>(lex: &mut Lexer<'s, T>) -> Result<String, LexError>
    where T: Logos<'s, Source = str>
{
    let rest = lex.remainder();
    let end = matching_paren(rest).ok_or(LexError::UnbalancedParen)?;
    let content = rest[..end].to_string();
    lex.bump(end + 1);
    Ok(content)
}

/// Finds the byte offset of the `)` that closes a group whose `(` was just
/// consumed.
///
/// # Example
/// ```
/// use linterp::interpreter::lexer::matching_paren;
///
/// assert_eq!(matching_paren("1 + (2 * 3)) * 4"), Some(11));
/// assert_eq!(matching_paren("(1 + 2"), None);
/// ```
#[must_use]
pub fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(offset),
            ')' => depth -= 1,
            _ => {},
        }
    }
    None
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::MalformedNumber)`: If the digits overflow `i64`.
fn parse_integer<'s, T>(lex: &mut Lexer<'s, T>) -> Result<i64, LexError>
    where T: Logos<'s, Source = str>
{
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::MalformedNumber)`: If the slice is not a valid float.
fn parse_float<'s, T>(lex: &mut Lexer<'s, T>) -> Result<f64, LexError>
    where T: Logos<'s, Source = str>
{
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}
