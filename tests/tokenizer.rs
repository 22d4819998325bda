use linterp::{
    error::{LineError, ParseError},
    interpreter::{
        parser::core::parse_line,
        symbols::SymbolTable,
        value::{
            core::{Kind, Value},
            operand::Operand,
        },
    },
};
use pretty_assertions::assert_eq;

fn parse_err(text: &str) -> ParseError {
    let mut symbols = SymbolTable::new(16);
    match parse_line(text, 1, &mut symbols) {
        Err(LineError::Parse(e)) => e,
        other => panic!("{text:?} should not parse, got {other:?}"),
    }
}

#[test]
fn tokens_in_order() {
    let mut symbols = SymbolTable::new(16);
    let line = parse_line("print x \"s\" 3 4.5 (x + 1)", 7, &mut symbols).unwrap()
                                                                         .unwrap();

    let print = symbols.lookup("print").unwrap();
    let x = symbols.lookup("x").unwrap();
    assert_eq!(line.line, 7);
    assert_eq!(line.capture, None);
    assert_eq!(line.tokens,
               vec![Operand::Slot(print),
                    Operand::Slot(x),
                    Operand::Owned(Value::string("s".to_string())),
                    Operand::Owned(Value::integer(3)),
                    Operand::Owned(Value::float(4.5)),
                    Operand::Owned(Value::deferred("x + 1".to_string()))]);
}

#[test]
fn blanks_of_every_kind_separate_tokens() {
    let mut symbols = SymbolTable::new(16);
    let line = parse_line("\tset  x\x0C1\r", 1, &mut symbols).unwrap().unwrap();

    assert_eq!(line.tokens.len(), 3);
}

#[test]
fn nested_parentheses_are_one_token() {
    let mut symbols = SymbolTable::new(16);
    let line = parse_line("set y ((1 + 2) * (3))", 1, &mut symbols).unwrap()
                                                                   .unwrap();

    assert_eq!(line.tokens[2].resolve(&symbols).kind(), Kind::DeferredExpr);
    assert_eq!(line.tokens[2].resolve(&symbols).as_expr(), Some("(1 + 2) * (3)"));
}

#[test]
fn capture_after_arguments() {
    let mut symbols = SymbolTable::new(16);
    let line = parse_line("rand 6 > roll", 1, &mut symbols).unwrap().unwrap();

    assert_eq!(line.tokens.len(), 2);
    assert_eq!(line.capture, symbols.lookup("roll"));
}

#[test]
fn comments_and_blank_lines() {
    let mut symbols = SymbolTable::new(16);

    assert_eq!(parse_line("", 1, &mut symbols).unwrap(), None);
    assert_eq!(parse_line(" \t ", 1, &mut symbols).unwrap(), None);
    assert_eq!(parse_line("  # set x 1", 1, &mut symbols).unwrap(), None);
    assert!(symbols.lookup("x").is_none());
}

#[test]
fn errors_carry_columns() {
    assert_eq!(parse_err("print \"abc"),
               ParseError::UnterminatedString { column: 7,
                                                line:   1, });
    assert_eq!(parse_err("set x (1 + (2)"),
               ParseError::UnbalancedParen { column: 7,
                                             line:   1, });
    assert_eq!(parse_err("print 1.2.3"),
               ParseError::MalformedNumber { token:  "1.2.3".to_string(),
                                             column: 7,
                                             line:   1, });
    assert_eq!(parse_err("print \"a\"b"),
               ParseError::TrailingGarbage { column: 10,
                                             line:   1, });
    assert_eq!(parse_err("print ~"),
               ParseError::UnexpectedCharacter { found:  '~',
                                                 column: 7,
                                                 line:   1, });
}

#[test]
fn misplaced_captures() {
    assert!(matches!(parse_err("rand 6 >"), ParseError::MisplacedCapture { .. }));
    assert!(matches!(parse_err("rand 6 > 5"), ParseError::MisplacedCapture { .. }));
    assert!(matches!(parse_err("rand 6 > a b"), ParseError::MisplacedCapture { .. }));
    assert!(matches!(parse_err(">x"), ParseError::UnexpectedCharacter { found: '>', .. }));
}

#[test]
fn integer_overflow_is_malformed() {
    assert!(matches!(parse_err("print 99999999999999999999"),
                     ParseError::MalformedNumber { .. }));
}
