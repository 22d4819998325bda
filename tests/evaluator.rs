use linterp::{
    error::RuntimeError,
    interpreter::{evaluator::core::ExprContext, symbols::SymbolTable, value::core::Value},
};
use pretty_assertions::assert_eq;

fn eval(text: &str) -> Result<Value, RuntimeError> {
    let mut symbols = SymbolTable::new(32);
    ExprContext::new(&mut symbols, 1, 32).evaluate(text)
}

fn eval_ok(text: &str) -> Value {
    eval(text).unwrap_or_else(|e| panic!("{text:?} failed: {e}"))
}

#[test]
fn literals() {
    assert_eq!(eval_ok("42"), Value::integer(42));
    assert_eq!(eval_ok("2.5"), Value::float(2.5));
}

#[test]
fn table_order_applies_left_to_right() {
    assert_eq!(eval_ok("2 * 3 + 4"), Value::integer(10));
    assert_eq!(eval_ok("2 + 3 * 4"), Value::integer(14));
    assert_eq!(eval_ok("8 / 2 / 2"), Value::integer(2));
    assert_eq!(eval_ok("2 * 6 / 4"), Value::integer(3));
    assert_eq!(eval_ok("1 + 2 < 4"), Value::integer(1));
    assert_eq!(eval_ok("1 < 2 == 1"), Value::integer(1));
}

#[test]
fn every_multiplication_before_any_division() {
    // `*` sits above `/` in the table, so `8 / 2 * 2` is `8 / (2 * 2)`.
    assert_eq!(eval_ok("8 / 2 * 2"), Value::integer(2));
}

#[test]
fn addition_before_subtraction() {
    assert_eq!(eval_ok("10 - 2 + 3"), Value::integer(5));
}

#[test]
fn parentheses_override_the_table() {
    assert_eq!(eval_ok("(2 + 3) * 4"), Value::integer(20));
    assert_eq!(eval_ok("((1 + 1) * (2 + 2)) - 1"), Value::integer(7));
}

#[test]
fn two_character_operators_are_not_split() {
    assert_eq!(eval_ok("3 <= 3"), Value::integer(1));
    assert_eq!(eval_ok("3 >= 4"), Value::integer(0));
    assert_eq!(eval_ok("3 != 4"), Value::integer(1));
    assert_eq!(eval_ok("3<=3"), Value::integer(1));
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(eval_ok("1 + 0.5"), Value::float(1.5));
    assert_eq!(eval_ok("7 / 2.0"), Value::float(3.5));
    assert_eq!(eval_ok("7 / 2"), Value::integer(3));
    assert_eq!(eval_ok("7 % 3"), Value::integer(1));
}

#[test]
fn logic_yields_zero_or_one() {
    assert_eq!(eval_ok("5 && 2"), Value::integer(1));
    assert_eq!(eval_ok("0 || 0.0"), Value::integer(0));
    assert_eq!(eval_ok("0 || 1 && 0"), Value::integer(0));
}

#[test]
fn variables_are_read_from_the_table() {
    let mut symbols = SymbolTable::new(8);
    let x = symbols.get_or_create("x", 1).unwrap();
    symbols.set(x, Value::float(1.5));

    let result = ExprContext::new(&mut symbols, 1, 32).evaluate("x * 2").unwrap();

    assert_eq!(result, Value::float(3.0));
    assert_eq!(symbols.get(x), &Value::float(1.5));
}

#[test]
fn malformed_expressions() {
    for text in ["", "1 +", "* 2", "1 2", "1 + + 2", "1 $ 2", "(1 + 2", "\"open"] {
        assert!(matches!(eval(text), Err(RuntimeError::InvalidExpression { .. })),
                "{text:?} should be invalid");
    }
}

#[test]
fn operand_errors() {
    assert_eq!(eval("1 / 0"), Err(RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(eval("\"a\" * 2"),
               Err(RuntimeError::ExpectedNumber { found: "string",
                                                  line:  1, }));
    assert_eq!(eval("y + 1"),
               Err(RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                     line: 1, }));
}

#[test]
fn nesting_limit() {
    let mut symbols = SymbolTable::new(8);
    let mut ctx = ExprContext::new(&mut symbols, 3, 1);

    assert_eq!(ctx.evaluate("(1)").unwrap(), Value::integer(1));
    assert_eq!(ctx.evaluate("((1))"),
               Err(RuntimeError::ExpressionTooDeep { limit: 1,
                                                     line:  3, }));
}
