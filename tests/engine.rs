use linterp::{
    error::{LineError, RuntimeError},
    interpreter::{
        engine::{
            config::EngineConfig,
            core::Interpreter,
            host::{Host, SharedBuffer},
        },
        evaluator::core::EvalResult,
        function::core::{CORE_NATIVES, LIBRARY_NATIVES, register_library},
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn interpreter_with(config: EngineConfig) -> (Interpreter, SharedBuffer) {
    let output = SharedBuffer::default();
    let host = Host::new(output.clone(), std::io::empty());
    let mut interp = Interpreter::with_host(config, host).unwrap();
    register_library(&mut interp).unwrap();
    (interp, output)
}

fn interpreter() -> (Interpreter, SharedBuffer) {
    interpreter_with(EngineConfig::default())
}

fn feed_all(interp: &mut Interpreter, lines: &[&str]) {
    for line in lines {
        if let Err(e) = interp.feed_line(line) {
            panic!("Line {line:?} failed: {e}");
        }
    }
}

#[test]
fn blank_and_comment_lines_are_not_stored() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp, &["", "   ", "# comment", "set x 1"]);

    assert_eq!(interp.program_len(), 1);
}

#[test]
fn skip_suppresses_deeper_lines_until_block_closes() {
    let (mut interp, output) = interpreter();
    feed_all(&mut interp, &["if 0"]);

    assert_eq!(interp.indent(), 1);
    assert_eq!(interp.skip_level(), Some(1));
    assert!(interp.is_skipping());

    feed_all(&mut interp, &["print \"hidden\"", "set x 1"]);
    assert_eq!(interp.variable("x"), Some(&Value::undefined()));

    feed_all(&mut interp, &["end"]);
    assert_eq!(interp.indent(), 0);
    assert_eq!(interp.skip_level(), None);

    feed_all(&mut interp, &["print \"shown\""]);
    assert_eq!(output.contents(), "shown");
}

#[test]
fn indentation_underflow_leaves_state_untouched() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp, &["set x 1"]);

    let err = interp.feed_line("end").unwrap_err();

    assert_eq!(err.code(), -6);
    assert!(!err.is_fatal());
    assert_eq!(interp.indent(), 0);
    assert_eq!(interp.program_len(), 1);

    feed_all(&mut interp, &["set x 2"]);
    assert_eq!(interp.variable("x"), Some(&Value::integer(2)));
}

#[test]
fn nested_calls_restore_pc_and_indent() {
    let (mut interp, output) = interpreter();
    feed_all(&mut interp,
             &["func inner",
               "  print \"i\" arg0",
               "end",
               "func outer",
               "  print \"o\"",
               "  inner 1",
               "  inner 2",
               "end",
               "func top",
               "  outer",
               "  outer",
               "end"]);

    let before = (interp.pc(), interp.indent(), interp.stack_size());
    feed_all(&mut interp, &["top"]);
    let after = (interp.pc(), interp.indent(), interp.stack_size());

    assert_eq!(output.contents(), "oi1i2oi1i2");
    assert_eq!(interp.call_depth(), 0);
    assert_eq!(after.1, before.1);
    assert_eq!(after.2, before.2);
    assert_eq!(after.0, interp.program_len());
}

#[test]
fn call_inside_loop_returns_to_loop_indentation() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp,
             &["func noop", "end", "set i 0", "while (i < 2)", "  noop"]);

    assert_eq!(interp.indent(), 1);
    assert_eq!(interp.call_depth(), 0);

    feed_all(&mut interp, &["  set i (i + 1)", "end"]);
    assert_eq!(interp.indent(), 0);
    assert_eq!(interp.stack_size(), 0);
    assert_eq!(interp.variable("i"), Some(&Value::integer(2)));
}

#[test]
fn ret_stores_into_capture() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp,
             &["func pick", "  ret \"picked\"", "end", "pick > choice"]);

    assert_eq!(interp.variable("choice"), Some(&Value::string("picked".to_string())));
}

#[test]
fn ret_without_value_leaves_capture_alone() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp,
             &["set c 9", "func nothing", "  ret", "end", "nothing > c"]);

    assert_eq!(interp.variable("c"), Some(&Value::integer(9)));
}

#[test]
fn arguments_bind_to_global_arg_slots() {
    let (mut interp, _) = interpreter();
    feed_all(&mut interp,
             &["func f", "end", "f 1 \"two\" (1 + 2)"]);

    assert_eq!(interp.variable("arg0"), Some(&Value::integer(1)));
    assert_eq!(interp.variable("arg1"), Some(&Value::string("two".to_string())));
    assert_eq!(interp.variable("arg2"), Some(&Value::integer(3)));
}

#[test]
fn stack_overflow_aborts_and_resets() {
    let config = EngineConfig { max_stack: 16,
                                ..EngineConfig::default() };
    let (mut interp, output) = interpreter_with(config);
    feed_all(&mut interp, &["func down", "  down", "end"]);

    let err = interp.feed_line("down").unwrap_err();

    assert_eq!(err,
               LineError::Runtime(RuntimeError::StackOverflow { capacity: 16,
                                                                line:     2, }));
    assert_eq!(interp.stack_size(), 0);
    assert_eq!(interp.indent(), 0);
    assert_eq!(interp.skip_level(), None);
    assert_eq!(interp.pc(), interp.program_len());

    feed_all(&mut interp, &["print \"recovered\""]);
    assert_eq!(output.contents(), "recovered");
}

#[test]
fn symbol_table_full() {
    let config = EngineConfig { max_symbols: 16,
                                ..EngineConfig::default() };
    let (mut interp, _) = interpreter_with(config);
    let free = 16 - CORE_NATIVES.len() - LIBRARY_NATIVES.len();
    assert_eq!(interp.symbols().len(), 16 - free);

    for i in 0..free {
        interp.feed_line(&format!("set v{i} {i}")).unwrap();
    }
    let err = interp.feed_line("set overflow 1").unwrap_err();

    assert_eq!(err.code(), -9);
}

#[test]
fn too_few_symbols_for_natives() {
    let output = SharedBuffer::default();
    let host = Host::new(output, std::io::empty());
    let config = EngineConfig { max_symbols: 2,
                                ..EngineConfig::default() };

    let err = Interpreter::with_host(config, host).unwrap_err();
    assert_eq!(err.code(), -9);
}

#[test]
fn program_store_full() {
    let config = EngineConfig { max_lines: 2,
                                ..EngineConfig::default() };
    let (mut interp, _) = interpreter_with(config);
    feed_all(&mut interp, &["set a 1", "set b 2"]);

    let err = interp.feed_line("set c 3").unwrap_err();

    assert_eq!(err.code(), -10);
    assert_eq!(interp.program_len(), 2);
}

#[test]
fn expression_depth_is_bounded() {
    let config = EngineConfig { max_expr_depth: 2,
                                ..EngineConfig::default() };
    let (mut interp, _) = interpreter_with(config);

    feed_all(&mut interp, &["set x ((1 + 1))"]);
    let err = interp.feed_line("set y ((((1))))").unwrap_err();

    assert_eq!(err.code(), -11);
}

#[test]
fn declared_native_without_implementation_is_rejected() {
    let (mut interp, _) = interpreter();
    interp.declare_native("later").unwrap();

    let err = interp.feed_line("later 1").unwrap_err();

    assert_eq!(err.code(), -3);
    assert_eq!(interp.program_len(), 0);
}

fn double(interp: &mut Interpreter) -> EvalResult<()> {
    let text = interp.arg(0)?.display().repeat(2);
    interp.set_return(Value::string(text));
    Ok(())
}

#[test]
fn host_registered_native() {
    let (mut interp, _) = interpreter();
    interp.register_native("double", double).unwrap();

    feed_all(&mut interp, &["double 21 > d"]);

    assert_eq!(interp.variable("d"), Some(&Value::string("2121".to_string())));
}

#[test]
fn native_error_is_fatal_and_keeps_code() {
    let (mut interp, _) = interpreter();

    let err = interp.feed_line("set 1 2").unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(err.code(), -16);
}

#[test]
fn later_line_errors_are_reported_after_the_run() {
    let (mut interp, output) = interpreter();
    feed_all(&mut interp,
             &["set i 0", "while (i < 2)", "  print (10 / (1 - i))", "  set i (i + 1)"]);

    let err = interp.feed_line("end").unwrap_err();

    assert_eq!(err.code(), -12);
    assert!(!err.is_fatal());
    assert_eq!(output.contents(), "10");
    assert_eq!(interp.variable("i"), Some(&Value::integer(2)));
    assert_eq!(interp.program_len(), 5);
}

#[test]
fn seeded_rand_is_reproducible() {
    let config = EngineConfig { seed: Some(7),
                                ..EngineConfig::default() };
    let rolls = |config: EngineConfig| {
        let (mut interp, output) = interpreter_with(config);
        feed_all(&mut interp,
                 &["set i 0", "while (i < 10)", "  rand 100 > r", "  print r \",\"", "  set i (i + 1)", "end"]);
        output.contents()
    };

    assert_eq!(rolls(config.clone()), rolls(config));
}

#[test]
fn reader_lines_that_are_not_utf8_do_not_stop_the_load() {
    let (mut interp, output) = interpreter();
    let source: &[u8] = b"print \"a\"\r\nprint \"\xff\"\n\xfe\nprint \"b\"";
    let mut errors = Vec::new();

    interp.feed_reader(source, |e| errors.push(e)).unwrap();

    assert_eq!(output.contents(), "a\u{FFFD}b");
    assert_eq!(errors.iter().map(LineError::code).collect::<Vec<_>>(), vec![-4]);
    assert_eq!(interp.program_len(), 3);
}
