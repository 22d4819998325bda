use std::fs;

use linterp::{Outcome, run_source};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lt"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("expected"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("input")).unwrap_or_default();

        count += 1;
        let outcome = run(&source, &input);
        assert_eq!(outcome.output, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str, input: &str) -> Outcome {
    run_source(src, input).unwrap_or_else(|e| panic!("Interpreter setup failed: {e}"))
}

fn assert_output(src: &str, expected: &str) {
    let outcome = run(src, "");
    if let Some(e) = outcome.errors.first() {
        panic!("Script failed: {e}");
    }
    assert_eq!(outcome.output, expected);
}

fn assert_failure(src: &str, code: i32) {
    let outcome = run(src, "");
    let codes = outcome.errors.iter().map(|e| e.code()).collect::<Vec<_>>();
    assert!(codes.contains(&code),
            "Expected error code {code}, got {codes:?} for script:\n{src}");
}

#[test]
fn set_then_print() {
    assert_output("set x 5\nprint x", "5");
    assert_output("set x 2.5\nprint x", "2.500000");
    assert_output("set x \"hi\"\nprint x", "hi");
}

#[test]
fn print_expression() {
    assert_output("print (3 + 4 * 2)", "11");
    assert_output("print ((3 + 4) * 2)", "14");
    assert_output("print (7 / 2) \" \" (7 % 2)", "3 1");
}

#[test]
fn print_concatenates_arguments_without_separator() {
    assert_output("print 1 2 \"x\" 3.5", "123x3.500000");
}

#[test]
fn string_literal_unescapes_newline_only() {
    assert_output("print \"a\\nb\"", "a\nb");
    assert_output("print \"a\\tb\"", "a\\tb");
}

#[test]
fn parse_error_does_not_stop_later_lines() {
    let outcome = run("print \"unterminated\nprint 7", "");

    assert_eq!(outcome.output, "7");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].code(), -4);
    assert_eq!(outcome.errors[0].line(), 1);
}

#[test]
fn malformed_tokens() {
    assert_failure("print 1.2.3", -4);
    assert_failure("print 1.", -4);
    assert_failure("print 12abc", -4);
    assert_failure("print \"a\"b", -4);
    assert_failure("print (1 + 2", -4);
    assert_failure("print @", -4);
    assert_failure("> x", -4);
    assert_failure("rand 6 >", -4);
    assert_failure("rand 6 > a b", -4);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("# a comment\n\n   \nprint 1\n  # indented comment", "1");
}

#[test]
fn dispatch_errors() {
    assert_failure("x 1", -2);
    assert_failure("5", -2);
    assert_failure("  > x", -1);
}

#[test]
fn expression_errors() {
    assert_failure("print (1 +)", -7);
    assert_failure("print (1 2)", -7);
    assert_failure("print ()", -7);
    assert_failure("print (1 / 0)", -12);
    assert_failure("print (1 % 0)", -12);
    assert_failure("print (\"a\" + 1)", -13);
    assert_failure("print (nope + 1)", -14);
}

#[test]
fn float_division_by_zero_is_not_an_error() {
    assert_output("set x (1.0 / 0)\ntp x", "float\n");
}

#[test]
fn unmatched_end_is_reported() {
    let outcome = run("end\nprint 1", "");

    assert_eq!(outcome.output, "1");
    assert_eq!(outcome.errors[0].code(), -6);
}

#[test]
fn if_blocks() {
    assert_output("if 1\nprint \"a\"\nend\nprint \"b\"", "ab");
    assert_output("if 0\nprint \"a\"\nend\nprint \"b\"", "b");
    assert_output("if \"\"\nprint \"a\"\nend\nprint \"b\"", "b");
    assert_output("if (2 > 1 && 3 > 2)\nprint \"yes\"\nend", "yes");
}

#[test]
fn nested_if_inside_skipped_block_stays_skipped() {
    let src = "if 0\nif 1\nprint \"inner\"\nend\nprint \"outer\"\nend\nprint \"after\"";
    assert_output(src, "after");
}

#[test]
fn while_loop_counts() {
    let src = "set i 0\nwhile (i < 5)\nprint i\nset i (i + 1)\nend";
    assert_output(src, "01234");
}

#[test]
fn while_loop_with_false_condition_never_runs() {
    assert_output("while 0\nprint \"x\"\nend\nprint \"y\"", "y");
}

#[test]
fn nested_while_loops() {
    let src = "set i 0
while (i < 2)
  set j 0
  while (j < 3)
    print i j \" \"
    set j (j + 1)
  end
  set i (i + 1)
end";
    assert_output(src, "00 01 02 10 11 12 ");
}

#[test]
fn function_with_return_value() {
    let src = "func add\nret (arg0 + arg1)\nend\nadd 2 3 > sum\nprint sum";
    assert_output(src, "5");
}

#[test]
fn function_body_is_not_run_at_definition() {
    assert_output("func f\nprint \"body\"\nend\nprint \"defined\"", "defined");
}

#[test]
fn function_without_ret_returns_at_end() {
    let src = "func greet\nprint \"hi \" arg0\nend\ngreet \"bob\"\nprint \"!\"";
    assert_output(src, "hi bob!");
}

#[test]
fn function_called_in_a_loop() {
    let src = "func twice
  ret (arg0 * 2)
end
set i 1
while (i < 4)
  twice i > t
  print t \" \"
  set i (i + 1)
end";
    assert_output(src, "2 4 6 ");
}

#[test]
fn ret_from_inside_a_loop() {
    let src = "func first
  set k 0
  while 1
    if (k == arg0)
      ret k
    end
    set k (k + 1)
  end
end
first 3 > found
print found";
    assert_output(src, "3");
}

#[test]
fn ret_outside_a_function_is_fatal() {
    assert_failure("ret 1", -5);
}

#[test]
fn failed_if_condition_skips_its_block() {
    let src = "set i 0
while (i < 2)
  if (10 / (1 - i))
    print \"guarded\" i \" \"
  end
  set i (i + 1)
end";
    let outcome = run(src, "");

    assert_eq!(outcome.output, "guarded0 ");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].code(), -12);
}

#[test]
fn failed_while_condition_skips_its_body() {
    let src = "func f
  while (nope)
    print \"body\"
  end
  print \"after\"
end
f
print \" done\"";
    let outcome = run(src, "");

    assert_eq!(outcome.output, "after done");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].code(), -14);
}

#[test]
fn runaway_recursion_overflows_the_stack() {
    let outcome = run("func down\ndown 1\nend\ndown 1\nprint \"after\"", "");

    assert_eq!(outcome.errors[0].code(), -8);
    assert!(outcome.errors[0].is_fatal());
    assert_eq!(outcome.output, "after");
}

#[test]
fn type_names() {
    assert_output("tp 1\ntp 1.5\ntp \"s\"\ntp print", "integer\nfloat\nstring\nfunc\n");
    assert_output("tp never", "unknown\n");
}

#[test]
fn conversions() {
    assert_output("set x \"12.75abc\"\nfloat x\nprint x", "12.750000");
    assert_output("set x 9.99\nint x\nprint x", "9");
    assert_output("set x (0 - 7.5)\nint x\nprint x", "-7");
    assert_output("set x \"abc\"\nint x\nprint x", "0");
    assert_output("set x 3\nstr x\nconcat x \"px\"\nprint x", "3px");
}

#[test]
fn conversions_need_a_variable() {
    assert_failure("int 5", -16);
}

#[test]
fn missing_argument_is_reported() {
    assert_failure("set x", -15);
}

#[test]
fn gets_reads_lines() {
    let outcome = run("gets a\ngets b\ngets c\nprint a \"|\" b \"|\" c", "one\ntwo\r\n");

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.output, "one|two|");
}

#[test]
fn rand_stays_in_range() {
    let src = "set i 0\nwhile (i < 50)\nrand 3 > r\nif (r < 0 || r > 2)\nprint \"bad\"\nend\nset i (i + 1)\nend";
    assert_output(src, "");
}

#[test]
fn rand_rejects_non_positive_bound() {
    assert_failure("rand 0 > r", -18);
}

#[test]
fn line_is_a_no_op() {
    assert_output("line\nline 1 2\nprint \"ok\"", "ok");
}
