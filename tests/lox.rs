//! End-to-end runs through `Lox`: scan, parse and execute with captured
//! output and diagnostics.

use pretty_assertions::assert_eq;

use treelox::diagnostics::DiagnosticBuffer;
use treelox::interpreter::print_handler::PrintHandler;
use treelox::{Lox, Options, RunStatus};

fn session() -> Lox<DiagnosticBuffer> {
    Lox::new(PrintHandler::buffer(), DiagnosticBuffer::new())
}

/// Runs `source` in a fresh session and returns status, output and messages.
fn run(source: &str) -> (RunStatus, String, Vec<String>) {
    let mut lox = session();
    let status = lox.run(source);
    let output = lox.interpreter_mut().output_mut().take_output();
    let messages = lox
        .reporter()
        .messages()
        .into_iter()
        .map(str::to_string)
        .collect();
    (status, output, messages)
}

#[test]
fn clean_program_runs_to_completion() {
    let (status, output, messages) = run("var greeting = \"hello\";\nprint greeting + \" world\";");
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(output, "hello world\n");
    assert!(messages.is_empty());
    assert_eq!(status.exit_code(), 0);
}

#[test]
fn division_by_zero_is_not_a_fault() {
    let (status, output, _) = run("print 1 / 0; print -1 / 0;");
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(output, "inf\n-inf\n");
}

#[test]
fn string_concatenation_and_mixed_plus() {
    assert_eq!(run("print \"a\" + \"b\";").1, "ab\n");

    let (status, output, messages) = run("print 1 + \"a\";");
    assert_eq!(status, RunStatus::RuntimeError);
    assert_eq!(output, "");
    assert_eq!(messages, vec!["Operands must be two numbers or two strings."]);
    assert_eq!(status.exit_code(), 70);
}

#[test]
fn truthiness_of_every_kind() {
    let source = r#"
        if (nil) print "nil"; else print "nil is falsy";
        if (false) print "false"; else print "false is falsy";
        if (0) print "0 is truthy";
        if ("") print "empty string is truthy";
        if (true) print "true is truthy";
    "#;
    assert_eq!(
        run(source).1,
        "nil is falsy\nfalse is falsy\n0 is truthy\nempty string is truthy\ntrue is truthy\n"
    );
}

#[test]
fn shadowing_and_outer_assignment() {
    assert_eq!(run("var x = 1; { var x = 2; print x; } print x;").1, "2\n1\n");
    assert_eq!(run("var x = 1; { x = 2; } print x;").1, "2\n");
}

#[test]
fn short_circuit_has_no_side_effect() {
    let (status, output, _) =
        run("var touched = false; false and (touched = true); print touched;");
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(output, "false\n");
}

#[test]
fn precedence_of_unary_product_and_sum() {
    assert_eq!(run("print -2 * 3 + 4;").1, "-2\n");
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let (status, output, messages) = run("for (var i = 0; i < 3; i = i + 1) print i;\nprint i;");
    assert_eq!(output, "0\n1\n2\n");
    assert_eq!(status, RunStatus::RuntimeError);
    assert_eq!(messages, vec!["Undefined variable 'i'."]);
}

#[test]
fn parse_recovery_reports_once_and_runs_the_rest() {
    let mut lox = session();
    let status = lox.run("print 1 +;\nprint \"ok\";");

    assert_eq!(status, RunStatus::StaticError);
    assert_eq!(status.exit_code(), 65);
    assert_eq!(lox.interpreter_mut().output_mut().take_output(), "ok\n");

    let diagnostics = &lox.reporter().diagnostics;
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Expect expression.");
    assert_eq!(diagnostics[0].location, " at ';'");
    assert_eq!(diagnostics[0].line, 1);
}

#[test]
fn static_error_outranks_runtime_error() {
    let (status, _, messages) = run("print;\nprint nil + 1;");
    assert_eq!(status, RunStatus::StaticError);
    assert_eq!(
        messages,
        vec!["Expect expression.", "Operands must be two numbers or two strings."]
    );
}

#[test]
fn scan_errors_are_static_errors() {
    let (status, output, messages) = run("print 1; @\nprint 2;");
    assert_eq!(status, RunStatus::StaticError);
    assert_eq!(output, "1\n2\n");
    assert_eq!(messages, vec!["Unexpected character."]);
}

#[test]
fn undefined_variables_report_their_line() {
    let mut lox = session();
    assert_eq!(lox.run("var a = 1;\nprint a;\nprint b;"), RunStatus::RuntimeError);
    assert_eq!(lox.reporter().diagnostics[0].line, 3);
    assert_eq!(lox.reporter().diagnostics[0].location, " at 'b'");

    lox.reporter_mut().clear();
    assert_eq!(lox.run("\n\nmissing = 1;"), RunStatus::RuntimeError);
    assert_eq!(lox.reporter().diagnostics[0].message, "Undefined variable 'missing'.");
    assert_eq!(lox.reporter().diagnostics[0].line, 3);
}

#[test]
fn globals_survive_across_runs_and_faults() {
    let mut lox = session();
    assert_eq!(lox.run("var total = 1;"), RunStatus::Ok);
    assert_eq!(
        lox.run("{ var scratch = 2; total = total + scratch; print nil - 1; }"),
        RunStatus::RuntimeError
    );
    assert_eq!(lox.run("print total;"), RunStatus::Ok);
    assert_eq!(lox.interpreter_mut().output_mut().take_output(), "3\n");
    assert_eq!(lox.interpreter().environment().depth(), 1);
}

#[test]
fn print_tokens_dumps_json_lines() {
    let mut lox = session().with_options(Options {
        print_tokens: true,
        print_ast: false,
    });
    assert_eq!(lox.run("print 1;"), RunStatus::Ok);

    let output = lox.interpreter_mut().output_mut().take_output();
    let lines: Vec<&str> = output.lines().collect();
    // Four tokens, then the program's own output.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "1");

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["kind"], "PRINT");
    assert_eq!(first["lexeme"], "print");
    assert_eq!(first["line"], 1);

    let number: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(number["kind"], "NUMBER");
    assert_eq!(number["literal"]["type"], "Number");
    assert_eq!(number["literal"]["value"].as_f64(), Some(1.0));

    let eof: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
    assert_eq!(eof["kind"], "EOF");
}

#[test]
fn print_ast_dumps_prefix_forms() {
    let mut lox = session().with_options(Options {
        print_tokens: false,
        print_ast: true,
    });
    assert_eq!(lox.run("var a = 1;\nprint -2 * 3 + a;"), RunStatus::Ok);
    assert_eq!(
        lox.interpreter_mut().output_mut().take_output(),
        "(var a 1)\n(print (+ (* (- 2) 3) a))\n-5\n"
    );
}

#[test]
fn long_operator_chains_evaluate_without_overflow() {
    let terms = 100_000;
    let source = format!("print 1{};", " + 1".repeat(terms));
    let (status, output, messages) = run(&source);
    assert_eq!(status, RunStatus::Ok);
    assert!(messages.is_empty());
    assert_eq!(output, format!("{}\n", terms + 1));
}

#[test]
fn long_chains_print_in_prefix_form() {
    let mut lox = session().with_options(Options {
        print_tokens: false,
        print_ast: true,
    });
    let source = format!("print 0{};", " - 1".repeat(50_000));
    assert_eq!(lox.run(&source), RunStatus::Ok);

    let output = lox.interpreter_mut().output_mut().take_output();
    let mut lines = output.lines();
    let tree = lines.next().unwrap_or_default();
    assert!(tree.starts_with("(print (- (- (- "));
    assert_eq!(tree.matches("(- ").count(), 50_000);
    assert_eq!(lines.next(), Some("-50000"));
}
