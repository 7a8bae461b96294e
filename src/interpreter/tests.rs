use pretty_assertions::assert_eq;

use super::print_handler::PrintHandler;
use super::Interpreter;
use crate::diagnostics::DiagnosticBuffer;
use crate::error::LoxError;
use crate::lexer::tokenize;
use crate::parser::parse;

struct Run {
    output: String,
    result: Result<(), LoxError>,
    interpreter: Interpreter,
}

fn run_on(mut interpreter: Interpreter, source: &str) -> Run {
    let mut diagnostics = DiagnosticBuffer::new();
    let tokens = tokenize(source, &mut diagnostics);
    let program = parse(tokens, &mut diagnostics);
    assert!(diagnostics.is_empty(), "static errors: {:?}", diagnostics.diagnostics);

    let result = interpreter.interpret(&program, &mut diagnostics);
    let output = interpreter.output_mut().take_output();
    Run {
        output,
        result,
        interpreter,
    }
}

fn run(source: &str) -> Run {
    run_on(Interpreter::with_output(PrintHandler::buffer()), source)
}

fn output(source: &str) -> String {
    let run = run(source);
    assert!(run.result.is_ok(), "runtime error: {:?}", run.result);
    run.output
}

fn runtime_error(source: &str) -> LoxError {
    match run(source).result {
        Err(err) => err,
        Ok(()) => panic!("expected a runtime error for {source:?}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(output("print -2 * 3 + 4;"), "-2\n");
    assert_eq!(output("print (1 + 2) * 3;"), "9\n");
    assert_eq!(output("print 7 / 2;"), "3.5\n");
    assert_eq!(output("print 10 - 4 - 3;"), "3\n");
}

#[test]
fn division_by_zero_follows_ieee754() {
    assert_eq!(output("print 1 / 0;"), "inf\n");
    assert_eq!(output("print -1 / 0;"), "-inf\n");
    assert_eq!(output("print 0 / 0;"), "NaN\n");
    assert_eq!(output("var n = 0 / 0; print n == n;"), "false\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(output("print \"a\" + \"b\";"), "ab\n");
}

#[test]
fn mixed_plus_is_a_type_error() {
    let err = runtime_error("print 1 + \"a\";");
    assert_eq!(err.message, "Operands must be two numbers or two strings.");
    assert_eq!(err.location, " at '+'");
}

#[test]
fn arithmetic_on_non_numbers_is_a_type_error() {
    assert_eq!(runtime_error("print \"a\" * 2;").message, "Operands must be a number.");
    assert_eq!(runtime_error("print nil < 1;").message, "Operands must be a number.");
    assert_eq!(runtime_error("print -\"a\";").message, "Operand must be a number.");
}

#[test]
fn truthiness() {
    assert_eq!(
        output("print !nil; print !false; print !0; print !\"\"; print !true;"),
        "true\ntrue\nfalse\nfalse\nfalse\n"
    );
    assert_eq!(output("if (0) print \"yes\"; else print \"no\";"), "yes\n");
    assert_eq!(output("if (nil) print \"yes\"; else print \"no\";"), "no\n");
}

#[test]
fn equality_is_structural_without_coercion() {
    let source = r#"
        print nil == nil;
        print nil == false;
        print 1 == 1;
        print "1" == 1;
        print "a" != "b";
    "#;
    assert_eq!(output(source), "true\nfalse\ntrue\nfalse\ntrue\n");
}

#[test]
fn comparisons() {
    assert_eq!(
        output("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 5;"),
        "true\ntrue\nfalse\nfalse\n"
    );
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    assert_eq!(output("print nil or \"default\";"), "default\n");
    assert_eq!(output("print 1 or 2;"), "1\n");
    assert_eq!(output("print nil and 2;"), "nil\n");
    assert_eq!(output("print 1 and 2;"), "2\n");
}

#[test]
fn short_circuit_skips_the_right_operand() {
    assert_eq!(output("var a = 0; false and (a = 1); print a;"), "0\n");
    assert_eq!(output("var a = 0; true or (a = 1); print a;"), "0\n");
    assert_eq!(output("var a = 0; true and (a = 1); print a;"), "1\n");
    // An undefined variable on the skipped side never faults.
    assert_eq!(output("print false and undefinedThing;"), "false\n");
}

#[test]
fn right_operand_is_evaluated_first() {
    assert_eq!(output("var a = 1; print (a = a * 10) - (a = a + 2);"), "27\n");
}

#[test]
fn assignment_yields_its_value() {
    assert_eq!(output("var a; var b; a = b = 3; print a; print b;"), "3\n3\n");
}

#[test]
fn uninitialized_variables_are_nil() {
    assert_eq!(output("var a; print a;"), "nil\n");
}

#[test]
fn redefining_a_global_is_allowed() {
    assert_eq!(output("var a = 1; var a = \"two\"; print a;"), "two\n");
}

#[test]
fn block_shadowing() {
    assert_eq!(output("var x = 1; { var x = 2; print x; } print x;"), "2\n1\n");
}

#[test]
fn assignment_in_block_targets_outer_scope() {
    assert_eq!(output("var x = 1; { x = 2; } print x;"), "2\n");
}

#[test]
fn block_locals_are_not_visible_outside() {
    let err = runtime_error("{ var inner = 1; } print inner;");
    assert_eq!(err.message, "Undefined variable 'inner'.");
}

#[test]
fn undefined_variable_reports_its_line() {
    let err = runtime_error("var a = 1;\n\nprint b;");
    assert_eq!(err.line, 3);
    assert_eq!(err.location, " at 'b'");

    let err = runtime_error("\nc = 1;");
    assert_eq!(err.message, "Undefined variable 'c'.");
    assert_eq!(err.line, 2);
}

#[test]
fn while_loop() {
    assert_eq!(output("var i = 0; while (i < 3) { print i; i = i + 1; }"), "0\n1\n2\n");
}

#[test]
fn for_loop_scopes_its_variable() {
    let run = run("for (var i = 0; i < 3; i = i + 1) print i; print i;");
    assert_eq!(run.output, "0\n1\n2\n");
    let err = run.result.unwrap_err();
    assert_eq!(err.message, "Undefined variable 'i'.");
}

#[test]
fn nested_if_else() {
    assert_eq!(
        output(
            "var n = 5; if (n > 3) if (n > 10) print \"big\"; else print \"medium\"; \
             else print \"small\";"
        ),
        "medium\n"
    );
}

#[test]
fn fault_stops_the_rest_of_the_program() {
    let run = run("print 1; print -nil; print 2;");
    assert_eq!(run.output, "1\n");
    assert!(run.result.is_err());
}

#[test]
fn fault_inside_a_block_restores_the_global_scope() {
    let run = run("var x = \"global\"; { var x = \"inner\"; { print nil + 1; } }");
    assert!(run.result.is_err());
    assert_eq!(run.interpreter.environment().depth(), 1);

    // The next run still sees globals, not the abandoned block scope.
    let run = run_on(run.interpreter, "print x;");
    assert_eq!(run.output, "global\n");
}

#[test]
fn fault_inside_a_loop_body_restores_scope() {
    let run = run("var i = 0; while (true) { var t = i; i = i + 1; if (i > 2) print t + \"x\"; }");
    assert!(run.result.is_err());
    assert_eq!(run.interpreter.environment().depth(), 1);
    assert_eq!(run_on(run.interpreter, "print i;").output, "3\n");
}

#[test]
fn globals_persist_between_interpret_calls() {
    let first = run("var count = 41;");
    let second = run_on(first.interpreter, "count = count + 1; print count;");
    assert_eq!(second.output, "42\n");
}

#[test]
fn runtime_faults_reach_the_reporter() {
    let mut diagnostics = DiagnosticBuffer::new();
    let tokens = tokenize("print true - 1;", &mut diagnostics);
    let program = parse(tokens, &mut diagnostics);

    let mut interpreter = Interpreter::with_output(PrintHandler::Silent);
    assert!(interpreter.interpret(&program, &mut diagnostics).is_err());
    assert_eq!(diagnostics.messages(), vec!["Operands must be a number."]);
    assert_eq!(diagnostics.diagnostics[0].location, " at '-'");
}
