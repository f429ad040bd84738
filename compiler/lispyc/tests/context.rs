//! End-to-end loading through the host context.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use lispy_ir::{EvalError, Value};
use lispy_parse::ParseError;
use lispyc::{Context, LoadError};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Value {
    Context::new()
        .load_str("test", source)
        .expect("source should load")
        .value
}

#[test]
fn arithmetic_and_definitions() {
    assert_eq!(eval("(define x 5) (define y (+ x 3)) (y)"), Value::int(8));
}

#[test]
fn lambda_with_two_arguments() {
    assert_eq!(
        eval("(define add (lambda (a b) (+ a b))) (add 2 3)"),
        Value::int(5)
    );
}

#[test]
fn list_concat_and_product() {
    assert_eq!(
        eval("(list 1 2 3)"),
        Value::list(vec![Value::int(1), Value::int(2), Value::int(3)])
    );
    assert_eq!(eval("(+ \"a\" \"b\")"), Value::string("ab"));
    assert_eq!(eval("(* 2 3 4)"), Value::int(24));
}

#[test]
fn prelude_is_visible_to_programs() {
    assert_eq!(eval("(if false 1 2)"), Value::int(2));
    assert_eq!(eval("(not true)"), Value::Bool(false));
    assert_eq!(eval("(length (list 1 2 3))"), Value::int(3));
}

#[test]
fn units_share_the_environment() {
    let mut context = Context::new();
    context.load_str("first", "(define base 40)").unwrap();
    let loaded = context.load_str("second", "(+ base 2)").unwrap();
    assert_eq!(loaded.value, Value::int(42));

    let names: Vec<&str> = context.programs().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn failed_unit_keeps_earlier_bindings() {
    let mut context = Context::new();
    let error = context
        .load_str("broken", "(define kept 1) (missing)")
        .unwrap_err();
    assert!(matches!(
        error,
        LoadError::Eval(EvalError::NotBound { ref name }) if name == "missing"
    ));
    assert_eq!(context.env().lookup("kept"), Ok(Value::int(1)));
    assert_eq!(context.programs().count(), 1);
}

#[test]
fn parse_errors_load_nothing() {
    let mut context = Context::new();
    let error = context.load_str("bad", "(define x 1) (if 1 2)").unwrap_err();
    assert!(matches!(error, LoadError::Parse(ParseError::Arity { .. })));
    assert!(context.env().get("x").is_none());
    assert_eq!(context.programs().count(), 0);
}

#[test]
fn lexer_diagnostics_are_returned() {
    let loaded = Context::new().load_str("noisy", "(+ 1 # 2)").unwrap();
    assert_eq!(loaded.value, Value::int(3));
    assert_eq!(loaded.diagnostics.len(), 1);
}

#[test]
fn keywords_decide_which_forms_parse() {
    // Without `define` registered the word is an ordinary call.
    let mut bare = Context::with_keywords(["lambda"]);
    let error = bare.load_str("bare", "(define x 1)").unwrap_err();
    assert!(matches!(
        error,
        LoadError::Eval(EvalError::NotBound { ref name }) if name == "define"
    ));

    let mut extended = Context::new();
    extended.lexer_mut().add_keyword("loop");
    let error = extended.load_str("ext", "(loop 1)").unwrap_err();
    assert!(matches!(
        error,
        LoadError::Parse(ParseError::UnknownForm { ref keyword, .. }) if keyword == "loop"
    ));
}

#[test]
fn load_file_runs_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "(define square (lambda (n) (* n n)))").unwrap();
    writeln!(file, "(square 7)").unwrap();

    let mut context = Context::new();
    let loaded = context.load_file(file.path()).unwrap();
    assert_eq!(loaded.value, Value::int(49));

    let (name, program) = context.programs().next().unwrap();
    assert_eq!(name, file.path().display().to_string());
    assert_eq!(program.len(), 2);
}

#[test]
fn missing_file_is_a_read_error() {
    let error = Context::new()
        .load_file("/nonexistent/lispy/unit.lsp")
        .unwrap_err();
    assert!(matches!(error, LoadError::Read(_)));
}
