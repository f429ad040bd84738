use pretty_assertions::assert_eq;

use super::*;
use crate::EvalError;

// === Truthiness ===

#[test]
fn integer_zero_and_false_are_the_only_falsy_values() {
    assert!(!Value::int(0).is_truthy());
    assert!(!Value::Bool(false).is_truthy());

    assert!(Value::int(-1).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::float(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::Null.is_truthy());
    assert!(Value::list(vec![]).is_truthy());
}

// === Display ===

#[test]
fn display_renders_source_forms() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::float(2.0).to_string(), "2.0");
    assert_eq!(Value::float(1.5).to_string(), "1.5");
    assert_eq!(Value::string("ab").to_string(), "\"ab\"");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(
        Value::list(vec![Value::int(1), Value::string("x")]).to_string(),
        "(1 \"x\")"
    );
}

#[test]
fn display_switches_quote_when_text_contains_double_quote() {
    assert_eq!(Value::string("say \"hi\"").to_string(), "'say \"hi\"'");
}

#[test]
fn display_text_leaves_strings_unquoted() {
    let list = Value::list(vec![Value::string("a"), Value::int(1)]);
    assert_eq!(list.display_text(), "(a 1)");
    assert_eq!(Value::string("plain").display_text(), "plain");
}

#[test]
fn function_display_names_its_flavour() {
    let lambda = Value::from(Function::lambda(vec!["x".into()], |_, _| Ok(Value::Null)));
    let thunk = Value::from(Function::thunk("begin", |_, _| Ok(Value::Null)));
    assert_eq!(lambda.to_string(), "<lambda>");
    assert_eq!(thunk.to_string(), "<function>");
    assert_eq!(Value::from(Function::deferred("x")).to_string(), "<deferred x>");
}

// === Equality ===

#[test]
fn lists_compare_structurally() {
    let a = Value::list(vec![Value::int(1), Value::string("x")]);
    let b = Value::list(vec![Value::int(1), Value::string("x")]);
    assert_eq!(a, b);
    assert_ne!(a, Value::list(vec![Value::int(1)]));
}

#[test]
fn functions_compare_by_identity() {
    let f = Value::from(Function::thunk("list", |_, _| Ok(Value::Null)));
    let g = Value::from(Function::thunk("list", |_, _| Ok(Value::Null)));
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn float_equality_is_exact() {
    assert_eq!(Value::float(1e300), Value::float(1e300));
    assert_ne!(Value::float(1e300), Value::float(1e300 + 1e285));
    assert_ne!(Value::float(1e-20), Value::float(2e-20));
}

#[test]
fn int_and_float_are_distinct_kinds() {
    assert_ne!(Value::int(1), Value::float(1.0));
}

// === Resolution ===

#[test]
fn resolve_invokes_functions_with_no_arguments() {
    let env = Environment::new();
    let thunk = Value::from(Function::thunk("test", |args, _| {
        Ok(Value::int(i64::try_from(args.len()).unwrap_or(-1)))
    }));
    assert_eq!(thunk.resolve(&env), Ok(Value::int(0)));
    assert_eq!(Value::int(9).resolve(&env), Ok(Value::int(9)));
}

#[test]
fn deferred_lookup_dereferences_functions() {
    let env = Environment::new();
    let inner = Function::thunk("test", |_, _| Ok(Value::int(3)));
    assert!(env.define("three", inner.into()).is_ok());

    let read = Value::from(Function::deferred("three"));
    assert_eq!(read.resolve(&env), Ok(Value::int(3)));
}

#[test]
fn deferred_lookup_of_unbound_name_fails() {
    let env = Environment::new();
    let read = Value::from(Function::deferred("ghost"));
    assert_eq!(
        read.resolve(&env),
        Err(EvalError::NotBound {
            name: "ghost".into()
        })
    );
}

#[test]
fn deferred_chain_follows_aliases() {
    let env = Environment::new();
    assert!(env.define("base", Value::int(4)).is_ok());
    assert!(env.define("alias", Function::deferred("base").into()).is_ok());
    assert!(env.define("alias2", Function::deferred("alias").into()).is_ok());

    let read = Value::from(Function::deferred("alias2"));
    assert_eq!(read.resolve(&env), Ok(Value::int(4)));
}

#[test]
fn self_referential_name_is_a_stack_overflow() {
    let env = Environment::new();
    assert!(env.define("a", Function::deferred("a").into()).is_ok());

    let read = Value::from(Function::deferred("a"));
    assert_eq!(
        read.resolve(&env),
        Err(EvalError::StackOverflow {
            depth: crate::MAX_CALL_DEPTH
        })
    );
}

#[test]
fn lambda_is_recognized_by_its_params() {
    let lambda = Function::lambda(vec!["x".into()], |_, _| Ok(Value::Null));
    assert!(lambda.is_lambda());
    assert!(!Function::thunk("test", |_, _| Ok(Value::Null)).is_lambda());
    assert!(!Function::deferred("x").is_lambda());
}

// === Arithmetic ===

#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(
        ArithOp::Add.apply(&Value::int(2), &Value::int(3)),
        Ok(Value::int(5))
    );
    assert_eq!(
        ArithOp::Mul.apply(&Value::int(4), &Value::int(6)),
        Ok(Value::int(24))
    );
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(
        ArithOp::Add.apply(&Value::int(1), &Value::float(0.5)),
        Ok(Value::float(1.5))
    );
    assert_eq!(
        ArithOp::Mul.apply(&Value::float(1.5), &Value::int(2)),
        Ok(Value::float(3.0))
    );
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(
        ArithOp::Mul.apply(&Value::int(i64::MAX), &Value::int(2)),
        Err(EvalError::IntegerOverflow { op: '*' })
    );
}

#[test]
fn non_numeric_operands_are_a_type_mismatch() {
    assert_eq!(
        ArithOp::Add.apply(&Value::int(1), &Value::string("a")),
        Err(EvalError::TypeMismatch {
            op: '+',
            left: "int",
            right: "string",
        })
    );
}
