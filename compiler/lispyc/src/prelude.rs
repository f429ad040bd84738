//! The standard environment every [`Context`](crate::Context) starts from.

use std::io::Write;

use lispy_ir::{Environment, EvalError, EvalResult, Function, NativeFn, Value};

const NATIVES: [(&str, NativeFn); 3] = [("print", print), ("length", length), ("not", not)];

/// Root environment holding `true`, `false`, `null` and the natives.
pub fn standard_env() -> Environment {
    let env = Environment::new();
    env.bind("true", Value::Bool(true));
    env.bind("false", Value::Bool(false));
    env.bind("null", Value::Null);
    for (name, body) in NATIVES {
        env.bind(name, Function::native(name, body).into());
    }
    env
}

/// Write the arguments' display text, space separated, as one line.
fn print(args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(Value::display_text)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(std::io::stdout().lock(), "{line}").map_err(|e| native_error("print", e.to_string()))?;
    Ok(Value::Null)
}

/// Element count of a list, character count of a string.
fn length(args: &[Value]) -> EvalResult {
    let count = match single_arg("length", args)? {
        Value::List(items) => items.len(),
        Value::Str(text) => text.chars().count(),
        other => {
            return Err(native_error(
                "length",
                format!("expected a list or string, got {}", other.kind_name()),
            ))
        }
    };
    i64::try_from(count)
        .map(Value::int)
        .map_err(|_| native_error("length", "length does not fit in an int".to_string()))
}

fn not(args: &[Value]) -> EvalResult {
    Ok(Value::Bool(!single_arg("not", args)?.is_truthy()))
}

fn single_arg<'a>(name: &'static str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(native_error(
            name,
            format!("expected 1 argument, got {}", args.len()),
        )),
    }
}

fn native_error(name: &'static str, message: String) -> EvalError {
    EvalError::Native { name, message }
}
