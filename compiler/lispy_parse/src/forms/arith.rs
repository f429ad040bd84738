//! Arithmetic operator forms.

use lispy_ir::{ArithOp, Environment, EvalError, EvalResult, Function, Token, Value};
use tracing::trace;

use super::arity_error;
use crate::element::{resolve_all, IdentMode};
use crate::{Arity, ParseError, Parser};

impl Parser<'_> {
    /// `(op operand...)` where `op` is the [`Arith`](lispy_ir::TokenKind::Arith)
    /// token `head`.
    ///
    /// `-` and `/` are accepted by the parser but have no evaluation rule;
    /// running them reports [`EvalError::UnsupportedOperator`].
    pub(crate) fn parse_arith(&mut self, head: &Token) -> Result<Function, ParseError> {
        let op = head.text().and_then(|t| t.chars().next()).unwrap_or('?');
        let operands = self.parse_elements(IdentMode::Lookup)?;
        trace!(%op, operands = operands.len(), "compiled arithmetic");

        match op {
            '+' => Ok(Function::thunk("+", move |_, env| add(&operands, env))),
            '*' => {
                if operands.len() < 2 {
                    return Err(arity_error("*", Arity::AtLeast(2), operands.len(), head.line));
                }
                Ok(Function::thunk("*", move |_, env| {
                    fold(ArithOp::Mul, &operands, env)
                }))
            }
            op => Ok(Function::thunk("arith", move |_, _| {
                Err(EvalError::UnsupportedOperator { op })
            })),
        }
    }
}

/// Sum the operands, or concatenate their text when the first is a string.
fn add(operands: &[Value], env: &Environment) -> EvalResult {
    let values = resolve_all(operands, env)?;
    match values.first() {
        None => Ok(Value::int(0)),
        Some(Value::Str(_)) => Ok(Value::string(
            values.iter().map(Value::display_text).collect::<String>(),
        )),
        Some(_) => fold_values(ArithOp::Add, &values),
    }
}

fn fold(op: ArithOp, operands: &[Value], env: &Environment) -> EvalResult {
    fold_values(op, &resolve_all(operands, env)?)
}

fn fold_values(op: ArithOp, values: &[Value]) -> EvalResult {
    let Some((first, rest)) = values.split_first() else {
        return Ok(Value::Null);
    };
    rest.iter()
        .try_fold(first.clone(), |acc, value| op.apply(&acc, value))
}
