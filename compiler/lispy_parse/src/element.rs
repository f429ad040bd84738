//! Elements: the operands of a form.

use lispy_ir::{Environment, EvalError, Function, TokenKind, Value};
use smallvec::SmallVec;

use crate::{ParseError, Parser};

/// Resolved operands; most forms take only a handful.
pub(crate) type Operands = SmallVec<[Value; 4]>;

/// How an identifier element compiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IdentMode {
    /// Deferred read of the binding.
    Lookup,
    /// The name itself, as a string. Used for binding positions.
    Raw,
}

impl Parser<'_> {
    /// Compile the next element, or return `None` at the closing `)`,
    /// which is left for the enclosing form to consume.
    ///
    /// Quote tokens around string bodies carry no meaning here and are
    /// skipped.
    pub(crate) fn parse_element(&mut self, mode: IdentMode) -> Result<Option<Value>, ParseError> {
        self.cursor.skip_all(TokenKind::Quote);

        let Some(token) = self.cursor.current() else {
            return Err(ParseError::UnexpectedEnd {
                expected: TokenKind::RParen,
                context: "while reading the elements of an expression",
            });
        };

        match token.kind {
            TokenKind::Int | TokenKind::Num | TokenKind::Float | TokenKind::Str => {
                self.cursor.advance();
                Ok(Some(token.value.clone()))
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                let element = match mode {
                    IdentMode::Lookup => {
                        Value::from(Function::deferred(token.text().unwrap_or_default()))
                    }
                    IdentMode::Raw => token.value.clone(),
                };
                Ok(Some(element))
            }
            TokenKind::LParen => self.parse_expr().map(|expr| Some(Value::from(expr))),
            TokenKind::RParen => Ok(None),
            found => Err(ParseError::UnexpectedElement {
                found,
                line: token.line,
            }),
        }
    }

    /// Compile elements up to, not including, the closing `)`.
    pub(crate) fn parse_elements(&mut self, mode: IdentMode) -> Result<Vec<Value>, ParseError> {
        let mut elements = Vec::new();
        while let Some(element) = self.parse_element(mode)? {
            elements.push(element);
        }
        Ok(elements)
    }
}

/// Force every element in order against `env`.
pub(crate) fn resolve_all(elements: &[Value], env: &Environment) -> Result<Operands, EvalError> {
    elements.iter().map(|element| element.resolve(env)).collect()
}

/// Force call arguments, passing lambdas through as closures.
///
/// A lambda written in argument position, or a name bound to one, reaches
/// the callee uncalled so the callee can invoke it with its own arguments.
/// Everything else is forced as by [`resolve_all`].
pub(crate) fn resolve_args(elements: &[Value], env: &Environment) -> Result<Operands, EvalError> {
    elements
        .iter()
        .map(|element| match element {
            Value::Function(f) if f.is_lambda() => Ok(element.clone()),
            Value::Function(Function::Deferred(name)) => match env.get(name) {
                Some(Value::Function(found)) if found.is_lambda() => Ok(Value::Function(found)),
                _ => element.resolve(env),
            },
            _ => element.resolve(env),
        })
        .collect()
}

/// Evaluate a body: every element in order, keeping the last result.
///
/// Literal elements before the last have no effect.
pub(crate) fn run_body(body: &[Value], env: &Environment) -> Result<Value, EvalError> {
    let Some((last, effects)) = body.split_last() else {
        return Ok(Value::Null);
    };
    for element in effects.iter().filter(|e| e.is_callable()) {
        element.resolve(env)?;
    }
    last.resolve(env)
}
