//! Keyword-headed special forms.

use lispy_ir::{EvalError, Function, Token, TokenKind, Value};
use tracing::warn;

use super::arity_error;
use crate::element::{resolve_all, run_body, IdentMode};
use crate::{Arity, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_keyword_form(&mut self, head: &Token) -> Result<Function, ParseError> {
        let line = head.line;
        match head.text().unwrap_or_default() {
            "if" => self.parse_if(line),
            "define" => self.parse_define(line),
            "set" => self.parse_set(line),
            "lambda" => self.parse_lambda(line),
            "begin" => self.parse_begin(line),
            "list" => self.parse_list(),
            keyword => Err(ParseError::UnknownForm {
                keyword: keyword.to_string(),
                line,
            }),
        }
    }

    /// `(if cond then else)`; only the chosen branch runs.
    fn parse_if(&mut self, line: u32) -> Result<Function, ParseError> {
        let elements = self.parse_elements(IdentMode::Lookup)?;
        let [cond, then, otherwise] = <[Value; 3]>::try_from(elements)
            .map_err(|found| arity_error("if", Arity::Exactly(3), found.len(), line))?;

        Ok(Function::thunk("if", move |_, env| {
            if cond.resolve(env)?.is_truthy() {
                then.resolve(env)
            } else {
                otherwise.resolve(env)
            }
        }))
    }

    /// `(define name value)`.
    ///
    /// The value is stored as compiled, not forced, so reading the name
    /// later evaluates it again in the reader's environment.
    fn parse_define(&mut self, line: u32) -> Result<Function, ParseError> {
        let (name, value) = self.parse_binding("define", line)?;
        Ok(Function::thunk("define", move |_, env| {
            env.define(binding_name("define", &name)?, value.clone())
        }))
    }

    /// `(set name value)`, also spelled `(set! name value)`.
    ///
    /// Unlike `define`, the value is forced before it is stored.
    fn parse_set(&mut self, line: u32) -> Result<Function, ParseError> {
        self.cursor.eat(TokenKind::Not);
        let (name, value) = self.parse_binding("set", line)?;
        Ok(Function::thunk("set", move |_, env| {
            let name = binding_name("set", &name)?;
            if env.get(name).is_none() {
                return Err(EvalError::NotDefined {
                    name: name.to_string(),
                });
            }
            let value = value.resolve(env)?;
            env.set(name, value)
        }))
    }

    /// `(lambda (param...) body...)`.
    ///
    /// Each invocation binds the parameters in a fresh child of the
    /// caller's environment, so free names in the body resolve where the
    /// lambda is called.
    fn parse_lambda(&mut self, line: u32) -> Result<Function, ParseError> {
        let params = self.parse_params()?;
        let body = self.parse_elements(IdentMode::Lookup)?;
        if body.is_empty() {
            return Err(arity_error("lambda body", Arity::AtLeast(1), 0, line));
        }

        let names = params.clone();
        Ok(Function::lambda(params, move |args, env| {
            let scope = env.child()?;
            if args.len() != names.len() {
                warn!(
                    expected = names.len(),
                    got = args.len(),
                    "number of arguments passed to lambda does not match its parameters"
                );
            }
            for (name, arg) in names.iter().zip(args) {
                scope.bind(name, arg.clone());
            }
            run_body(&body, &scope)
        }))
    }

    /// `(begin expr...)`: run in order, yield the last.
    fn parse_begin(&mut self, line: u32) -> Result<Function, ParseError> {
        let body = self.parse_elements(IdentMode::Lookup)?;
        if body.is_empty() {
            return Err(arity_error("begin", Arity::AtLeast(1), 0, line));
        }
        Ok(Function::thunk("begin", move |_, env| run_body(&body, env)))
    }

    /// `(list expr...)`: a list of the forced elements.
    fn parse_list(&mut self) -> Result<Function, ParseError> {
        let elements = self.parse_elements(IdentMode::Lookup)?;
        Ok(Function::thunk("list", move |_, env| {
            Ok(Value::list(resolve_all(&elements, env)?.into_vec()))
        }))
    }

    /// Name then value, as used by `define` and `set`.
    fn parse_binding(
        &mut self,
        form: &'static str,
        line: u32,
    ) -> Result<(Value, Value), ParseError> {
        let mut elements = Vec::with_capacity(2);
        if let Some(name) = self.parse_element(IdentMode::Raw)? {
            elements.push(name);
            elements.extend(self.parse_elements(IdentMode::Lookup)?);
        }
        let [name, value] = <[Value; 2]>::try_from(elements)
            .map_err(|found| arity_error(form, Arity::Exactly(2), found.len(), line))?;
        Ok((name, value))
    }

    /// The parenthesized parameter list of a lambda.
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        self.cursor
            .expect(TokenKind::LParen, "while seeking arguments for a lambda")?;
        let mut params = Vec::new();
        loop {
            let Some(token) = self.cursor.advance() else {
                return Err(ParseError::UnexpectedEnd {
                    expected: TokenKind::RParen,
                    context: "while seeking to end the arguments for a lambda",
                });
            };
            match token.kind {
                TokenKind::RParen => return Ok(params),
                TokenKind::Identifier => params.push(token.text().unwrap_or_default().to_string()),
                found => {
                    return Err(ParseError::InvalidParameter {
                        found,
                        line: token.line,
                    })
                }
            }
        }
    }
}

/// The name in a binding position, which must have compiled to a string.
fn binding_name<'v>(form: &'static str, name: &'v Value) -> Result<&'v str, EvalError> {
    name.as_str().ok_or(EvalError::InvalidTarget {
        form,
        found: name.kind_name(),
    })
}
