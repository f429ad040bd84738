//! Parser for Lispy.
//!
//! Parsing and compiling happen in one pass: every parenthesized form is
//! turned directly into a [`Function`] closure, with no syntax tree in
//! between. Nothing is evaluated while parsing; the closures run when the
//! resulting [`Program`] is run.
//!
//! Forms are dispatched on the token after `(`:
//!
//! | head        | compiles to                                   |
//! |-------------|-----------------------------------------------|
//! | `+ - * /`   | arithmetic fold over the operands             |
//! | keyword     | special form (`if`, `define`, `set`, ...)     |
//! | identifier  | call resolved at run time                     |
//! | `)`         | empty form, evaluates to `null`               |

mod cursor;
mod element;
mod error;
mod forms;
mod program;

use lispy_ir::{ensure_sufficient_stack, Environment, Function, TokenKind, TokenList, Value};
use tracing::debug;

use cursor::Cursor;

pub use error::{Arity, ParseError};
pub use program::Program;

/// Compile every top-level form in `tokens`.
///
/// `env` becomes the environment the program runs in; it is not touched
/// during compilation.
///
/// # Errors
///
/// The first [`ParseError`] aborts the whole unit.
pub fn parse(env: &Environment, tokens: &TokenList) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    let mut expressions = Vec::new();
    while !parser.cursor.is_at_end() {
        expressions.push(parser.parse_expr()?);
    }
    debug!(expressions = expressions.len(), "compiled program");
    Ok(Program::new(expressions, env.clone()))
}

/// Single-pass parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Compile one parenthesized form, including both parentheses.
    pub(crate) fn parse_expr(&mut self) -> Result<Function, ParseError> {
        ensure_sufficient_stack(|| {
            self.cursor
                .expect(TokenKind::LParen, "when starting to parse an expression")?;

            let Some(head) = self.cursor.current() else {
                return Err(ParseError::UnexpectedEnd {
                    expected: TokenKind::RParen,
                    context: "when trying to find the start of an expression",
                });
            };

            let compiled = match head.kind {
                TokenKind::Arith => {
                    self.cursor.advance();
                    self.parse_arith(head)?
                }
                TokenKind::Keyword => {
                    self.cursor.advance();
                    self.parse_keyword_form(head)?
                }
                TokenKind::Identifier => {
                    self.cursor.advance();
                    self.parse_call(head)?
                }
                TokenKind::RParen => Function::thunk("()", |_, _| Ok(Value::Null)),
                found => {
                    return Err(ParseError::InvalidFormHead {
                        found,
                        line: head.line,
                    })
                }
            };

            self.cursor
                .expect(TokenKind::RParen, "when trying to finish parsing an expression")?;
            Ok(compiled)
        })
    }
}
