//! Lispy IR - the data model shared by every stage of the interpreter.
//!
//! Lispy has no syntax tree: the parser compiles tokens straight into
//! closures. What the stages share is therefore the *runtime* model:
//!
//! - [`Value`]: the tagged runtime datum (int, float, string, bool, null,
//!   function, list). Tokens carry them as payloads and compiled code
//!   produces them.
//! - [`Function`]: compiled thunks, lambdas, deferred identifier lookups and
//!   host built-ins. Every call receives its [`Environment`] explicitly.
//! - [`Environment`]: a chain of scopes used for `define`, `set` and lookup.
//! - [`Token`], [`TokenKind`], [`TokenList`]: the lexer's output contract.
//! - [`EvalError`]: runtime failure conditions.

mod environment;
mod errors;
mod stack;
mod token;
mod value;

pub use environment::{Environment, MAX_CALL_DEPTH};
pub use errors::{EvalError, EvalResult};
pub use stack::ensure_sufficient_stack;
pub use token::{Token, TokenKind, TokenList};
pub use value::{ArithOp, Closure, Function, Heap, NativeFn, Value};
