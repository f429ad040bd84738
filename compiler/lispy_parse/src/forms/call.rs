//! Calls through an identifier head.

use lispy_ir::{Function, Token, Value};
use tracing::trace;

use crate::element::{resolve_args, IdentMode};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `(name arg...)`.
    ///
    /// The callee is looked up when the call runs, not when it is
    /// compiled, so a name may be defined after the calls that use it. A
    /// name bound to a non-function evaluates to that value and the
    /// arguments are ignored. Lambda arguments are passed uncalled.
    pub(crate) fn parse_call(&mut self, head: &Token) -> Result<Function, ParseError> {
        let name = head.text().unwrap_or_default().to_string();
        let args = self.parse_elements(IdentMode::Lookup)?;
        trace!(callee = %name, args = args.len(), "compiled call");

        Ok(Function::thunk("call", move |_, env| {
            match env.lookup(&name)? {
                Value::Function(callee) => {
                    let forced = resolve_args(&args, env)?;
                    callee.call(&forced, env)
                }
                value => Ok(value),
            }
        }))
    }
}
