//! Form compilers, one per kind of head token.

mod arith;
mod call;
mod special;

use crate::{Arity, ParseError};

fn arity_error(form: &'static str, expected: Arity, found: usize, line: u32) -> ParseError {
    ParseError::Arity {
        form,
        expected,
        found,
        line,
    }
}
