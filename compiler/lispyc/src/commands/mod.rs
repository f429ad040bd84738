//! Command handlers for the `lispy` CLI.
//!
//! Each handler does its own printing and returns the error that should
//! end the process with a failure status. Lexer diagnostics reach the user
//! through the `warn` log level.

mod debug;
mod run;

pub use debug::lex_file;
pub use run::{eval_source, run_file};
