//! Lispy host library.
//!
//! Ties the pipeline together for embedders and for the `lispy` binary:
//!
//! ```text
//! source -> Lexer -> TokenList -> parse(env, tokens) -> Program -> run
//! ```
//!
//! A [`Context`] owns the keyword set, the standard environment and every
//! program loaded into it. Definitions made by one loaded unit are visible
//! to the units loaded after it.

pub mod commands;
mod context;
pub mod prelude;
mod tracing_setup;

pub use context::{Context, LoadError, Loaded, HOST_KEYWORDS};
pub use tracing_setup::{init_tracing, LOG_ENV};
