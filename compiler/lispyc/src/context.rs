//! The host context: keyword registration, environment and loaded units.

use std::path::Path;

use lispy_ir::{Environment, EvalError, Value};
use lispy_lexer::{LexError, LexFileError, LexOutput, Lexer};
use lispy_parse::{ParseError, Program};
use thiserror::Error;
use tracing::{debug, info};

use crate::prelude::standard_env;

/// Words the host registers as keywords so the special forms parse.
pub const HOST_KEYWORDS: [&str; 5] = ["define", "set", "lambda", "begin", "list"];

/// Why a source unit could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] LexFileError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Outcome of a successful load.
#[derive(Debug)]
pub struct Loaded {
    /// Result of the last top-level expression, `null` if there was none.
    pub value: Value,
    /// Input the lexer skipped.
    pub diagnostics: Vec<LexError>,
}

/// A named, compiled source unit.
#[derive(Debug)]
struct Unit {
    name: String,
    program: Program,
}

/// Interpreter host.
///
/// All units share one environment, seeded by [`standard_env`].
#[derive(Debug)]
pub struct Context {
    lexer: Lexer,
    env: Environment,
    units: Vec<Unit>,
}

impl Context {
    /// Context with [`HOST_KEYWORDS`] registered.
    pub fn new() -> Self {
        Self::with_keywords(HOST_KEYWORDS)
    }

    /// Context with `words` registered on top of the lexer's built-ins.
    ///
    /// Passing fewer than [`HOST_KEYWORDS`] makes the missing forms lex as
    /// identifiers, i.e. as calls.
    pub fn with_keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lexer = Lexer::new();
        for word in words {
            lexer.add_keyword(word);
        }
        Context {
            lexer,
            env: standard_env(),
            units: Vec::new(),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Register extra keywords before loading.
    pub fn lexer_mut(&mut self) -> &mut Lexer {
        &mut self.lexer
    }

    /// Lex, compile and run the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not compile, or stops with an
    /// evaluation error. Lexer diagnostics alone do not fail the load.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Loaded, LoadError> {
        let path = path.as_ref();
        let output = self.lexer.lex_file(path)?;
        self.load(path.display().to_string(), output)
    }

    /// Lex, compile and run `source` under the unit name `name`.
    ///
    /// # Errors
    ///
    /// As [`Context::load_file`], minus the read failure.
    pub fn load_str(&mut self, name: &str, source: &str) -> Result<Loaded, LoadError> {
        let output = self.lexer.lex_str(source);
        self.load(name.to_string(), output)
    }

    /// Names and programs of every unit compiled so far, in load order.
    ///
    /// A unit whose evaluation failed is still listed.
    pub fn programs(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.units.iter().map(|u| (u.name.as_str(), &u.program))
    }

    fn load(&mut self, name: String, output: LexOutput) -> Result<Loaded, LoadError> {
        let LexOutput {
            tokens,
            errors: diagnostics,
        } = output;
        let program = lispy_parse::parse(&self.env, &tokens)?;
        info!(unit = %name, expressions = program.len(), "loaded unit");

        let result = program.run();
        self.units.push(Unit { name, program });
        let value = result?;
        debug!(%value, "unit finished");
        Ok(Loaded { value, diagnostics })
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
