//! Lexer diagnostics.
//!
//! None of these stop lexing: the offending input is skipped, the
//! diagnostic is recorded in [`LexOutput`](crate::LexOutput), and scanning
//! resumes right after it. Only failing to read the source at all is fatal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A skipped piece of input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("lexing error line {line}: {kind}")]
pub struct LexError {
    /// 1-based source line.
    pub line: u32,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A number followed by letters other than the `f` float suffix.
    #[error("identifiers cannot be preceded by numbers: `{literal}`")]
    InvalidNumberSuffix { literal: String },

    /// `1.2.3`
    #[error("numbers cannot contain more than one '.': `{literal}`")]
    TooManyDots { literal: String },

    /// Integer literal outside the `i64` range.
    #[error("integer literal out of range: `{literal}`")]
    IntOverflow { literal: String },

    /// Float literal the standard parser rejects.
    #[error("malformed number: `{literal}`")]
    MalformedNumber { literal: String },

    /// Character outside the syntax table.
    #[error("unknown syntax: {ch}")]
    UnknownSyntax { ch: char },

    /// End of input inside a string literal.
    #[error("unterminated string, expecting: {quote}")]
    UnterminatedString { quote: char },
}

/// The source unit could not be read.
#[derive(Debug, Error)]
#[error("could not open file {}: {source}", path.display())]
pub struct LexFileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
