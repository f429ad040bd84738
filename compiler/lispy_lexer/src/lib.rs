//! Lexer for Lispy.
//!
//! Two layers, like most of our front ends:
//!
//! 1. [`RawToken`](raw_token) (logos) splits the source into lexemes.
//! 2. The cooker turns lexemes into [`Token`]s: it validates numbers,
//!    classifies words against the [`KeywordTable`], scans string bodies
//!    and tracks line numbers.
//!
//! Lexing never fails on malformed input. Each problem becomes a
//! [`LexError`] in [`LexOutput::errors`], is logged at `warn`, and the
//! offending input is dropped, so the token count need not match what the
//! source appears to contain.
//!
//! ```text
//! let mut lexer = Lexer::new();
//! lexer.add_keyword("define");
//! let output = lexer.lex_str("(define x 5)");
//! assert!(output.errors.is_empty());
//! ```

mod keywords;
mod lex_error;
mod raw_token;

use std::io::Read;
use std::path::Path;

use logos::Logos;
use tracing::{trace, warn};

use lispy_ir::{Token, TokenKind, TokenList, Value};

pub use keywords::{KeywordTable, BUILTIN_KEYWORDS};
pub use lex_error::{LexError, LexErrorKind, LexFileError};

use raw_token::RawToken;

/// Tokens of one source unit plus the diagnostics for what was skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Source-to-token converter with a host-extensible keyword set.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    keywords: KeywordTable,
}

impl Lexer {
    /// Lexer knowing only [`BUILTIN_KEYWORDS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `word` as a keyword for all later lexing.
    pub fn add_keyword(&mut self, word: impl Into<String>) {
        self.keywords.insert(word);
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Lex in-memory source.
    pub fn lex_str(&self, source: &str) -> LexOutput {
        let mut cooker = Cooker::new(&self.keywords);
        let mut raw = RawToken::lexer(source);

        while let Some(lexeme) = raw.next() {
            let text = raw.slice();
            match lexeme {
                Ok(RawToken::Newline) => cooker.line += 1,
                Ok(RawToken::Number) => cooker.number(text),
                Ok(RawToken::Word) => cooker.word(text),
                Ok(RawToken::Quote) => {
                    let consumed = cooker.string(text, raw.remainder());
                    raw.bump(consumed);
                }
                Ok(syntax) => {
                    if let Some(kind) = syntax.syntax_kind() {
                        cooker.push(kind, Value::string(text));
                    }
                }
                Err(()) => {
                    let ch = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                    cooker.error(LexErrorKind::UnknownSyntax { ch });
                }
            }
        }

        trace!(
            tokens = cooker.output.tokens.len(),
            errors = cooker.output.errors.len(),
            "lexed source"
        );
        cooker.output
    }

    /// Lex everything `reader` yields.
    pub fn lex_reader<R: Read>(&self, mut reader: R) -> std::io::Result<LexOutput> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(self.lex_str(&source))
    }

    /// Lex the file at `path`.
    pub fn lex_file(&self, path: impl AsRef<Path>) -> Result<LexOutput, LexFileError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LexFileError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.lex_str(&source))
    }
}

/// Per-call cooking state.
struct Cooker<'a> {
    keywords: &'a KeywordTable,
    line: u32,
    output: LexOutput,
}

impl<'a> Cooker<'a> {
    fn new(keywords: &'a KeywordTable) -> Self {
        Cooker {
            keywords,
            line: 1,
            output: LexOutput::default(),
        }
    }

    fn push(&mut self, kind: TokenKind, value: Value) {
        self.output.tokens.push(Token::new(kind, value, self.line));
    }

    fn error(&mut self, kind: LexErrorKind) {
        let error = LexError {
            line: self.line,
            kind,
        };
        warn!("{error}");
        self.output.errors.push(error);
    }

    /// Validate a digits-and-dots run with its optional letter suffix.
    ///
    /// `f` makes a `Float`; no suffix with one dot makes a `Num`; no suffix
    /// and no dot makes an `Int`. Anything else is dropped.
    fn number(&mut self, literal: &str) {
        let split = literal
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(literal.len());
        let (digits, suffix) = literal.split_at(split);

        let float_suffix = match suffix {
            "" => false,
            "f" => true,
            _ => {
                self.error(LexErrorKind::InvalidNumberSuffix {
                    literal: literal.to_string(),
                });
                return;
            }
        };

        let dots = digits.bytes().filter(|&b| b == b'.').count();
        if dots > 1 {
            self.error(LexErrorKind::TooManyDots {
                literal: literal.to_string(),
            });
            return;
        }

        if !float_suffix && dots == 0 {
            match digits.parse::<i64>() {
                Ok(n) => self.push(TokenKind::Int, Value::int(n)),
                Err(_) => self.error(LexErrorKind::IntOverflow {
                    literal: literal.to_string(),
                }),
            }
            return;
        }

        let kind = if float_suffix {
            TokenKind::Float
        } else {
            TokenKind::Num
        };
        match digits.parse::<f64>() {
            Ok(x) => self.push(kind, Value::float(x)),
            Err(_) => self.error(LexErrorKind::MalformedNumber {
                literal: literal.to_string(),
            }),
        }
    }

    fn word(&mut self, word: &str) {
        let kind = if self.keywords.contains(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(kind, Value::string(word));
    }

    /// Scan a string body after the opening `quote`.
    ///
    /// Emits `Quote Str Quote`, or `Quote Str` plus a diagnostic when the
    /// input ends first. Returns how many bytes of `rest` were consumed.
    fn string(&mut self, quote: &str, rest: &str) -> usize {
        let quote_char = quote.chars().next().unwrap_or('"');
        let start_line = self.line;
        self.push(TokenKind::Quote, Value::string(quote));

        let (body, consumed, closed) = match memchr::memchr(quote.as_bytes()[0], rest.as_bytes()) {
            Some(end) => (&rest[..end], end + 1, true),
            None => (rest, rest.len(), false),
        };

        self.output.tokens.push(Token::new(
            TokenKind::Str,
            Value::string(body),
            start_line,
        ));
        let newlines = body.bytes().filter(|&b| b == b'\n').count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));

        if closed {
            self.push(TokenKind::Quote, Value::string(quote));
        } else {
            self.error(LexErrorKind::UnterminatedString { quote: quote_char });
        }
        consumed
    }
}
