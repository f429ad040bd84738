//! Token types: the contract between the lexer and the parser.
//!
//! A token is a kind plus a [`Value`] payload. Literal tokens carry their
//! number or text, words carry their spelling, and syntax tokens carry the
//! single character they were lexed from.

use std::fmt;
use std::ops::Index;

use crate::Value;

/// Token classification.
///
/// The lexer produces every kind except `Conditional`, which is reserved
/// for two-character operators the lexer does not combine. The parser only
/// consumes a handful; the rest are kept so lexer-consuming tools see a
/// stable set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    /// Integer literal, e.g. `42`.
    Int,
    /// Float literal with an `f` suffix, e.g. `1.5f`.
    Float,
    /// Float literal written with a dot and no suffix, e.g. `1.5`.
    Num,
    /// Text between a pair of quotes.
    Str,
    /// `"` or `'`.
    Quote,
    /// `+ - * /`
    Arith,
    Conditional,
    /// `& | ^`
    Bitwise,
    /// `!`
    Not,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    LThan,
    GThan,
}

impl TokenKind {
    /// Fixed human-readable description, used in diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Identifier => "abc_123",
            TokenKind::Keyword => "eg. if",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Num => "eg 1.0",
            TokenKind::Str => "eg. hello world",
            TokenKind::Quote => "\" or '",
            TokenKind::Arith => "+,-,*,/",
            TokenKind::Conditional => "== or !=",
            TokenKind::Bitwise => "|,&,^",
            TokenKind::Not => "!",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LThan => "<",
            TokenKind::GThan => ">",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A lexed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Value,
    /// Source line (1-based), for diagnostics.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: Value, line: u32) -> Self {
        Token { kind, value, line }
    }

    /// The payload as text, for words, strings and syntax characters.
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Ordered tokens of one source unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Just the kinds, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
