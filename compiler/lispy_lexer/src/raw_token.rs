//! Raw scanner built on logos.
//!
//! Splits source into lexemes without judging them: numbers are matched
//! loosely (any run of digits and dots plus an optional letter suffix) and
//! validated during cooking, and string bodies are scanned by the cooker
//! after a [`RawToken::Quote`] since their end depends on which quote opened
//! them. Characters outside the syntax table surface as logos errors.

use logos::Logos;

use lispy_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"[0-9][0-9.]*[a-zA-Z]*")]
    Number,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Word,

    #[token("\"")]
    #[token("'")]
    Quote,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("<")]
    LThan,
    #[token(">")]
    GThan,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Arith,

    #[token("&")]
    #[token("|")]
    #[token("^")]
    Bitwise,

    #[token("!")]
    Not,
}

impl RawToken {
    /// Token kind for single-character syntax; `None` for lexemes the
    /// cooker handles itself.
    pub(crate) fn syntax_kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Newline | RawToken::Number | RawToken::Word | RawToken::Quote => {
                return None
            }
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::LThan => TokenKind::LThan,
            RawToken::GThan => TokenKind::GThan,
            RawToken::Arith => TokenKind::Arith,
            RawToken::Bitwise => TokenKind::Bitwise,
            RawToken::Not => TokenKind::Not,
        };
        Some(kind)
    }
}
