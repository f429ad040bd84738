//! Token cursor for navigating the token stream.

use lispy_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Forward-only position in a [`TokenList`].
///
/// Returned tokens borrow the list, not the cursor, so the parser can keep
/// a token while advancing past it.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Move past the current token and return it.
    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Consume one token of `kind` if it is next.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume every consecutive token of `kind`.
    pub(crate) fn skip_all(&mut self, kind: TokenKind) {
        while self.eat(kind) {}
    }

    /// Consume a token of `kind` or report what was found instead.
    ///
    /// `context` says what the parser was doing, e.g. "when starting to
    /// parse an expression".
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        context: &'static str,
    ) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                trace!(pos = self.pos, ?kind, "expect matched");
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                line: token.line,
                context,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: kind,
                context,
            }),
        }
    }
}
