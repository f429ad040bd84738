//! The registered keyword set.
//!
//! Which bare words are keywords is decided by the host before lexing:
//! a word is a [`TokenKind::Keyword`](lispy_ir::TokenKind::Keyword) only if
//! it was registered, and an [`Identifier`](lispy_ir::TokenKind::Identifier)
//! otherwise.

use rustc_hash::FxHashSet;

/// Words every lexer recognizes before the host adds its own.
///
/// Only `if` is a form the parser evaluates; the others are kept so the
/// token stream stays stable for lexer-consuming tools.
pub const BUILTIN_KEYWORDS: [&str; 5] = ["if", "while", "for", "break", "else"];

#[derive(Clone, Debug)]
pub struct KeywordTable {
    words: FxHashSet<String>,
}

impl KeywordTable {
    /// Table holding [`BUILTIN_KEYWORDS`].
    pub fn new() -> Self {
        KeywordTable {
            words: BUILTIN_KEYWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Register `word`; returns `false` if it was already a keyword.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}
