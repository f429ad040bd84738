//! `lex`: show what the lexer makes of a file.

use lispy_lexer::{LexFileError, Lexer};

use crate::HOST_KEYWORDS;

/// Lex a file and display the token stream and diagnostics.
pub fn lex_file(path: &str) -> Result<(), LexFileError> {
    let mut lexer = Lexer::new();
    for word in HOST_KEYWORDS {
        lexer.add_keyword(word);
    }
    let output = lexer.lex_file(path)?;

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for token in &output.tokens {
        let kind = format!("{:?}", token.kind);
        let value = token.value.to_string();
        println!("  {kind:<10} {value:<16} @ line {}", token.line);
    }

    if output.has_errors() {
        println!();
        println!("Diagnostics:");
        for error in &output.errors {
            println!("  {error}");
        }
    }
    Ok(())
}
