//! Base tokenization for Tree notation
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::tsexpr::token::Token;
use logos::Logos;

/// Tokenize source code
///
/// The token table covers every character, so the lexer never reports an error; any it did
/// would be skipped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push(token);
        }
    }

    tokens
}
