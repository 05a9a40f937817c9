//! Lexer
//!
//!     This module turns Tree notation source into the line records the tree builder works
//!     on. It runs in two stages:
//!
//!         1. Core tokenization using the logos lexer. See [base_tokenization].
//!            Each tab is its own token, other whitespace is grouped, everything else is an
//!            atom.
//!
//!         2. Line grouping. See [line_grouping].
//!            Tokens are split on newlines; each line yields its depth (leading tabs) and its
//!            atoms. Blank lines are dropped here, so the builder never sees them.
//!
//!     Keeping depth counting out of the logos grammar means the lexer stays a plain token
//!     table and all indentation policy lives in one place.

pub mod base_tokenization;
pub mod line_grouping;

pub use base_tokenization::tokenize;
pub use line_grouping::{group_lines, BlankLinePolicy};

use crate::tsexpr::ast::StructuralError;
use crate::tsexpr::token::Line;

/// Run both lexing stages over a source string.
pub fn lex(source: &str, blank_lines: BlankLinePolicy) -> Result<Vec<Line>, StructuralError> {
    group_lines(tokenize(source), blank_lines)
}
