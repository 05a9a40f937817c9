//! Core token types shared across the lexer and the tree builder.

pub mod raw;
pub mod line;

pub use self::raw::Token;
pub use self::line::Line;
