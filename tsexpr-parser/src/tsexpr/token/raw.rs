//! Raw tokens produced by the logos lexer
//!
//!     Tree notation only has four kinds of characters that matter: tabs (which carry depth
//!     when they lead a line and separate atoms elsewhere), other whitespace, newlines and
//!     everything else, which makes up atoms.
//!
//!     Whitespace is Unicode whitespace, so a no-break space or an ideographic space
//!     separates atoms just like an ASCII space does.
//!
//!     Tabs are emitted one token per character so that counting the leading ones gives the
//!     line depth directly. Spaces never count towards depth, so they are grouped.

use logos::Logos;

/// All possible tokens in Tree notation source
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    // One token per tab, leading tabs are indentation levels
    #[token("\t")]
    Tab,

    // Whitespace other than tab and newline. \r is here so CRLF sources behave like LF ones
    #[regex(r"[ \r\x0B\x0C\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]+")]
    Space,

    #[token("\n")]
    Newline,

    // Everything that is not whitespace
    #[regex(r"\S+", |lex| lex.slice().to_string())]
    Atom(String),
}
