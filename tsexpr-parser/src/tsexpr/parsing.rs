//! Parsing entry points
//!
//!     [parse] takes Tree notation text, [encode] takes raw bytes. Both run the
//!     [lexer](crate::tsexpr::lexing) and the [tree builder](crate::tsexpr::building) and
//!     return the root node or the first structural error found. There is no partial result.
//!
//!     ```text
//!     a                     ((a (b (c d e) f) g) h)
//!         b
//!             c d e
//!             f
//!         g
//!     h
//!     ```

use crate::tsexpr::building::{TreeBuilder, DEFAULT_MAX_DEPTH};
use crate::tsexpr::lexing;

pub use crate::tsexpr::building::MAX_DEPTH_CEILING;

pub use crate::tsexpr::ast::{Atom, Node, StructuralError};
pub use crate::tsexpr::lexing::BlankLinePolicy;

/// Knobs for a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// What to do with lines made only of tabs.
    pub indented_blank_lines: BlankLinePolicy,
    /// Deepest indentation accepted, in tabs. Values above [MAX_DEPTH_CEILING] act as the
    /// ceiling.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            indented_blank_lines: BlankLinePolicy::Ignore,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse Tree notation with default options.
pub fn parse(source: &str) -> Result<Node, StructuralError> {
    parse_with(source, &ParseOptions::default())
}

/// Parse Tree notation.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Node, StructuralError> {
    let lines = lexing::lex(source, options.indented_blank_lines)?;
    let line_count = lines.len();

    let result = TreeBuilder::new(lines)
        .with_max_depth(options.max_depth)
        .build();

    match &result {
        Ok(root) => log::debug!(
            "parsed {} lines into a tree of nesting {}",
            line_count,
            root.nesting()
        ),
        Err(error) => log::debug!("parse failed: {error}"),
    }
    result
}

/// Parse a byte buffer with default options.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD inside the atom they belong
/// to. Atoms are opaque, so this never affects structure.
pub fn encode(bytes: &[u8]) -> Result<Node, StructuralError> {
    encode_with(bytes, &ParseOptions::default())
}

pub fn encode_with(bytes: &[u8], options: &ParseOptions) -> Result<Node, StructuralError> {
    parse_with(&String::from_utf8_lossy(bytes), options)
}
