//! Line records for the tree builder
//!
//!     Tree notation is line based: everything the builder needs is how deep a line is
//!     indented and which atoms it carries. Lines are produced by
//!     [line grouping](crate::tsexpr::lexing::line_grouping) and only live for the duration
//!     of a parse.

use std::fmt;

use crate::tsexpr::ast::{Atom, Node};

/// One non-blank physical line of Tree notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source
    pub number: usize,

    /// Count of leading tab characters
    pub depth: usize,

    /// Atoms in left-to-right order. Never empty.
    pub atoms: Vec<Atom>,
}

impl Line {
    /// The value of the line on its own: a bare atom if it holds one, a list otherwise.
    pub fn into_value(self) -> Node {
        Node::collapse(self.atoms.into_iter().map(Node::Atom).collect())
    }

    /// Whether the line can head an indented block.
    pub fn can_open_block(&self) -> bool {
        self.atoms.len() == 1
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "\t")?;
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}
