//! Canonical parenthesis rendering
//!
//!     atom  -> its text
//!     list  -> "(" members joined by one space ")"
//!
//! No newlines and no trailing whitespace. Rendering never fails.

use std::fmt;

use crate::tsexpr::ast::Node;

use super::registry::{FormatError, Formatter};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Atom(atom) => write!(f, "{atom}"),
            Node::List(members) => {
                write!(f, "(")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Render a tree as canonical S-expression text.
pub fn render(node: &Node) -> String {
    node.to_string()
}

/// S-expression formatter for the registry.
pub struct SexprFormatter;

impl Formatter for SexprFormatter {
    fn name(&self) -> &'static str {
        "sexpr"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(render(node))
    }

    fn description(&self) -> &'static str {
        "Canonical parenthesized S-expression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsexpr::testing::factories::{atom, list};

    #[test]
    fn test_atom_is_literal() {
        assert_eq!(render(&atom("x")), "x");
        assert_eq!(render(&atom("(x)")), "(x)");
    }

    #[test]
    fn test_nested_lists() {
        let tree = list(vec![
            list(vec![atom("a"), list(vec![atom("b"), atom("c")])]),
            atom("d"),
        ]);
        assert_eq!(render(&tree), "((a (b c)) d)");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&Node::List(vec![])), "()");
    }
}
