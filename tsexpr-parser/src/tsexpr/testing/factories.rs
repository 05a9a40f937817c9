//! Factories for nodes, lines and Tree notation sources

use crate::tsexpr::ast::{Atom, Node};
use crate::tsexpr::token::Line;

/// An atom node. Panics on text that is not a valid atom.
pub fn atom(text: &str) -> Node {
    match Atom::new(text) {
        Some(atom) => Node::Atom(atom),
        None => panic!("{text:?} is not a valid atom"),
    }
}

/// A list node, kept exactly as given (no collapse).
pub fn list(members: Vec<Node>) -> Node {
    Node::List(members)
}

/// A line record.
pub fn mk_line(number: usize, depth: usize, atoms: &[&str]) -> Line {
    Line {
        number,
        depth,
        atoms: atoms
            .iter()
            .map(|text| match Atom::new(*text) {
                Some(atom) => atom,
                None => panic!("{text:?} is not a valid atom"),
            })
            .collect(),
    }
}

/// Tree notation text from (depth, content) pairs, one line each.
pub fn source(lines: &[(usize, &str)]) -> String {
    lines
        .iter()
        .map(|(depth, content)| format!("{}{}\n", "\t".repeat(*depth), content))
        .collect()
}
