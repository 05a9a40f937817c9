//! Atom and Node
//!
//!     Node is a closed sum: an atom or a list. There is no "not yet known" state, a value is
//!     decided the moment it is built.
//!
//! Canonical Form
//!
//!     A list with exactly one member means the same thing as that member, so such lists are
//!     never kept: [Node::collapse] is the single place where lists get finalized and it
//!     unwraps singletons. Every list in a parsed tree therefore has at least two members,
//!     with one exception: a document with no atoms at all parses to the empty list.

use serde::Serialize;
use std::fmt;

/// A leaf token: non-empty text without whitespace (in the Unicode sense).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    /// Create an atom, returning `None` if the text is empty or contains whitespace.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Atom(text))
    }

    /// Create an atom from lexer output, which never holds separators.
    pub(crate) fn from_token(text: String) -> Self {
        debug_assert!(!text.is_empty() && !text.chars().any(char::is_whitespace));
        Atom(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A tree value. Serializes untagged: atoms as strings, lists as arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Node {
    Atom(Atom),
    List(Vec<Node>),
}

impl Node {
    /// Finalize a list: a single member stands for itself, anything else stays a list.
    pub fn collapse(mut members: Vec<Node>) -> Node {
        if members.len() == 1 {
            if let Some(only) = members.pop() {
                return only;
            }
        }
        Node::List(members)
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Atom(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom(atom) => Some(atom.as_str()),
            Node::List(_) => None,
        }
    }

    pub fn members(&self) -> Option<&[Node]> {
        match self {
            Node::Atom(_) => None,
            Node::List(members) => Some(members),
        }
    }

    /// List nesting depth: 0 for an atom, one more than the deepest member for a list.
    pub fn nesting(&self) -> usize {
        match self {
            Node::Atom(_) => 0,
            Node::List(members) => 1 + members.iter().map(Node::nesting).max().unwrap_or(0),
        }
    }

    /// Number of list boundaries between this node and the first atom equal to `text`,
    /// searching depth-first.
    pub fn depth_of(&self, text: &str) -> Option<usize> {
        match self {
            Node::Atom(atom) if atom.as_str() == text => Some(0),
            Node::Atom(_) => None,
            Node::List(members) => members
                .iter()
                .find_map(|member| member.depth_of(text))
                .map(|depth| depth + 1),
        }
    }

    /// Whether the tree holds no singleton list and no empty list below the top.
    pub fn is_canonical(&self) -> bool {
        match self {
            Node::Atom(_) => true,
            Node::List(members) => members.len() != 1 && members.iter().all(is_canonical_member),
        }
    }
}

fn is_canonical_member(node: &Node) -> bool {
    match node {
        Node::Atom(_) => true,
        Node::List(members) => members.len() >= 2 && members.iter().all(is_canonical_member),
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Atom(atom)
    }
}
