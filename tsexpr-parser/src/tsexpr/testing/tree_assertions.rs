//! Fluent assertion API for trees
//!
//!     Matching on nested `Node::List` values by hand quickly turns into a wall of `match`
//!     arms, and a failing `assert_eq!` on two large trees prints two large Debug dumps.
//!     These assertions walk the tree one step at a time and name the path of the node
//!     that failed, e.g. `root[1][0]: expected atom "c", found (d e)`.

use crate::tsexpr::ast::Node;

/// Create an assertion builder for a tree
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is the atom `text`
    pub fn atom(self, text: &str) -> Self {
        match self.node.as_atom() {
            Some(actual) if actual == text => {}
            _ => panic!(
                "{}: expected atom {:?}, found {}",
                self.context, text, self.node
            ),
        }
        self
    }

    /// Assert this node is a list made only of the given atoms
    pub fn atoms(self, texts: &[&str]) -> Self {
        let actual: Option<Vec<&str>> = self
            .members()
            .iter()
            .map(|member| member.as_atom())
            .collect();
        if actual.as_deref() != Some(texts) {
            panic!(
                "{}: expected atoms {:?}, found {}",
                self.context, texts, self.node
            );
        }
        self
    }

    /// Assert this node is a list with `count` members
    pub fn member_count(self, count: usize) -> Self {
        let actual = self.members().len();
        assert_eq!(
            actual, count,
            "{}: expected {} members, found {} in {}",
            self.context, count, actual, self.node
        );
        self
    }

    /// Run assertions on the member at `index`
    pub fn member<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let members = self.members();
        let member = members.get(index).unwrap_or_else(|| {
            panic!(
                "{}: no member {} in {} ({} members)",
                self.context,
                index,
                self.node,
                members.len()
            )
        });
        check(NodeAssertion {
            node: member,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the canonical rendering of this node
    pub fn renders_as(self, expected: &str) -> Self {
        assert_eq!(
            self.node.to_string(),
            expected,
            "{}: rendering mismatch",
            self.context
        );
        self
    }

    /// Assert the list nesting depth of this node
    pub fn nesting(self, expected: usize) -> Self {
        assert_eq!(
            self.node.nesting(),
            expected,
            "{}: nesting mismatch for {}",
            self.context,
            self.node
        );
        self
    }

    fn members(&self) -> &'a [Node] {
        match self.node.members() {
            Some(members) => members,
            None => panic!("{}: expected a list, found atom {}", self.context, self.node),
        }
    }
}
