//! Testing utilities
//!
//!     Tree notation depends on exact tab counts, which are easy to get wrong when typed into
//!     string literals and hard to see when a test fails. Two tools keep tests readable:
//!
//!         1. [factories] build nodes, lines and sources. `source(&[(0, "a"), (1, "b")])`
//!            spells out depths as numbers instead of escaped tabs.
//!         2. [assert_tree](fn@assert_tree) checks the shape of a parsed tree with a fluent
//!            API, reporting the path to the node that did not match.
//!
//!     ```rust,ignore
//!     use crate::tsexpr::testing::{assert_tree, factories::source};
//!
//!     let tree = parse(&source(&[(0, "a"), (1, "b c"), (1, "d")])).unwrap();
//!     assert_tree(&tree)
//!         .member_count(3)
//!         .member(0, |m| m.atom("a"))
//!         .member(1, |m| m.atoms(&["b", "c"]))
//!         .renders_as("(a (b c) d)");
//!     ```

pub mod factories;
pub mod tree_assertions;

pub use tree_assertions::{assert_tree, NodeAssertion};
