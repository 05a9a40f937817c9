//! Tree building
//!
//!     Turns the line sequence from [lexing](crate::tsexpr::lexing) into a canonical
//!     [Node](crate::tsexpr::ast::Node) tree. See [tree_builder] for the algorithm.

pub mod tree_builder;

pub use tree_builder::{build_tree, TreeBuilder, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
