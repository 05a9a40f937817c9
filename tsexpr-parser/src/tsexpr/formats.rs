//! Output format implementations for Node serialization
//!
//! This module contains the formats a parsed tree can be written to:
//! - sexpr: canonical parenthesis text
//! - tree: Tree notation, the inverse of the parser
//! - json: nested JSON arrays of strings

pub mod json;
pub mod registry;
pub mod sexpr;
pub mod tree;

pub use json::{to_json, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use sexpr::{render, SexprFormatter};
pub use tree::{to_tree_notation, TreeFormatter, TreeWriterOptions};
