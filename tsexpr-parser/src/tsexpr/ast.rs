//! Tree model
//!
//!     A parsed document is a single [Node]: either an [Atom] or a list of nodes. Nodes own
//!     their children outright, there is no sharing and no cycles. Trees are built once by the
//!     [tree builder](crate::tsexpr::building) and never mutated afterwards.
//!
//!     See [node] for the canonical form rules.

pub mod error;
pub mod node;

pub use error::{format_source_context, StructuralError};
pub use node::{Atom, Node};
