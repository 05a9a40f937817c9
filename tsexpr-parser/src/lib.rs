//! # tsexpr
//!
//! A parser for Tree notation, a way of writing S-expressions with indentation instead of
//! parentheses.
//!
//! File Layout
//!
//! The crate follows the pipeline stages, each one living in its own module under
//! src/tsexpr:
//!   ├── token       Raw logos tokens and the Line record
//!   ├── lexing      Source text to lines (depth + atoms)
//!   ├── building    Lines to a canonical Node tree
//!   ├── parsing     The public entry points and options
//!   ├── formats     Node serializers (sexpr, tree, json) and their registry
//!   └── testing     Factories and fluent assertions for tests
//!
//! For testing guidelines, see the [testing module](tsexpr::testing).

pub mod tsexpr;
