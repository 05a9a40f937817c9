//! Output formats by name
//!
//! Every output format is a [Formatter]. [FormatRegistry] maps format names to formatters so
//! that callers (and configuration) can pick one by name, and so that a configured formatter
//! can replace the default one under the same name.

use crate::tsexpr::ast::Node;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound(String),
    /// The tree has no spelling in the requested format
    Unrepresentable(String),
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::Unrepresentable(msg) => write!(f, "Cannot represent tree: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "sexpr"
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn serialize(&self, node: &Node) -> Result<String, FormatError>;
}

/// Formatters keyed by name, kept in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all.
    pub fn empty() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// The sexpr, tree and json formats with their default settings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(super::SexprFormatter);
        registry.register(super::TreeFormatter::default());
        registry.register(super::JsonFormatter::default());
        registry
    }

    /// Add `formatter`, replacing the one registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.name(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn serialize(&self, node: &Node, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(node)
    }

    /// Names and descriptions of the registered formats, in name order.
    pub fn formats(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .values()
            .map(|formatter| (formatter.name(), formatter.description()))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
