//! JSON output
//!
//! Atoms become strings and lists become arrays, following the untagged serde
//! representation of [Node].

use crate::tsexpr::ast::Node;

use super::registry::{FormatError, Formatter};

/// Serialize a tree to JSON.
pub fn to_json(node: &Node, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// JSON formatter for the registry.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        to_json(node, self.pretty)
    }

    fn description(&self) -> &'static str {
        "Nested JSON arrays of strings"
    }
}
