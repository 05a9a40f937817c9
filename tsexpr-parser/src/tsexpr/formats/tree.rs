//! Tree notation writer
//!
//!     Writes a tree back as Tree notation, so that parsing the output gives the same tree.
//!     Each node is written as an item at some depth:
//!
//!         - an atom is a line holding that atom
//!         - a list of atoms is one line holding all of them
//!         - a list headed by an atom, with some list member, is a line holding the head and
//!           the remaining members written one level deeper
//!         - a list headed by a list has no head line: its members are written one level
//!           deeper, leaving the current depth empty, which the parser reads as a skipped
//!           level
//!
//!     The last rule only works for the first item of a sibling group. Anywhere else the
//!     deeper lines would attach to the previous line as its children, so such trees have no
//!     Tree notation and are rejected. Empty lists below the top and singleton lists (which a
//!     parse never produces) are rejected as well.
//!
//!     The top level is a container of its own: a list headed by a list is written as
//!     siblings at depth 0.

use crate::tsexpr::ast::{Atom, Node};

use super::registry::{FormatError, Formatter};

/// Knobs for the Tree notation writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeWriterOptions {
    /// End the last line with a newline like every other one.
    pub trailing_newline: bool,
}

impl Default for TreeWriterOptions {
    fn default() -> Self {
        TreeWriterOptions {
            trailing_newline: true,
        }
    }
}

/// Write `node` as Tree notation.
pub fn to_tree_notation(node: &Node, options: &TreeWriterOptions) -> Result<String, FormatError> {
    let mut writer = TreeWriter { out: String::new() };

    match node {
        Node::List(members) if members.is_empty() => {}
        Node::List(members) if members.first().is_some_and(Node::is_list) => {
            check_arity(node)?;
            writer.siblings(members, 0)?;
        }
        _ => writer.item(node, 0, true)?,
    }

    if !options.trailing_newline && writer.out.ends_with('\n') {
        writer.out.pop();
    }
    Ok(writer.out)
}

struct TreeWriter {
    out: String,
}

impl TreeWriter {
    fn line<'a>(&mut self, depth: usize, atoms: impl IntoIterator<Item = &'a Atom>) {
        for _ in 0..depth {
            self.out.push('\t');
        }
        for (index, atom) in atoms.into_iter().enumerate() {
            if index > 0 {
                self.out.push(' ');
            }
            self.out.push_str(atom.as_str());
        }
        self.out.push('\n');
    }

    fn siblings(&mut self, items: &[Node], depth: usize) -> Result<(), FormatError> {
        for (index, item) in items.iter().enumerate() {
            self.item(item, depth, index == 0)?;
        }
        Ok(())
    }

    fn item(&mut self, node: &Node, depth: usize, leads_group: bool) -> Result<(), FormatError> {
        let members = match node {
            Node::Atom(atom) => {
                self.line(depth, [atom]);
                return Ok(());
            }
            Node::List(members) => members,
        };
        check_arity(node)?;

        let atoms: Option<Vec<&Atom>> = members
            .iter()
            .map(|member| match member {
                Node::Atom(atom) => Some(atom),
                Node::List(_) => None,
            })
            .collect();
        if let Some(atoms) = atoms {
            self.line(depth, atoms);
            return Ok(());
        }

        match &members[0] {
            Node::Atom(head) => {
                self.line(depth, [head]);
                self.siblings(&members[1..], depth + 1)
            }
            Node::List(_) if leads_group => self.siblings(members, depth + 1),
            Node::List(_) => Err(FormatError::Unrepresentable(format!(
                "{node} is headed by a list but follows a sibling"
            ))),
        }
    }
}

fn check_arity(node: &Node) -> Result<(), FormatError> {
    match node.members().map(<[Node]>::len) {
        Some(0) => Err(FormatError::Unrepresentable(
            "empty list below the top level".to_string(),
        )),
        Some(1) => Err(FormatError::Unrepresentable(format!(
            "{node} is a singleton list"
        ))),
        _ => Ok(()),
    }
}

/// Tree notation formatter for the registry.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    pub options: TreeWriterOptions,
}

impl Formatter for TreeFormatter {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        to_tree_notation(node, &self.options)
    }

    fn description(&self) -> &'static str {
        "Indentation-based Tree notation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsexpr::parsing::parse;
    use crate::tsexpr::testing::factories::{atom, list};

    fn write(node: &Node) -> Result<String, FormatError> {
        to_tree_notation(node, &TreeWriterOptions::default())
    }

    #[test]
    fn test_atom() {
        assert_eq!(write(&atom("x")).unwrap(), "x\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(write(&Node::List(vec![])).unwrap(), "");
    }

    #[test]
    fn test_atom_list_is_one_line() {
        let tree = list(vec![atom("a"), atom("b"), atom("c")]);
        assert_eq!(write(&tree).unwrap(), "a b c\n");
    }

    #[test]
    fn test_headed_list() {
        let tree = list(vec![atom("a"), list(vec![atom("b"), atom("c")]), atom("d")]);
        assert_eq!(write(&tree).unwrap(), "a\n\tb c\n\td\n");
    }

    #[test]
    fn test_nested_document_round_trips() {
        let source = "a\n\tb\n\t\tc d e\n\t\tf\n\tg\nh\n";
        let tree = parse(source).unwrap();
        assert_eq!(write(&tree).unwrap(), source);
    }

    #[test]
    fn test_list_headed_child_uses_skip() {
        let tree = parse("a\n\t\tb c d\n\t\te\n\t\t\t\tf\n\t\t\t\tg\n\t\t\th\n\ti").unwrap();
        let written = write(&tree).unwrap();
        assert_eq!(written, "a\n\t\tb c d\n\t\te\n\t\t\tf g\n\t\t\th\n\ti\n");
        assert_eq!(parse(&written).unwrap(), tree);
    }

    #[test]
    fn test_list_headed_list_after_sibling_is_rejected() {
        let tree = list(vec![
            atom("a"),
            atom("b"),
            list(vec![list(vec![atom("c"), atom("d")]), atom("e")]),
        ]);
        assert!(matches!(write(&tree), Err(FormatError::Unrepresentable(_))));
    }

    #[test]
    fn test_nested_empty_and_singleton_are_rejected() {
        let empty = list(vec![atom("a"), Node::List(vec![])]);
        assert_eq!(
            write(&empty),
            Err(FormatError::Unrepresentable(
                "empty list below the top level".to_string()
            ))
        );

        let singleton = list(vec![atom("a"), Node::List(vec![atom("b")])]);
        assert_eq!(
            write(&singleton),
            Err(FormatError::Unrepresentable("(b) is a singleton list".to_string()))
        );
    }

    #[test]
    fn test_without_trailing_newline() {
        let options = TreeWriterOptions {
            trailing_newline: false,
        };
        let tree = list(vec![atom("a"), atom("b")]);
        assert_eq!(to_tree_notation(&tree, &options).unwrap(), "a b");
    }
}
