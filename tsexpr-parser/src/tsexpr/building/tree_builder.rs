//! Tree Builder - Builds a canonical Node tree from Lines
//!
//!     The builder walks the lines depth first, one recursive level per indentation depth.
//!     Each level collects its direct children: the lines at exactly its child depth, plus
//!     whatever those lines contain. A line that is not deeper than the level's parent is
//!     left in the stream, peeked but not consumed, for an ancestor level to pick up.
//!
//! Attaching a line
//!
//!     A line at the child depth becomes one sibling. Its value is its own atoms; if deeper
//!     lines follow, they are collected as its children and the value becomes a list headed
//!     by the line's atom with the children as its tail.
//!
//!     Only a line with a single atom can head a block. A line like `b c d` followed by a
//!     deeper line has no consistent nesting (is the child a member of `(b c d)` or a
//!     sibling of it?) and is a structural error.
//!
//! Skipped levels
//!
//!     A line deeper than the child depth skips indentation levels. Instead of attaching it,
//!     the builder opens a synthetic level one deeper that has no head line, collects
//!     siblings there, and wraps them in a list. A gap of k levels opens k synthetic levels,
//!     so list nesting follows indentation depth even across the gap. Consecutive lines at
//!     the skipped depth share one synthetic level.
//!
//! Collapse
//!
//!     Every finished list goes through [Node::collapse], so singleton wrappers, including
//!     synthetic ones, disappear as they are built. There is no separate normalization pass.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::tsexpr::ast::{Node, StructuralError};
use crate::tsexpr::token::Line;

/// Deepest indentation accepted unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Upper bound for any configured depth limit. The builder recurses once per level, so this
/// keeps the deepest accepted document well inside a default thread stack.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Build a tree from lines, using the default depth limit.
pub fn build_tree(lines: Vec<Line>) -> Result<Node, StructuralError> {
    TreeBuilder::new(lines).build()
}

/// Recursive-descent builder over a line sequence with one line of lookahead.
pub struct TreeBuilder {
    lines: Peekable<IntoIter<Line>>,
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new(lines: Vec<Line>) -> Self {
        TreeBuilder {
            lines: lines.into_iter().peekable(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Reject lines indented deeper than `max_depth` tabs, capped at [MAX_DEPTH_CEILING].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Consume all lines and return the collapsed top level.
    ///
    /// The top level is a virtual container below depth 0, so depth-0 lines are its direct
    /// children. An input without lines yields the empty list.
    pub fn build(mut self) -> Result<Node, StructuralError> {
        let siblings = self.collect_siblings(0)?;
        Ok(Node::collapse(siblings))
    }

    /// Collect the siblings whose lines sit at `child_depth`, stopping at the first line
    /// that is shallower.
    fn collect_siblings(&mut self, child_depth: usize) -> Result<Vec<Node>, StructuralError> {
        let mut siblings = Vec::new();

        while let Some(next) = self.lines.peek() {
            if next.depth < child_depth {
                break;
            }
            if next.depth > self.max_depth {
                return Err(StructuralError::new(
                    next.number,
                    format!(
                        "indentation depth {} exceeds the maximum of {}",
                        next.depth, self.max_depth
                    ),
                ));
            }

            let value = match self.lines.next_if(|line| line.depth == child_depth) {
                Some(line) => self.attach(line)?,
                None => {
                    log::trace!("opening synthetic level at depth {child_depth}");
                    Node::collapse(self.collect_siblings(child_depth + 1)?)
                }
            };
            siblings.push(value);
        }

        Ok(siblings)
    }

    /// Build the value of `line` together with the block indented under it.
    fn attach(&mut self, line: Line) -> Result<Node, StructuralError> {
        log::trace!("line {} at depth {}: {}", line.number, line.depth, line);

        let opens_block = self
            .lines
            .peek()
            .is_some_and(|next| next.depth > line.depth);
        if !opens_block {
            return Ok(line.into_value());
        }

        if !line.can_open_block() {
            let child_line = self.lines.peek().map_or(line.number, |next| next.number);
            return Err(StructuralError::new(
                child_line,
                format!(
                    "line {} holds {} atoms and cannot open an indented block",
                    line.number,
                    line.atoms.len()
                ),
            ));
        }

        let child_depth = line.depth + 1;
        let mut members: Vec<Node> = line.atoms.into_iter().map(Node::Atom).collect();
        members.extend(self.collect_siblings(child_depth)?);
        Ok(Node::collapse(members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsexpr::testing::factories::{atom, list, mk_line};

    #[test]
    fn test_empty_input_is_empty_list() {
        assert_eq!(build_tree(vec![]).unwrap(), Node::List(vec![]));
    }

    #[test]
    fn test_single_atom_is_bare() {
        let tree = build_tree(vec![mk_line(1, 0, &["x"])]).unwrap();
        assert_eq!(tree, atom("x"));
    }

    #[test]
    fn test_single_line_is_list() {
        let tree = build_tree(vec![mk_line(1, 0, &["x", "y"])]).unwrap();
        assert_eq!(tree, list(vec![atom("x"), atom("y")]));
    }

    #[test]
    fn test_children_become_tail() {
        let tree = build_tree(vec![
            mk_line(1, 0, &["a"]),
            mk_line(2, 1, &["b"]),
            mk_line(3, 1, &["c", "d"]),
        ])
        .unwrap();
        assert_eq!(
            tree,
            list(vec![atom("a"), atom("b"), list(vec![atom("c"), atom("d")])])
        );
    }

    #[test]
    fn test_top_level_siblings() {
        let tree = build_tree(vec![mk_line(1, 0, &["a"]), mk_line(2, 0, &["b"])]).unwrap();
        assert_eq!(tree, list(vec![atom("a"), atom("b")]));
    }

    #[test]
    fn test_skip_groups_lines_at_skipped_depth() {
        // a
        //         b
        //         c
        //     d
        let tree = build_tree(vec![
            mk_line(1, 0, &["a"]),
            mk_line(2, 2, &["b"]),
            mk_line(3, 2, &["c"]),
            mk_line(4, 1, &["d"]),
        ])
        .unwrap();
        assert_eq!(
            tree,
            list(vec![atom("a"), list(vec![atom("b"), atom("c")]), atom("d")])
        );
    }

    #[test]
    fn test_singleton_skip_collapses() {
        let tree = build_tree(vec![mk_line(1, 0, &["a"]), mk_line(2, 3, &["b"])]).unwrap();
        assert_eq!(tree, list(vec![atom("a"), atom("b")]));
    }

    #[test]
    fn test_leading_skip_at_top_level() {
        let tree = build_tree(vec![
            mk_line(1, 1, &["a"]),
            mk_line(2, 1, &["b"]),
            mk_line(3, 0, &["c"]),
        ])
        .unwrap();
        assert_eq!(
            tree,
            list(vec![list(vec![atom("a"), atom("b")]), atom("c")])
        );
    }

    #[test]
    fn test_multi_atom_head_with_block_fails() {
        let error = build_tree(vec![
            mk_line(1, 0, &["a", "b"]),
            mk_line(2, 1, &["c"]),
        ])
        .unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(
            error.message,
            "line 1 holds 2 atoms and cannot open an indented block"
        );
    }

    #[test]
    fn test_multi_atom_head_with_skipped_block_fails() {
        let error = build_tree(vec![
            mk_line(1, 0, &["a", "b"]),
            mk_line(2, 3, &["c"]),
        ])
        .unwrap_err();
        assert_eq!(error.line, 2);
    }

    #[test]
    fn test_max_depth() {
        let lines = vec![mk_line(1, 0, &["a"]), mk_line(2, 3, &["b"])];
        assert!(TreeBuilder::new(lines.clone())
            .with_max_depth(3)
            .build()
            .is_ok());

        let error = TreeBuilder::new(lines)
            .with_max_depth(2)
            .build()
            .unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(
            error.message,
            "indentation depth 3 exceeds the maximum of 2"
        );
    }

    #[test]
    fn test_max_depth_is_capped() {
        let lines = vec![mk_line(1, 0, &["a"]), mk_line(2, 200_000, &["b"])];
        let error = TreeBuilder::new(lines)
            .with_max_depth(usize::MAX)
            .build()
            .unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(
            error.message,
            format!("indentation depth 200000 exceeds the maximum of {MAX_DEPTH_CEILING}")
        );
    }

    #[test]
    fn test_depth_at_ceiling_builds() {
        let lines = vec![
            mk_line(1, 0, &["a"]),
            mk_line(2, MAX_DEPTH_CEILING, &["b"]),
        ];
        let tree = TreeBuilder::new(lines)
            .with_max_depth(usize::MAX)
            .build()
            .unwrap();
        assert_eq!(tree, list(vec![atom("a"), atom("b")]));
    }
}
