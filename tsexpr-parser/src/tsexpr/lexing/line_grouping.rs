//! Line grouping
//!
//!     Splits the flat token stream on newlines and turns each physical line into a [Line]:
//!
//!         - depth is the number of Tab tokens before anything else on the line. A line that
//!           starts with a space has depth 0, whatever follows.
//!         - atoms are the Atom tokens of the line in order. Tabs and spaces after the
//!           leading run only separate atoms.
//!
//!     Lines with no atoms carry no structure and are dropped. Lines that hold nothing but
//!     tabs are the one ambiguous case: they look indented but say nothing, so what happens
//!     to them is decided by [BlankLinePolicy].

use serde::Deserialize;

use crate::tsexpr::ast::{Atom, StructuralError};
use crate::tsexpr::token::{Line, Token};

/// What to do with a line made only of tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankLinePolicy {
    /// Treat it like an empty line.
    #[default]
    Ignore,
    /// Fail the parse.
    Reject,
}

/// Accumulates the tokens of the physical line being read.
struct PendingLine {
    number: usize,
    depth: usize,
    leading: bool,
    atoms: Vec<Atom>,
}

impl PendingLine {
    fn new(number: usize) -> Self {
        PendingLine {
            number,
            depth: 0,
            leading: true,
            atoms: Vec::new(),
        }
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Tab if self.leading => self.depth += 1,
            Token::Atom(text) => {
                self.leading = false;
                self.atoms.push(Atom::from_token(text));
            }
            _ => self.leading = false,
        }
    }

    /// Close the line, returning it unless it is blank.
    fn finish(self, policy: BlankLinePolicy) -> Result<Option<Line>, StructuralError> {
        if !self.atoms.is_empty() {
            return Ok(Some(Line {
                number: self.number,
                depth: self.depth,
                atoms: self.atoms,
            }));
        }

        if self.depth > 0 && policy == BlankLinePolicy::Reject {
            return Err(StructuralError::new(
                self.number,
                format!("line holds {} tabs and no atoms", self.depth),
            ));
        }

        log::trace!("skipping blank line {}", self.number);
        Ok(None)
    }
}

/// Group tokens into lines, dropping blank ones.
pub fn group_lines(
    tokens: Vec<Token>,
    policy: BlankLinePolicy,
) -> Result<Vec<Line>, StructuralError> {
    let mut lines = Vec::new();
    let mut pending = PendingLine::new(1);

    for token in tokens {
        if token == Token::Newline {
            let next = PendingLine::new(pending.number + 1);
            lines.extend(pending.finish(policy)?);
            pending = next;
        } else {
            pending.push(token);
        }
    }
    lines.extend(pending.finish(policy)?);

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsexpr::lexing::tokenize;

    fn group(source: &str, policy: BlankLinePolicy) -> Result<Vec<(usize, usize, String)>, StructuralError> {
        Ok(group_lines(tokenize(source), policy)?
            .into_iter()
            .map(|line| (line.number, line.depth, line.to_string().trim_start().to_string()))
            .collect())
    }

    #[test]
    fn test_depth_counts_leading_tabs_only() {
        let lines = group("\t\ta\tb\n", BlankLinePolicy::Ignore).unwrap();
        assert_eq!(lines, vec![(1, 2, "a b".to_string())]);
    }

    #[test]
    fn test_spaces_never_add_depth() {
        let lines = group("    a\n \tb\n", BlankLinePolicy::Ignore).unwrap();
        assert_eq!(
            lines,
            vec![(1, 0, "a".to_string()), (2, 0, "b".to_string())]
        );
    }

    #[test]
    fn test_empty_and_space_lines_are_skipped() {
        let lines = group("a\n\n   \nb", BlankLinePolicy::Reject).unwrap();
        assert_eq!(
            lines,
            vec![(1, 0, "a".to_string()), (4, 0, "b".to_string())]
        );
    }

    #[test]
    fn test_tab_only_line_ignored_by_default() {
        let lines = group("a\n\t\t\n\tb", BlankLinePolicy::Ignore).unwrap();
        assert_eq!(
            lines,
            vec![(1, 0, "a".to_string()), (3, 1, "b".to_string())]
        );
    }

    #[test]
    fn test_tab_only_line_rejected_on_request() {
        let error = group("a\n\t\t\n\tb", BlankLinePolicy::Reject).unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(error.message, "line holds 2 tabs and no atoms");
    }

    #[test]
    fn test_trailing_tabs_at_end_of_input() {
        assert!(group("a\n\t", BlankLinePolicy::Ignore).unwrap().len() == 1);
        assert_eq!(group("a\n\t", BlankLinePolicy::Reject).unwrap_err().line, 2);
    }

    #[test]
    fn test_unicode_spaces_never_add_depth() {
        let lines = group("\u{3000}a\u{00A0}b\n\t\u{00A0}c", BlankLinePolicy::Ignore).unwrap();
        assert_eq!(
            lines,
            vec![(1, 0, "a b".to_string()), (2, 1, "c".to_string())]
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(group("", BlankLinePolicy::Reject).unwrap(), vec![]);
    }
}
