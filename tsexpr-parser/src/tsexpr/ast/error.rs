//! Error type for parsing

use std::fmt;

/// The indentation of a document cannot be resolved into a consistent nesting.
///
/// Parsing is all or nothing: when this is returned no tree was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    /// 1-based line where the problem was detected
    pub line: usize,
    pub message: String,
}

impl StructuralError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        StructuralError {
            line,
            message: message.into(),
        }
    }

    /// Render the error followed by the source lines around it.
    pub fn with_context(&self, source: &str) -> String {
        format!("{}\n\n{}", self, format_source_context(source, self.line))
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Structural error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for StructuralError {}

/// Format source code context around a 1-based line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// Tabs are shown as `→` so the indentation that caused the error is visible.
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            lines[line_num].replace('\t', "→")
        ));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = StructuralError::new(3, "bad dedent");
        assert_eq!(error.to_string(), "Structural error at line 3: bad dedent");
    }

    #[test]
    fn test_format_source_context() {
        let source = "l1\nl2\nl3\n\terror\nl5\nl6\nl7";
        let context = format_source_context(source, 4);

        assert!(context.contains("l2"));
        assert!(context.contains(">>   4 | →error"));
        assert!(context.contains("l6"));
        assert!(!context.contains("l1"));
        assert!(!context.contains("l7"));
    }

    #[test]
    fn test_context_past_end_is_empty() {
        assert_eq!(format_source_context("a", 10), "");
    }

    #[test]
    fn test_with_context() {
        let error = StructuralError::new(1, "oops");
        let rendered = error.with_context("a\nb");
        assert!(rendered.starts_with("Structural error at line 1: oops\n\n>>   1 | a"));
    }
}
