//! Line comments.

use extgen_codegen::builder::{CodeFragment, Renderable};

/// One or more `// ` comment lines.
#[derive(Debug, Clone)]
pub struct LineComment {
    lines: Vec<String>,
}

impl LineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Append another comment line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }
}

impl Renderable for LineComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.lines
            .iter()
            .map(|line| CodeFragment::Line(format!("// {}", line)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_line_comment() {
        assert_eq!(render(&LineComment::new("Meta info")), "// Meta info\n");
    }

    #[test]
    fn test_multiple_lines() {
        let comment = LineComment::new("first").line("@see second");
        assert_eq!(render(&comment), "// first\n// @see second\n");
    }
}
