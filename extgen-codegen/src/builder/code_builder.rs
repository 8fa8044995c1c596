//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable, doc::comment_block};

/// Builds code with proper indentation from lines and [`Renderable`] nodes.
///
/// # Example
///
/// ```
/// use extgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export const commands = {")
///     .push_indent()
///     .push_jsdoc("Run")
///     .push_line("Run: \"demo.run\",")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "export const commands = {\n  /** Run */\n  Run: \"demo.run\",\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a documentation comment at the current indentation.
    ///
    /// Single-line text renders as `/** text */`; multi-line text as a
    /// `/** ... */` block with one ` * ` line per source line.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        for line in comment_block(text, 0) {
            self.push_line(&line);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&self.indent.repeat(self.indent_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_line("export const name = \"demo\"");
        assert_eq!(builder.build(), "export const name = \"demo\"\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("export interface A {")
            .push_indent()
            .push_line("\"a\": string,")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "export interface A {\n  \"a\": string,\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_line("a")
            .push_line("")
            .push_blank()
            .push_line("b");

        assert_eq!(builder.build(), "  a\n\n\n  b\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_jsdoc_single_line() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_jsdoc("Type union of all commands")
            .push_line("export type CommandId = never");

        assert_eq!(
            builder.build(),
            "/** Type union of all commands */\nexport type CommandId = never\n"
        );
    }

    #[test]
    fn test_jsdoc_multi_line_indented() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_jsdoc("Run\n@value `demo.run`");

        assert_eq!(
            builder.build(),
            "  /**\n   * Run\n   * @value `demo.run`\n   */\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let mut builder = CodeBuilder::new(Indent(4));
        builder.push_indent().push_line("x");
        assert_eq!(builder.build(), "    x\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "export const commands = {".to_string(),
                    body: vec![
                        CodeFragment::JsDoc("Run".to_string()),
                        CodeFragment::Line("Run: \"demo.run\",".to_string()),
                    ],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "export const commands = {\n  /** Run */\n  Run: \"demo.run\",\n}\n"
        );
    }

    #[test]
    fn test_emit_indent_fragment() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::Line("a".to_string()),
                    CodeFragment::indent(vec![CodeFragment::Line("b".to_string())]),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Node);
        assert_eq!(builder.build(), "a\n  b\n");
    }
}
