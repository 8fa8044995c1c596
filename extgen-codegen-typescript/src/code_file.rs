//! CodeFile abstraction for structured TypeScript file generation.

use extgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a TypeScript file.
///
/// The body is a list of sections rendered in order with exactly one blank
/// line between consecutive sections. The rendered text ends with a single
/// newline (or is empty).
///
/// # Example
///
/// ```
/// use extgen_codegen_typescript::{CodeFile, ast::{Const, LineComment}};
///
/// let code = CodeFile::new()
///     .add(LineComment::new("generated"))
///     .section(&[&LineComment::new("Meta info"), &Const::new("name", "\"demo\"")])
///     .render();
///
/// assert_eq!(code, "// generated\n\n// Meta info\nexport const name = \"demo\"\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section made of a single node.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a section made of several nodes rendered back to back.
    pub fn section(mut self, nodes: &[&dyn Renderable]) -> Self {
        self.body
            .push(nodes.iter().flat_map(|node| node.to_fragments()).collect());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
