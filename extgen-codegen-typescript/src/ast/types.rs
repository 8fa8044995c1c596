//! TypeScript union type builder.

use extgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for exported TypeScript union types.
///
/// Members are kept in insertion order, duplicates included. An empty union
/// resolves to `never`; otherwise each member gets its own `| member` line.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        if self.variants.is_empty() {
            fragments.push(CodeFragment::Line(format!("export type {} = never", self.name)));
        } else {
            fragments.push(CodeFragment::Line(format!("export type {} =", self.name)));
            fragments.push(CodeFragment::indent(
                self.variants
                    .iter()
                    .map(|variant| CodeFragment::Line(format!("| {}", variant)))
                    .collect(),
            ));
        }

        fragments
    }
}
