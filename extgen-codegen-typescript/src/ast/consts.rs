//! TypeScript const declaration builder.

use extgen_codegen::builder::{CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
}

/// Builder for exported TypeScript const declarations.
///
/// Statements are emitted without a trailing semicolon.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    doc: Option<String>,
    satisfies: Option<String>,
}

impl Const {
    /// A const initialized with a single-line expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, ConstValue::Expr(value.into()))
    }

    /// A const initialized with an object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self::with_value(name, ConstValue::Object(value))
    }

    fn with_value(name: impl Into<String>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            value,
            doc: None,
            satisfies: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Constrain the initializer with `satisfies <ty>` without widening it.
    pub fn satisfies(mut self, ty: impl Into<String>) -> Self {
        self.satisfies = Some(ty.into());
        self
    }

    fn satisfies_clause(&self) -> String {
        match &self.satisfies {
            Some(ty) => format!(" satisfies {}", ty),
            None => String::new(),
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        match &self.value {
            ConstValue::Expr(expr) => fragments.push(CodeFragment::Line(format!(
                "export const {} = {}{}",
                self.name,
                expr,
                self.satisfies_clause()
            ))),
            ConstValue::Object(object) => fragments.push(CodeFragment::Block {
                header: format!("export const {} = {{", self.name),
                body: object.to_fragments(),
                close: Some(format!("}}{}", self.satisfies_clause())),
            }),
        }

        fragments
    }
}
