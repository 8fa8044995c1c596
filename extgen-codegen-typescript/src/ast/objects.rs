//! TypeScript/JavaScript object literal builder.

use extgen_codegen::builder::{CodeFragment, Renderable};

use super::string_literal;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    /// Key as written (bare identifier or quoted string)
    pub key: String,
    /// Raw expression (will not be quoted)
    pub value: String,
    pub doc: Option<String>,
}

impl Property {
    /// Create a property with a raw expression value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            doc: None,
        }
    }

    /// Create a property whose key is quoted as a string literal.
    pub fn quoted(key: &str, value: impl Into<String>) -> Self {
        Self::new(string_literal(key), value)
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Renders only the property lines (each with a trailing comma); the
/// enclosing braces belong to the declaration that owns the object.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add properties from an iterator.
    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .flat_map(|property| {
                let mut fragments = Vec::new();
                if let Some(doc) = &property.doc {
                    fragments.push(CodeFragment::jsdoc(doc));
                }
                fragments.push(CodeFragment::Line(format!(
                    "{}: {},",
                    property.key, property.value
                )));
                fragments
            })
            .collect()
    }
}
