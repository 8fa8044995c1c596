//! TypeScript interface builder.

use extgen_codegen::builder::{CodeFragment, Renderable};

use super::string_literal;

#[derive(Debug, Clone)]
struct InterfaceField {
    /// Key as written (bare identifier or quoted string)
    name: String,
    ty: String,
}

/// Builder for exported TypeScript interfaces.
///
/// Fields are required and separated by commas, one per line.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field with a bare key.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Add a field whose name is quoted as a string literal.
    pub fn quoted_field(self, name: &str, ty: impl Into<String>) -> Self {
        self.field(string_literal(name), ty)
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(format!("{}: {},", field.name, field.ty)))
            .collect();

        vec![CodeFragment::Block {
            header: format!("export interface {} {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("ConfigurationTypeMap");
        assert_eq!(render(&i), "export interface ConfigurationTypeMap {\n}\n");
    }

    #[test]
    fn test_interface_with_quoted_fields() {
        let i = Interface::new("ConfigurationTypeMap")
            .quoted_field("demo.level", "number")
            .quoted_field("demo.mode", "(\"a\" | \"b\")");
        assert_eq!(
            render(&i),
            "export interface ConfigurationTypeMap {\n  \"demo.level\": number,\n  \"demo.mode\": (\"a\" | \"b\"),\n}\n"
        );
    }

    #[test]
    fn test_interface_with_bare_field() {
        let i = Interface::new("Config").field("level", "number");
        assert_eq!(render(&i), "export interface Config {\n  level: number,\n}\n");
    }
}
