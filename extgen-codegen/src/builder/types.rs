//! Language-agnostic type system for code generation.
//!
//! This module provides abstractions for representing types in a way that
//! can be rendered to any target language via the [`TypeMapper`] trait.

use serde_json::Value;

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// A primitive type (string, number, boolean).
    Primitive(PrimitiveType),
    /// A union of literal values, in declaration order.
    Literals(Vec<Value>),
    /// An array/list type.
    Array(Box<TypeRef>),
    /// A string-keyed map with the given value type.
    StringMap(Box<TypeRef>),
    /// The top type.
    Unknown,
}

impl TypeRef {
    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a string-keyed map type reference.
    pub fn string_map(value: TypeRef) -> Self {
        Self::StringMap(Box::new(value))
    }

    /// Create a literal union.
    pub fn literals(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Literals(values.into_iter().collect())
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: Number type.
    pub fn number() -> Self {
        Self::Primitive(PrimitiveType::Number)
    }

    /// Convenience: Bool type.
    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }
}

/// Primitive types supported across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// String type (TS: string).
    String,
    /// Number type (TS: number).
    Number,
    /// Boolean type (TS: boolean).
    Bool,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
        }
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a union of literal values.
    fn map_literals(&self, values: &[Value]) -> String;

    /// Map an array type (e.g., `T[]`).
    fn map_array(&self, inner: &str) -> String;

    /// Map a string-keyed map type (e.g., `Record<string, T>`).
    fn map_string_map(&self, value: &str) -> String;

    /// Map the top type (e.g., `unknown`).
    fn map_unknown(&self) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Literals(values) => self.map_literals(values),
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::StringMap(value) => {
                let value_str = self.render_type(value);
                self.map_string_map(&value_str)
            }
            TypeRef::Unknown => self.map_unknown(),
        }
    }
}
