//! Configuration schema nodes.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The `type` of a configuration schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Boolean,
    String,
    Number,
    Array,
    Object,
    /// Any other value, including `integer`, `null` and type lists.
    Unknown,
}

impl SchemaType {
    /// Parse a schema type name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "number" => Self::Number,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Unknown,
        }
    }
}

/// One entry of `contributes.configuration.properties`.
///
/// Deserialization never fails: any JSON value is accepted and fields with an
/// unexpected shape are dropped, so that generation can fall back to `unknown`
/// instead of rejecting the manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SchemaNode {
    /// The raw `type` string as written, if it was a string.
    pub type_name: Option<String>,
    /// Parsed `type`.
    pub ty: Option<SchemaType>,
    /// Allowed values (`enum`).
    pub enum_values: Option<Vec<Value>>,
    /// Element schema of an `array` node.
    pub items: Option<Box<SchemaNode>>,
    /// `None` when no default is declared, `Some(Value::Null)` for `"default": null`.
    pub default: Option<Value>,
    /// `description`, falling back to `markdownDescription`.
    pub description: Option<String>,
}

impl SchemaNode {
    /// Create a node of the given type.
    pub fn of_type(name: &str) -> Self {
        Self {
            type_name: Some(name.to_string()),
            ty: Some(SchemaType::from_name(name)),
            ..Self::default()
        }
    }

    pub fn with_enum(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_items(mut self, items: SchemaNode) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let type_name = obj.get("type").and_then(Value::as_str).map(str::to_string);
        let ty = obj.get("type").map(|ty| match ty.as_str() {
            Some(name) => SchemaType::from_name(name),
            None => SchemaType::Unknown,
        });
        let description = ["description", "markdownDescription"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str))
            .map(str::to_string);

        Self {
            type_name,
            ty,
            enum_values: obj.get("enum").and_then(Value::as_array).cloned(),
            items: obj
                .get("items")
                .and_then(Value::as_object)
                .map(|items| Box::new(Self::from_object(items))),
            default: obj.get("default").cloned(),
            description,
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        match value.as_object() {
            Some(obj) => Self::from_object(obj),
            None => Self::default(),
        }
    }
}
