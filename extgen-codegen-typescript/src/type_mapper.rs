//! TypeScript type mapper implementation.

use extgen_codegen::builder::{PrimitiveType, TypeMapper};
use serde_json::Value;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, ty: PrimitiveType) -> String {
        ty.as_str().to_string()
    }

    fn map_literals(&self, values: &[Value]) -> String {
        if values.is_empty() {
            return "never".to_string();
        }
        let members: Vec<String> = values.iter().map(Value::to_string).collect();
        format!("({})", members.join(" | "))
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    fn map_string_map(&self, value: &str) -> String {
        format!("Record<string, {}>", value)
    }

    fn map_unknown(&self) -> String {
        "unknown".to_string()
    }
}
