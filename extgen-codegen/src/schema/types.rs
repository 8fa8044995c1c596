//! Schema-node to type mapping.

use extgen_manifest::{SchemaNode, SchemaType};

use crate::builder::TypeRef;

/// Map a configuration schema node to a language-agnostic type.
///
/// Total: an absent node, a missing or unrecognized `type`, or an `enum` on
/// anything but a string all degrade instead of failing.
///
/// | node | type |
/// |---|---|
/// | `boolean` | bool |
/// | `string` | string, or a literal union when `enum` is present |
/// | `number` | number |
/// | `array` | array of the mapped `items`, or of unknown |
/// | `object` | string-keyed map of unknown |
/// | anything else | unknown |
pub fn type_ref(node: Option<&SchemaNode>) -> TypeRef {
    let Some(node) = node else {
        return TypeRef::Unknown;
    };

    match node.ty {
        Some(SchemaType::Boolean) => TypeRef::bool(),
        Some(SchemaType::String) => match &node.enum_values {
            Some(values) => TypeRef::literals(values.iter().cloned()),
            None => TypeRef::string(),
        },
        Some(SchemaType::Number) => TypeRef::number(),
        Some(SchemaType::Array) => match &node.items {
            Some(items) => TypeRef::array(type_ref(Some(items))),
            None => TypeRef::array(TypeRef::Unknown),
        },
        Some(SchemaType::Object) => TypeRef::string_map(TypeRef::Unknown),
        Some(SchemaType::Unknown) | None => TypeRef::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(
            type_ref(Some(&SchemaNode::of_type("boolean"))),
            TypeRef::bool()
        );
        assert_eq!(
            type_ref(Some(&SchemaNode::of_type("string"))),
            TypeRef::string()
        );
        assert_eq!(
            type_ref(Some(&SchemaNode::of_type("number"))),
            TypeRef::number()
        );
    }

    #[test]
    fn test_string_enum() {
        let node = SchemaNode::of_type("string").with_enum(["off", "on"]);
        assert_eq!(
            type_ref(Some(&node)),
            TypeRef::literals([json!("off"), json!("on")])
        );
    }

    #[test]
    fn test_enum_ignored_on_other_types() {
        let node = SchemaNode::of_type("number").with_enum([1, 2]);
        assert_eq!(type_ref(Some(&node)), TypeRef::number());
    }

    #[test]
    fn test_arrays() {
        let bare = SchemaNode::of_type("array");
        assert_eq!(type_ref(Some(&bare)), TypeRef::array(TypeRef::Unknown));

        let nested = SchemaNode::of_type("array")
            .with_items(SchemaNode::of_type("string").with_enum(["a", "b"]));
        assert_eq!(
            type_ref(Some(&nested)),
            TypeRef::array(TypeRef::literals([json!("a"), json!("b")]))
        );
    }

    #[test]
    fn test_object() {
        assert_eq!(
            type_ref(Some(&SchemaNode::of_type("object"))),
            TypeRef::string_map(TypeRef::Unknown)
        );
    }

    #[test]
    fn test_unknown_fallbacks() {
        assert_eq!(type_ref(None), TypeRef::Unknown);
        assert_eq!(type_ref(Some(&SchemaNode::default())), TypeRef::Unknown);
        assert_eq!(
            type_ref(Some(&SchemaNode::of_type("integer"))),
            TypeRef::Unknown
        );
    }
}
