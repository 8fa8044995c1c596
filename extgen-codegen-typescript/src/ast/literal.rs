//! Literal serialization.
//!
//! Every value placed in generated code goes through `serde_json`, so quoting
//! and escaping never depend on the content.

use serde_json::Value;

/// Quote `s` as a string literal.
pub fn string_literal(s: &str) -> String {
    Value::from(s).to_string()
}

/// Serialize any JSON value as an expression.
pub fn json_literal(value: &Value) -> String {
    value.to_string()
}

/// Serialize a possibly absent value, with `undefined` for absence.
///
/// An explicit JSON `null` stays `null`.
pub fn optional_literal(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), json_literal)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("demo"), "\"demo\"");
        assert_eq!(string_literal("a\"b\\c\nd"), "\"a\\\"b\\\\c\\nd\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_json_literal() {
        assert_eq!(json_literal(&json!(1)), "1");
        assert_eq!(json_literal(&json!(true)), "true");
        assert_eq!(json_literal(&json!(["a", 2])), "[\"a\",2]");
        assert_eq!(json_literal(&json!({ "b": 1, "a": 2 })), "{\"b\":1,\"a\":2}");
    }

    #[test]
    fn test_optional_literal() {
        assert_eq!(optional_literal(None), "undefined");
        assert_eq!(optional_literal(Some(&Value::Null)), "null");
        assert_eq!(optional_literal(Some(&json!("x"))), "\"x\"");
    }
}
