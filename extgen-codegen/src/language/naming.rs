//! Naming conventions for generated members.

/// Language-specific naming conventions.
///
/// Defines how qualified manifest keys (`demo.showOutput`) become member
/// names (`ShowOutput`) in the generated module.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a namespace-relative key into a member name
    pub key_to_member: fn(&str) -> String,
    /// Whether a transformed name can be used as a bare member name
    pub is_valid_member: fn(&str) -> bool,
    /// Repair a name rejected by `is_valid_member` (e.g., "2fa" -> "_2fa")
    pub escape_invalid: fn(&str) -> String,
}

impl NamingConvention {
    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if (self.is_valid_member)(name) {
            name.to_string()
        } else {
            (self.escape_invalid)(name)
        }
    }

    /// Member name for a qualified key.
    ///
    /// `namespace` (e.g., `"demo."`) is stripped when the key starts with it;
    /// keys outside the namespace are converted whole.
    pub fn member_name(&self, key: &str, namespace: Option<&str>) -> String {
        let local = namespace
            .and_then(|ns| key.strip_prefix(ns))
            .unwrap_or(key);
        self.safe_name(&(self.key_to_member)(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.replace('.', "_").to_uppercase()
    }

    fn non_empty(s: &str) -> bool {
        !s.is_empty()
    }

    fn placeholder(_: &str) -> String {
        "EMPTY".to_string()
    }

    const UPPER: NamingConvention = NamingConvention {
        key_to_member: upper,
        is_valid_member: non_empty,
        escape_invalid: placeholder,
    };

    #[test]
    fn test_member_name_strips_namespace() {
        assert_eq!(UPPER.member_name("demo.run.fast", Some("demo.")), "RUN_FAST");
    }

    #[test]
    fn test_member_name_outside_namespace() {
        assert_eq!(UPPER.member_name("other.run", Some("demo.")), "OTHER_RUN");
        assert_eq!(UPPER.member_name("demo.run", None), "DEMO_RUN");
    }

    #[test]
    fn test_member_name_strips_only_full_prefix() {
        assert_eq!(UPPER.member_name("demorun", Some("demo.")), "DEMORUN");
    }

    #[test]
    fn test_safe_name_escapes() {
        assert_eq!(UPPER.member_name("demo.", Some("demo.")), "EMPTY");
        assert_eq!(UPPER.safe_name("OK"), "OK");
    }
}
