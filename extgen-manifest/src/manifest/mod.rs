//! Manifest types and parsing for extension `package.json` files.

mod file;
mod parse;
mod schema;

use indexmap::IndexMap;
pub use file::PackageJson;
pub use parse::parse_manifest;
pub use schema::{SchemaNode, SchemaType};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root of an extension manifest.
///
/// Only the fields consumed by code generation are modelled; everything else
/// in `package.json` is ignored. `publisher` and `name` form identifiers and
/// must be strings; the remaining metadata keeps whatever JSON value is
/// declared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub publisher: Option<String>,
    pub name: Option<String>,
    pub version: Option<Value>,
    pub display_name: Option<Value>,
    pub description: Option<Value>,
    pub contributes: Option<Contributes>,
}

/// The `contributes` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<CommandEntry>,
    pub configuration: Option<Configuration>,
}

/// One entry of `contributes.commands`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandEntry {
    pub command: String,
    pub title: Option<String>,
    pub category: Option<String>,
}

impl CommandEntry {
    pub fn new(command: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            title: Some(title.into()),
            category: None,
        }
    }
}

/// `contributes.configuration`: a single group or a list of groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Configuration {
    Single(ConfigurationGroup),
    Multiple(Vec<ConfigurationGroup>),
}

/// A titled group of configuration properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigurationGroup {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, SchemaNode>,
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Configuration {
    /// Iterate over the configuration groups in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &ConfigurationGroup> {
        let groups: &[ConfigurationGroup] = match self {
            Configuration::Single(group) => std::slice::from_ref(group),
            Configuration::Multiple(groups) => groups,
        };
        groups.iter()
    }
}

impl Manifest {
    /// Declared commands, empty when the manifest contributes none.
    pub fn commands(&self) -> &[CommandEntry] {
        self.contributes
            .as_ref()
            .map(|c| c.commands.as_slice())
            .unwrap_or_default()
    }

    /// All configuration properties in declaration order.
    ///
    /// Groups are merged front to back. A key declared in more than one group
    /// keeps the position of its first declaration and the node of its last.
    pub fn configuration_properties(&self) -> IndexMap<&str, &SchemaNode> {
        let mut properties = IndexMap::new();
        let groups = self
            .contributes
            .as_ref()
            .and_then(|c| c.configuration.as_ref())
            .into_iter()
            .flat_map(Configuration::groups);

        for group in groups {
            for (key, node) in &group.properties {
                properties.insert(key.as_str(), node);
            }
        }
        properties
    }

    /// `version` as display text: strings unquoted, other values as JSON.
    pub fn version_text(&self) -> Option<String> {
        self.version.as_ref().map(plain_text)
    }

    /// `displayName` as display text, like [`Manifest::version_text`].
    pub fn display_name_text(&self) -> Option<String> {
        self.display_name.as_ref().map(plain_text)
    }

    /// Prefix shared by command and configuration keys (`<name>.`).
    pub fn namespace(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("{}.", name))
    }

    /// Full extension identifier (`<publisher>.<name>`), with `undefined`
    /// standing in for missing parts.
    pub fn extension_id(&self) -> String {
        format!(
            "{}.{}",
            self.publisher.as_deref().unwrap_or("undefined"),
            self.name.as_deref().unwrap_or("undefined")
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_commands_default_empty() {
        assert!(Manifest::default().commands().is_empty());

        let manifest = Manifest::from_str(r#"{ "contributes": {} }"#).unwrap();
        assert!(manifest.commands().is_empty());
        assert!(manifest.configuration_properties().is_empty());
    }

    #[test]
    fn test_configuration_single_group() {
        let manifest = Manifest::from_str(
            r#"{
                "contributes": {
                    "configuration": {
                        "title": "Demo",
                        "properties": {
                            "demo.zeta": { "type": "string" },
                            "demo.alpha": { "type": "number" }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = manifest.configuration_properties().into_keys().collect();
        assert_eq!(keys, ["demo.zeta", "demo.alpha"]);
    }

    #[test]
    fn test_configuration_groups_merge_in_order() {
        let manifest = Manifest::from_str(
            r#"{
                "contributes": {
                    "configuration": [
                        { "title": "A", "properties": { "x.b": { "type": "string" }, "x.a": {} } },
                        { "title": "B", "properties": { "x.c": {}, "x.b": { "type": "number" } } }
                    ]
                }
            }"#,
        )
        .unwrap();

        let properties = manifest.configuration_properties();
        let keys: Vec<_> = properties.keys().copied().collect();
        assert_eq!(keys, ["x.b", "x.a", "x.c"]);
        assert_eq!(properties["x.b"].ty, Some(SchemaType::Number));
    }

    #[test]
    fn test_namespace_and_extension_id() {
        let manifest = Manifest {
            publisher: Some("acme".into()),
            name: Some("demo".into()),
            ..Manifest::default()
        };
        assert_eq!(manifest.namespace().as_deref(), Some("demo."));
        assert_eq!(manifest.extension_id(), "acme.demo");

        let anonymous = Manifest::default();
        assert_eq!(anonymous.namespace(), None);
        assert_eq!(anonymous.extension_id(), "undefined.undefined");
    }

    #[test]
    fn test_null_sections_are_empty() {
        let manifest =
            Manifest::from_str(r#"{ "name": "d", "contributes": { "commands": null } }"#).unwrap();
        assert!(manifest.commands().is_empty());

        let manifest = Manifest::from_str(
            r#"{ "name": "d", "contributes": { "configuration": { "properties": null } } }"#,
        )
        .unwrap();
        assert!(manifest.configuration_properties().is_empty());

        let manifest = Manifest::from_str(
            r#"{ "contributes": { "configuration": [{ "title": "A", "properties": null }, { "properties": { "d.x": {} } }] } }"#,
        )
        .unwrap();
        let keys: Vec<_> = manifest.configuration_properties().into_keys().collect();
        assert_eq!(keys, ["d.x"]);

        let manifest =
            Manifest::from_str(r#"{ "contributes": { "configuration": null } }"#).unwrap();
        assert!(manifest.configuration_properties().is_empty());
    }

    #[test]
    fn test_non_string_metadata_kept() {
        let manifest = Manifest::from_str(
            r#"{ "name": "d", "version": 1, "displayName": null, "description": ["a"] }"#,
        )
        .unwrap();
        assert_eq!(manifest.version, Some(serde_json::json!(1)));
        assert_eq!(manifest.display_name, None);
        assert_eq!(manifest.description, Some(serde_json::json!(["a"])));
        assert_eq!(manifest.version_text().as_deref(), Some("1"));
        assert_eq!(manifest.display_name_text(), None);

        let manifest = Manifest::from_str(r#"{ "version": "1.2.0" }"#).unwrap();
        assert_eq!(manifest.version_text().as_deref(), Some("1.2.0"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let manifest = Manifest::from_str(
            r#"{
                "name": "demo",
                "engines": { "vscode": "^1.80.0" },
                "contributes": {
                    "commands": [{ "command": "demo.run", "title": "Run", "icon": "$(play)" }],
                    "menus": {}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.commands(), [CommandEntry::new("demo.run", "Run")]);
    }
}
