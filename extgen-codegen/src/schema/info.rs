//! Info types for code generation.

use extgen_manifest::Manifest;
use serde_json::Value;

use super::type_ref;
use crate::{builder::TypeRef, language::NamingConvention};

/// Info about a command for code generation
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInfo {
    /// Raw command identifier (`demo.run`)
    pub id: String,
    /// Member name in the generated `commands` map
    pub member: String,
    pub title: Option<String>,
}

/// Info about a configuration property for code generation
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationInfo {
    /// Raw qualified key (`demo.level`)
    pub key: String,
    /// Member name in the generated `configurations` map
    pub member: String,
    pub description: Option<String>,
    /// `None` when absent, `Some(Value::Null)` for an explicit `null`
    pub default: Option<Value>,
    /// The `type` string as written in the manifest
    pub type_name: Option<String>,
    /// Language-agnostic value type
    pub ty: TypeRef,
}

/// Collect declared commands in manifest order, duplicates included.
pub fn collect_commands(manifest: &Manifest, naming: &NamingConvention) -> Vec<CommandInfo> {
    let namespace = manifest.namespace();
    manifest
        .commands()
        .iter()
        .map(|entry| CommandInfo {
            id: entry.command.clone(),
            member: naming.member_name(&entry.command, namespace.as_deref()),
            title: entry.title.clone(),
        })
        .collect()
}

/// Collect configuration properties in declaration order.
pub fn collect_configurations(
    manifest: &Manifest,
    naming: &NamingConvention,
) -> Vec<ConfigurationInfo> {
    let namespace = manifest.namespace();
    manifest
        .configuration_properties()
        .into_iter()
        .map(|(key, node)| ConfigurationInfo {
            key: key.to_string(),
            member: naming.member_name(key, namespace.as_deref()),
            description: node.description.clone(),
            default: node.default.clone(),
            type_name: node.type_name.clone(),
            ty: type_ref(Some(node)),
        })
        .collect()
}
