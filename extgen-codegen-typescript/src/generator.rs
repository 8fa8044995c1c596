//! TypeScript module generator for extension manifests.

use extgen_codegen::{
    builder::{Renderable, TypeMapper},
    language::LanguageCodegen,
    schema::{
        CommandInfo, ConfigurationInfo, SymbolCollision, SymbolTable, collect_commands,
        collect_configurations,
    },
};
use extgen_manifest::Manifest;

use crate::{
    TS_NAMING, TypeScriptTypeMapper,
    ast::{
        Const, Interface, JsObject, LineComment, Property, Union, json_literal, optional_literal,
        string_literal,
    },
    code_file::CodeFile,
};

const GENERATED_NOTICE: &str = "This file is generated by `extgen`. Do not modify manually.";
const SOURCE_LINK: &str = "@see https://github.com/extgen/extgen";

/// Render the TypeScript module for `manifest`.
///
/// Equivalent to `Generator::new(manifest).render()`.
pub fn generate(manifest: &Manifest) -> String {
    Generator::new(manifest).render_module()
}

/// TypeScript generator producing a typed module of manifest constants.
///
/// The output is a pure function of the manifest: metadata constants, the
/// `CommandId` and `ConfigurationId` unions, the `commands` and
/// `configurations` member maps, `configurationsDefaults` and the
/// `ConfigurationTypeMap` interface.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    commands: Vec<CommandInfo>,
    configurations: Vec<ConfigurationInfo>,
    command_members: SymbolTable<usize>,
    configuration_members: SymbolTable<usize>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self) -> String {
        self.render_module()
    }
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        let commands = collect_commands(manifest, &TS_NAMING);
        let configurations = collect_configurations(manifest, &TS_NAMING);

        let mut command_members = SymbolTable::new();
        for (index, command) in commands.iter().enumerate() {
            command_members.insert(&command.member, &command.id, index);
        }

        let mut configuration_members = SymbolTable::new();
        for (index, configuration) in configurations.iter().enumerate() {
            configuration_members.insert(&configuration.member, &configuration.key, index);
        }

        Self {
            manifest,
            commands,
            configurations,
            command_members,
            configuration_members,
        }
    }

    /// Keys that normalized to an already used member name.
    ///
    /// The later key wins in the member maps; unions still list both.
    pub fn collisions(&self) -> impl Iterator<Item = &SymbolCollision> {
        self.command_members
            .collisions()
            .iter()
            .chain(self.configuration_members.collisions())
    }

    fn render_module(&self) -> String {
        let header = LineComment::new(GENERATED_NOTICE).line(SOURCE_LINK);
        let meta_comment = LineComment::new("Meta info");
        let meta = self.meta_consts();

        let mut meta_section: Vec<&dyn Renderable> = vec![&meta_comment];
        meta_section.extend(meta.iter().map(|c| c as &dyn Renderable));

        CodeFile::new()
            .add(header)
            .section(&meta_section)
            .add(self.command_union())
            .add(self.commands_map())
            .add(self.configuration_union())
            .add(self.configurations_map())
            .add(self.configurations_defaults())
            .add(self.configuration_type_map())
            .render()
    }

    fn meta_consts(&self) -> Vec<Const> {
        let manifest = self.manifest;
        let identity = [
            ("publisher", &manifest.publisher),
            ("name", &manifest.name),
        ]
        .map(|(key, value)| (key, value.as_deref().map(string_literal)));
        let details = [
            ("version", &manifest.version),
            ("displayName", &manifest.display_name),
            ("description", &manifest.description),
        ]
        .map(|(key, value)| (key, value.as_ref().map(json_literal)));

        let mut consts: Vec<Const> = identity
            .into_iter()
            .chain(details)
            .map(|(key, literal)| {
                Const::new(key, literal.unwrap_or_else(|| "undefined".to_string()))
            })
            .collect();
        consts.push(Const::new("extensionName", "`${publisher}.${name}`"));
        consts
    }

    fn command_union(&self) -> Union {
        Union::new("CommandId")
            .doc("Type union of all commands")
            .variants(self.commands.iter().map(|c| string_literal(&c.id)))
    }

    fn commands_map(&self) -> Const {
        let properties = self.command_members.iter().map(|(member, &index)| {
            let command = &self.commands[index];
            let title = command.title.as_deref().unwrap_or("undefined");
            Property::new(member, string_literal(&command.id))
                .doc(format!("{}\n@value `{}`", title, command.id))
        });

        Const::object("commands", JsObject::new().properties(properties))
            .doc(format!(
                "Commands map registered by `{}`",
                self.manifest.extension_id()
            ))
            .satisfies("Record<string, CommandId>")
    }

    fn configuration_union(&self) -> Union {
        Union::new("ConfigurationId")
            .doc("Type union of all configurations")
            .variants(self.configurations.iter().map(|c| string_literal(&c.key)))
    }

    fn configurations_map(&self) -> Const {
        let properties = self.configuration_members.iter().map(|(member, &index)| {
            let config = &self.configurations[index];
            let doc = format!(
                "{}\n@key `{}`\n@default `{}`\n@type `{}`",
                config.description.as_deref().unwrap_or_default(),
                config.key,
                optional_literal(config.default.as_ref()),
                config.type_name.as_deref().unwrap_or("undefined"),
            );
            Property::new(member, string_literal(&config.key)).doc(doc)
        });

        Const::object("configurations", JsObject::new().properties(properties))
            .doc(format!(
                "Configs map registered by `{}`",
                self.manifest.extension_id()
            ))
            .satisfies("Record<string, ConfigurationId>")
    }

    fn configurations_defaults(&self) -> Const {
        let properties = self
            .configurations
            .iter()
            .map(|c| Property::quoted(&c.key, optional_literal(c.default.as_ref())));

        Const::object("configurationsDefaults", JsObject::new().properties(properties))
            .satisfies(
                "{ [key in ConfigurationId]: ConfigurationTypeMap[key] | null | undefined }",
            )
    }

    fn configuration_type_map(&self) -> Interface {
        let mapper = TypeScriptTypeMapper;
        self.configurations
            .iter()
            .fold(Interface::new("ConfigurationTypeMap"), |interface, c| {
                interface.quoted_field(&c.key, mapper.render_type(&c.ty))
            })
    }
}
