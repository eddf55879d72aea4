//! # Command Descriptors
//!
//! Declarative, immutable descriptions of the commands this bot publishes.
//! The registry stores these; `build` renders the serenity payload and the
//! sync feature snapshots them for diffing. This replaces per-handler builder
//! closures with one declaration the whole crate can introspect.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serde_json::Value;
use serenity::builder::{CreateApplicationCommand, CreateApplicationCommandOption};
use serenity::model::application::command::{CommandOptionType, CommandType};
use serenity::model::permissions::Permissions;

use crate::features::sync::snapshot::{localization_map, CommandKind, OptionKind};
use crate::features::translation::Translator;

/// One declared choice on a string/integer/number option
#[derive(Debug, Clone, PartialEq)]
pub struct CommandChoice {
    pub name: String,
    pub value: Value,
}

/// Declared option, sub-command, or sub-command group
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
    pub autocomplete: bool,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_length: Option<u16>,
    pub max_length: Option<u16>,
    pub channel_types: Vec<u8>,
    pub choices: Vec<CommandChoice>,
    pub options: Vec<OptionSpec>,
}

impl OptionSpec {
    fn new(name: &str, description: &str, kind: OptionKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            autocomplete: false,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            channel_types: vec![],
            choices: vec![],
            options: vec![],
        }
    }

    pub fn string(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::String)
    }

    pub fn integer(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::Integer)
    }

    pub fn number(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::Number)
    }

    pub fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::Boolean)
    }

    pub fn user(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::User)
    }

    pub fn channel(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::Channel)
    }

    pub fn attachment(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::Attachment)
    }

    pub fn sub_command(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::SubCommand)
    }

    pub fn sub_command_group(name: &str, description: &str) -> Self {
        Self::new(name, description, OptionKind::SubCommandGroup)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    pub fn min_value(mut self, value: f64) -> Self {
        self.min_value = Some(value);
        self
    }

    pub fn max_value(mut self, value: f64) -> Self {
        self.max_value = Some(value);
        self
    }

    pub fn min_length(mut self, length: u16) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: u16) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn channel_types(mut self, types: &[u8]) -> Self {
        self.channel_types = types.to_vec();
        self
    }

    pub fn choice(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.choices.push(CommandChoice {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Nest a sub-command or parameter (groups and sub-commands only)
    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    fn apply(
        &self,
        builder: &mut CreateApplicationCommandOption,
        translator: Option<&dyn Translator>,
    ) {
        builder
            .name(&self.name)
            .description(&self.description)
            .kind(option_type(self.kind));
        if self.required {
            builder.required(true);
        }
        if self.autocomplete {
            builder.set_autocomplete(true);
        }
        if let Some(v) = self.min_length {
            builder.min_length(v);
        }
        if let Some(v) = self.max_length {
            builder.max_length(v);
        }
        // The 0.11 option builder exposes int/number setters, not a raw one;
        // write the keys directly so one declaration covers both kinds.
        if let Some(v) = self.min_value {
            builder.0.insert("min_value", number_value(self.kind, v));
        }
        if let Some(v) = self.max_value {
            builder.0.insert("max_value", number_value(self.kind, v));
        }
        if !self.channel_types.is_empty() {
            builder.0.insert(
                "channel_types",
                Value::Array(self.channel_types.iter().map(|t| Value::from(*t)).collect()),
            );
        }
        for choice in &self.choices {
            match &choice.value {
                Value::String(s) => {
                    builder.add_string_choice(&choice.name, s);
                }
                Value::Number(n) if n.is_f64() => {
                    builder.add_number_choice(&choice.name, n.as_f64().unwrap_or_default());
                }
                Value::Number(n) => {
                    builder.add_int_choice(&choice.name, n.as_i64().unwrap_or_default() as i32);
                }
                other => {
                    builder.add_string_choice(&choice.name, other.to_string());
                }
            }
        }
        insert_localizations(&mut builder.0, &self.name, &self.description, translator);
        for nested in &self.options {
            builder.create_sub_option(|sub| {
                nested.apply(sub, translator);
                sub
            });
        }
    }
}

/// Declared application command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub name: String,
    pub kind: CommandKind,
    pub description: String,
    pub default_member_permissions: Option<Permissions>,
    pub nsfw: bool,
    pub options: Vec<OptionSpec>,
}

impl CommandSpec {
    /// Declare a slash command
    pub fn chat(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: CommandKind::ChatInput,
            description: description.to_string(),
            default_member_permissions: None,
            nsfw: false,
            options: vec![],
        }
    }

    /// Declare a user context-menu command (no description, no options)
    pub fn user_menu(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: CommandKind::User,
            description: String::new(),
            default_member_permissions: None,
            nsfw: false,
            options: vec![],
        }
    }

    /// Declare a message context-menu command
    pub fn message_menu(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: CommandKind::Message,
            description: String::new(),
            default_member_permissions: None,
            nsfw: false,
            options: vec![],
        }
    }

    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Render the serenity builder for publishing
    ///
    /// Applies the same localization lookups the snapshot path applies, so
    /// what gets published is exactly what was snapshotted.
    pub fn build(&self, translator: Option<&dyn Translator>) -> CreateApplicationCommand {
        let mut command = CreateApplicationCommand::default();
        command.name(&self.name);
        match self.kind {
            CommandKind::ChatInput => {
                command.description(&self.description);
            }
            CommandKind::User => {
                command.kind(CommandType::User);
            }
            CommandKind::Message => {
                command.kind(CommandType::Message);
            }
        }
        if let Some(permissions) = self.default_member_permissions {
            command.default_member_permissions(permissions);
        }
        if self.nsfw {
            // No builder setter for this key in 0.11
            command.0.insert("nsfw", Value::Bool(true));
        }
        if self.kind == CommandKind::ChatInput {
            insert_localizations(&mut command.0, &self.name, &self.description, translator);
        } else {
            // Context menus localize the name only
            if let Some(map) = localization_object(&self.name, translator) {
                command.0.insert("name_localizations", map);
            }
        }
        for option in &self.options {
            command.create_option(|builder| {
                option.apply(builder, translator);
                builder
            });
        }
        command
    }
}

fn option_type(kind: OptionKind) -> CommandOptionType {
    match kind {
        OptionKind::SubCommand => CommandOptionType::SubCommand,
        OptionKind::SubCommandGroup => CommandOptionType::SubCommandGroup,
        OptionKind::String => CommandOptionType::String,
        OptionKind::Integer => CommandOptionType::Integer,
        OptionKind::Boolean => CommandOptionType::Boolean,
        OptionKind::User => CommandOptionType::User,
        OptionKind::Channel => CommandOptionType::Channel,
        OptionKind::Role => CommandOptionType::Role,
        OptionKind::Mentionable => CommandOptionType::Mentionable,
        OptionKind::Number => CommandOptionType::Number,
        OptionKind::Attachment => CommandOptionType::Attachment,
    }
}

fn number_value(kind: OptionKind, value: f64) -> Value {
    if kind == OptionKind::Integer {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

fn localization_object(phrase: &str, translator: Option<&dyn Translator>) -> Option<Value> {
    let map = localization_map(phrase, translator);
    if map.is_empty() {
        return None;
    }
    Some(Value::Object(
        map.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
    ))
}

fn insert_localizations(
    target: &mut std::collections::HashMap<&'static str, Value>,
    name: &str,
    description: &str,
    translator: Option<&dyn Translator>,
) {
    if let Some(map) = localization_object(name, translator) {
        target.insert("name_localizations", map);
    }
    if let Some(map) = localization_object(description, translator) {
        target.insert("description_localizations", map);
    }
}
