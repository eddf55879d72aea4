//! # Command Snapshots
//!
//! Immutable structural records of application commands, comparable across
//! the two places a command definition can come from: the local registry and
//! the remote "list application commands" endpoint.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 1.1.0: Normalize integral number values so remote payloads compare clean
//! - 1.0.0: Initial implementation

use std::collections::BTreeMap;

use serde_json::Value;
use serenity::model::application::command::Command;

use crate::commands::spec::{CommandSpec, OptionSpec};
use crate::features::translation::Translator;

/// Application command type, by Discord wire id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Slash command (`/name`), wire id 1
    ChatInput,
    /// User context-menu command, wire id 2
    User,
    /// Message context-menu command, wire id 3
    Message,
}

impl CommandKind {
    pub fn from_id(id: u8) -> Self {
        match id {
            2 => Self::User,
            3 => Self::Message,
            _ => Self::ChatInput,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::ChatInput => 1,
            Self::User => 2,
            Self::Message => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ChatInput => "chat_input",
            Self::User => "user",
            Self::Message => "message",
        }
    }
}

/// Command option type, by Discord wire id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

impl OptionKind {
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            10 => Self::Number,
            11 => Self::Attachment,
            _ => Self::String,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::SubCommand => 1,
            Self::SubCommandGroup => 2,
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }
}

/// One choice on a string/integer/number option
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSnapshot {
    pub name: String,
    pub value: Value,
}

/// Structural record of one option, sub-command, or sub-command group
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSnapshot {
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
    pub choices: Vec<ChoiceSnapshot>,
    pub options: Vec<OptionSnapshot>,
    pub name_localizations: BTreeMap<String, String>,
    pub description_localizations: BTreeMap<String, String>,
}

/// Structural record of one declared or published command
///
/// Identity across two snapshot sets is the `(name, kind)` pair; everything
/// else participates only in the equality check.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSnapshot {
    pub name: String,
    pub kind: CommandKind,
    pub description: String,
    pub default_member_permissions: Option<u64>,
    pub nsfw: bool,
    pub options: Vec<OptionSnapshot>,
    pub name_localizations: BTreeMap<String, String>,
    pub description_localizations: BTreeMap<String, String>,
}

impl CommandSnapshot {
    /// Identity key used for matching across two snapshot sets
    pub fn key(&self) -> (String, CommandKind) {
        (self.name.clone(), self.kind)
    }

    /// Snapshot a local command declaration
    ///
    /// Applies the same localization lookups `CommandSpec::build` applies, so
    /// the snapshot matches what would be published.
    pub fn from_spec(spec: &CommandSpec, translator: Option<&dyn Translator>) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind,
            description: spec.description.clone(),
            default_member_permissions: spec.default_member_permissions.map(|p| p.bits()),
            nsfw: spec.nsfw,
            options: spec
                .options
                .iter()
                .map(|opt| OptionSnapshot::from_spec(opt, translator))
                .collect(),
            name_localizations: localization_map(&spec.name, translator),
            description_localizations: localization_map(&spec.description, translator),
        }
    }

    /// Snapshot a command fetched from the API
    ///
    /// Conversion goes through the wire payload rather than individual model
    /// fields, matching what Discord actually serves for the command.
    pub fn from_remote(command: &Command) -> Self {
        let payload = serde_json::to_value(command).unwrap_or(Value::Null);
        Self::from_payload(&payload)
    }

    /// Snapshot a raw command payload in Discord's wire shape
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            name: str_field(payload, "name"),
            kind: CommandKind::from_id(u8_field(payload, "type").unwrap_or(1)),
            description: str_field(payload, "description"),
            default_member_permissions: permissions_field(payload),
            nsfw: payload.get("nsfw").and_then(Value::as_bool).unwrap_or(false),
            options: payload
                .get("options")
                .and_then(Value::as_array)
                .map(|opts| opts.iter().map(OptionSnapshot::from_payload).collect())
                .unwrap_or_default(),
            name_localizations: localizations_field(payload, "name_localizations"),
            description_localizations: localizations_field(payload, "description_localizations"),
        }
    }

    /// Copy with all localization maps cleared, recursively
    ///
    /// The 0.11 command-list endpoint does not request localized payloads, so
    /// the startup comparison against remote truth is done on stripped
    /// snapshots; stored last-known state keeps the full maps.
    pub fn without_localizations(&self) -> Self {
        let mut stripped = self.clone();
        stripped.name_localizations.clear();
        stripped.description_localizations.clear();
        stripped.options = stripped
            .options
            .iter()
            .map(OptionSnapshot::without_localizations)
            .collect();
        stripped
    }
}

impl OptionSnapshot {
    pub fn from_spec(spec: &OptionSpec, translator: Option<&dyn Translator>) -> Self {
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            kind: spec.kind,
            required: spec.required,
            autocomplete: spec.autocomplete,
            min_value: spec.min_value,
            max_value: spec.max_value,
            min_length: spec.min_length,
            max_length: spec.max_length,
            channel_types: spec.channel_types.clone(),
            choices: spec
                .choices
                .iter()
                .map(|c| ChoiceSnapshot {
                    name: c.name.clone(),
                    value: normalize_number(c.value.clone()),
                })
                .collect(),
            options: spec
                .options
                .iter()
                .map(|opt| OptionSnapshot::from_spec(opt, translator))
                .collect(),
            name_localizations: localization_map(&spec.name, translator),
            description_localizations: localization_map(&spec.description, translator),
        }
    }

    pub fn from_payload(payload: &Value) -> Self {
        Self {
            name: str_field(payload, "name"),
            description: str_field(payload, "description"),
            kind: OptionKind::from_id(u8_field(payload, "type").unwrap_or(3)),
            required: payload
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            autocomplete: payload
                .get("autocomplete")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            min_value: payload.get("min_value").and_then(Value::as_f64),
            max_value: payload.get("max_value").and_then(Value::as_f64),
            min_length: payload
                .get("min_length")
                .and_then(Value::as_u64)
                .map(|v| v as u16),
            max_length: payload
                .get("max_length")
                .and_then(Value::as_u64)
                .map(|v| v as u16),
            channel_types: payload
                .get("channel_types")
                .and_then(Value::as_array)
                .map(|types| {
                    types
                        .iter()
                        .filter_map(Value::as_u64)
                        .map(|v| v as u8)
                        .collect()
                })
                .unwrap_or_default(),
            choices: payload
                .get("choices")
                .and_then(Value::as_array)
                .map(|choices| {
                    choices
                        .iter()
                        .map(|c| ChoiceSnapshot {
                            name: str_field(c, "name"),
                            value: normalize_number(c.get("value").cloned().unwrap_or(Value::Null)),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            options: payload
                .get("options")
                .and_then(Value::as_array)
                .map(|opts| opts.iter().map(OptionSnapshot::from_payload).collect())
                .unwrap_or_default(),
            name_localizations: localizations_field(payload, "name_localizations"),
            description_localizations: localizations_field(payload, "description_localizations"),
        }
    }

    pub fn without_localizations(&self) -> Self {
        let mut stripped = self.clone();
        stripped.name_localizations.clear();
        stripped.description_localizations.clear();
        stripped.options = stripped
            .options
            .iter()
            .map(OptionSnapshot::without_localizations)
            .collect();
        stripped
    }
}

/// Build the locale -> translation map for one phrase
pub(crate) fn localization_map(
    phrase: &str,
    translator: Option<&dyn Translator>,
) -> BTreeMap<String, String> {
    let Some(translator) = translator else {
        return BTreeMap::new();
    };
    translator
        .locales()
        .into_iter()
        .filter_map(|locale| {
            translator
                .translate(phrase, &locale)
                .map(|translated| (locale, translated))
        })
        .collect()
}

fn str_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn u8_field(payload: &Value, key: &str) -> Option<u8> {
    payload.get(key).and_then(Value::as_u64).map(|v| v as u8)
}

// Discord serves this as a decimal string; serenity may re-serialize it as a
// number depending on the model version.
fn permissions_field(payload: &Value) -> Option<u64> {
    match payload.get("default_member_permissions") {
        Some(Value::String(raw)) => raw.parse().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    }
}

fn localizations_field(payload: &Value, key: &str) -> BTreeMap<String, String> {
    payload
        .get(key)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(locale, v)| v.as_str().map(|s| (locale.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

// 1.0 and 1 are the same choice value on the wire; collapse to the integer
// form so both construction paths agree.
fn normalize_number(value: Value) -> Value {
    if let Value::Number(n) = &value {
        if let Some(f) = n.as_f64() {
            if n.as_i64().is_none() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                return Value::from(f as i64);
            }
        }
    }
    value
}
