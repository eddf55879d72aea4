//! # Extension Manifest Schema
//!
//! YAML-based extension manifests with schema validation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::commands::spec::{CommandSpec, OptionSpec};

/// One extension manifest: a named bundle of declared commands
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub commands: Vec<ExtensionCommand>,
}

fn default_enabled() -> bool {
    true
}

/// One command declared by an extension
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionCommand {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<ExtensionOption>,
    /// Reply template; `{option_name}` placeholders are filled from the
    /// invocation's option values.
    pub response: String,
}

/// One option on an extension command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionOption {
    pub name: String,
    pub description: String,
    #[serde(default = "default_option_type", rename = "type")]
    pub option_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Vec<ExtensionChoice>,
}

fn default_option_type() -> String {
    "string".to_string()
}

/// A declared option choice
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionChoice {
    pub name: String,
    pub value: String,
}

impl ExtensionConfig {
    /// Parse and validate one manifest
    pub fn parse(contents: &str) -> Result<Self> {
        let config: ExtensionConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the manifest against Discord's command constraints
    pub fn validate(&self) -> Result<()> {
        for command in &self.commands {
            if !command
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            {
                return Err(anyhow::anyhow!(
                    "Command name must be lowercase: {}",
                    command.name
                ));
            }

            if command.name.len() > 32 {
                return Err(anyhow::anyhow!(
                    "Command name too long (max 32 chars): {}",
                    command.name
                ));
            }

            if command.description.is_empty() || command.description.len() > 100 {
                return Err(anyhow::anyhow!(
                    "Command description must be 1-100 chars: {}",
                    command.name
                ));
            }

            if command.response.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "Command {} has an empty response template",
                    command.name
                ));
            }

            for opt in &command.options {
                if !opt
                    .name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
                {
                    return Err(anyhow::anyhow!(
                        "Option name must be lowercase: {} in command {}",
                        opt.name,
                        command.name
                    ));
                }
            }
        }
        Ok(())
    }

    /// Command declarations for the sync tree (disabled extensions declare none)
    pub fn specs(&self) -> Vec<CommandSpec> {
        if !self.enabled {
            return vec![];
        }
        self.commands.iter().map(ExtensionCommand::spec).collect()
    }
}

impl ExtensionCommand {
    /// Build the command declaration for this manifest entry
    pub fn spec(&self) -> CommandSpec {
        let mut spec = CommandSpec::chat(&self.name, &self.description);
        for opt in &self.options {
            let mut option = match opt.option_type.as_str() {
                "integer" => OptionSpec::integer(&opt.name, &opt.description),
                "number" => OptionSpec::number(&opt.name, &opt.description),
                "boolean" => OptionSpec::boolean(&opt.name, &opt.description),
                "user" => OptionSpec::user(&opt.name, &opt.description),
                "channel" => OptionSpec::channel(&opt.name, &opt.description),
                _ => OptionSpec::string(&opt.name, &opt.description),
            }
            .required(opt.required);
            for choice in &opt.choices {
                option = match opt.option_type.as_str() {
                    "integer" => match choice.value.parse::<i64>() {
                        Ok(v) => option.choice(&choice.name, v),
                        Err(_) => option,
                    },
                    "number" => match choice.value.parse::<f64>() {
                        Ok(v) => option.choice(&choice.name, v),
                        Err(_) => option,
                    },
                    _ => option.choice(&choice.name, choice.value.as_str()),
                };
            }
            spec = spec.option(option);
        }
        spec
    }

    /// Render the reply template with the invocation's option values
    pub fn render(&self, values: &HashMap<String, String>) -> String {
        let mut rendered = self.response.clone();
        for opt in &self.options {
            let placeholder = format!("{{{}}}", opt.name);
            let value = values.get(&opt.name).map(String::as_str).unwrap_or("");
            rendered = rendered.replace(&placeholder, value);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREET_MANIFEST: &str = r#"
name: greet
description: Greeting commands
commands:
  - name: greet
    description: Greet someone by name
    options:
      - name: who
        description: Who to greet
        required: true
    response: "Hello, {who}!"
"#;

    #[test]
    fn test_parse_valid_manifest() {
        let config = ExtensionConfig::parse(GREET_MANIFEST).unwrap();
        assert_eq!(config.name, "greet");
        assert!(config.enabled);
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.commands[0].options[0].option_type, "string");
    }

    #[test]
    fn test_uppercase_command_name_rejected() {
        let raw = GREET_MANIFEST.replace("name: greet\n    description", "name: Greet\n    description");
        assert!(ExtensionConfig::parse(&raw).is_err());
    }

    #[test]
    fn test_empty_response_rejected() {
        let raw = GREET_MANIFEST.replace("\"Hello, {who}!\"", "\"  \"");
        assert!(ExtensionConfig::parse(&raw).is_err());
    }

    #[test]
    fn test_long_description_rejected() {
        let raw = GREET_MANIFEST.replace("Greet someone by name", &"x".repeat(120));
        assert!(ExtensionConfig::parse(&raw).is_err());
    }

    #[test]
    fn test_disabled_extension_declares_nothing() {
        let raw = GREET_MANIFEST.replace("description: Greeting commands", "enabled: false");
        let config = ExtensionConfig::parse(&raw).unwrap();
        assert!(config.specs().is_empty());
    }

    #[test]
    fn test_specs_reflect_manifest() {
        let config = ExtensionConfig::parse(GREET_MANIFEST).unwrap();
        let specs = config.specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "greet");
        assert_eq!(specs[0].options.len(), 1);
        assert!(specs[0].options[0].required);
    }

    #[test]
    fn test_integer_choices_parse_typed() {
        let raw = r#"
name: dice
description: Dice
commands:
  - name: roll
    description: Roll a die
    options:
      - name: sides
        description: Number of sides
        type: integer
        choices:
          - name: d6
            value: "6"
          - name: d20
            value: "20"
    response: "Rolled a d{sides}"
"#;
        let config = ExtensionConfig::parse(raw).unwrap();
        let spec = &config.specs()[0];
        assert_eq!(spec.options[0].choices.len(), 2);
        assert_eq!(spec.options[0].choices[0].value, serde_json::Value::from(6));
    }

    #[test]
    fn test_render_fills_placeholders() {
        let config = ExtensionConfig::parse(GREET_MANIFEST).unwrap();
        let mut values = HashMap::new();
        values.insert("who".to_string(), "world".to_string());
        assert_eq!(config.commands[0].render(&values), "Hello, world!");
    }

    #[test]
    fn test_render_missing_value_becomes_empty() {
        let config = ExtensionConfig::parse(GREET_MANIFEST).unwrap();
        assert_eq!(config.commands[0].render(&HashMap::new()), "Hello, !");
    }
}
