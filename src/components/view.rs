//! # View Descriptors
//!
//! Immutable descriptions of message component trees. A view is assembled
//! with builder calls and rendered into serenity's `CreateComponents` when a
//! message goes out; the descriptor itself stays inert and comparable.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.3.0

use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;

/// One declared button
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    pub custom_id: String,
    pub label: Option<String>,
    pub emoji: Option<char>,
    pub style: ButtonStyle,
    pub disabled: bool,
}

impl ButtonSpec {
    pub fn new(custom_id: &str) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            label: None,
            emoji: None,
            style: ButtonStyle::Secondary,
            disabled: false,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn emoji(mut self, emoji: char) -> Self {
        self.emoji = Some(emoji);
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One option inside a declared select menu
#[derive(Debug, Clone)]
pub struct SelectOptionSpec {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
}

impl SelectOptionSpec {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            description: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// One declared single-choice select menu
#[derive(Debug, Clone)]
pub struct SelectSpec {
    pub custom_id: String,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub options: Vec<SelectOptionSpec>,
}

impl SelectSpec {
    pub fn new(custom_id: &str) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            placeholder: None,
            disabled: false,
            options: vec![],
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn option(mut self, option: SelectOptionSpec) -> Self {
        self.options.push(option);
        self
    }
}

/// One action row of a view
#[derive(Debug, Clone)]
pub enum RowSpec {
    Buttons(Vec<ButtonSpec>),
    Select(SelectSpec),
}

/// A declared component tree: ordered action rows
#[derive(Debug, Clone, Default)]
pub struct ViewSpec {
    rows: Vec<RowSpec>,
}

impl ViewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button_row(mut self, buttons: Vec<ButtonSpec>) -> Self {
        self.rows.push(RowSpec::Buttons(buttons));
        self
    }

    pub fn select_row(mut self, select: SelectSpec) -> Self {
        self.rows.push(RowSpec::Select(select));
        self
    }

    pub fn rows(&self) -> &[RowSpec] {
        &self.rows
    }

    /// Copy of this view with every component disabled
    pub fn disabled(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| match row {
                RowSpec::Buttons(buttons) => RowSpec::Buttons(
                    buttons
                        .iter()
                        .map(|b| b.clone().disabled(true))
                        .collect(),
                ),
                RowSpec::Select(select) => RowSpec::Select(select.clone().disabled(true)),
            })
            .collect();
        Self { rows }
    }

    /// Render the serenity component payload
    pub fn build(&self) -> CreateComponents {
        let mut components = CreateComponents::default();
        for row in &self.rows {
            components.create_action_row(|action_row| {
                match row {
                    RowSpec::Buttons(buttons) => {
                        for spec in buttons {
                            action_row.create_button(|button| {
                                button
                                    .custom_id(&spec.custom_id)
                                    .style(spec.style)
                                    .disabled(spec.disabled);
                                if let Some(label) = &spec.label {
                                    button.label(label);
                                }
                                if let Some(emoji) = spec.emoji {
                                    button.emoji(emoji);
                                }
                                button
                            });
                        }
                    }
                    RowSpec::Select(select) => {
                        action_row.create_select_menu(|menu| {
                            menu.custom_id(&select.custom_id)
                                .min_values(1)
                                .max_values(1)
                                .disabled(select.disabled);
                            if let Some(placeholder) = &select.placeholder {
                                menu.placeholder(placeholder);
                            }
                            menu.options(|options| {
                                for spec in &select.options {
                                    options.create_option(|option| {
                                        option.label(&spec.label).value(&spec.value);
                                        if let Some(description) = &spec.description {
                                            option.description(description);
                                        }
                                        option
                                    });
                                }
                                options
                            })
                        });
                    }
                }
                action_row
            });
        }
        components
    }
}
