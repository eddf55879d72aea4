//! # Components Layer
//!
//! Message component descriptors, the embed paginator, and the interaction
//! routing that drives them.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.3.0
//!
//! ## Changelog
//! - 1.1.0: Paginator store keyed by message id
//! - 1.0.0: Initial descriptor builders

pub mod paginator;
pub mod view;

pub use paginator::{PageEntry, Paginator, PaginatorStore};
pub use view::{ButtonSpec, RowSpec, SelectOptionSpec, SelectSpec, ViewSpec};

use std::sync::Arc;

use anyhow::Result;
use log::info;
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

/// Handler for all message component interactions
pub struct ComponentHandler {
    paginators: Arc<PaginatorStore>,
}

enum PagerUpdate {
    Refresh(CreateEmbed, CreateComponents),
    Stop(CreateEmbed, CreateComponents),
    NotOwner,
    Missing,
}

impl ComponentHandler {
    pub fn new(paginators: Arc<PaginatorStore>) -> Self {
        Self { paginators }
    }

    /// Handle all types of component interactions
    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        info!(
            "Processing component interaction: {custom_id} from user: {}",
            interaction.user.id
        );

        match custom_id.as_str() {
            id if id.starts_with("pager_") => self.handle_pagination(ctx, interaction).await,
            _ => {
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.ephemeral(true).content("Unknown component interaction.")
                            })
                    })
                    .await?;
                Ok(())
            }
        }
    }

    async fn handle_pagination(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let message_id = interaction.message.id.0;

        // Resolve the update without holding the store entry across an await
        let update = match self.paginators.get_mut(message_id) {
            None => PagerUpdate::Missing,
            Some(mut pager) => {
                if interaction.user.id != pager.owner() {
                    PagerUpdate::NotOwner
                } else if pager.apply(&interaction.data.custom_id, &interaction.data.values) {
                    PagerUpdate::Refresh(pager.page(), pager.controls().build())
                } else {
                    PagerUpdate::Stop(pager.page(), pager.disabled_controls().build())
                }
            }
        };

        match update {
            PagerUpdate::Refresh(embed, components) => {
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::UpdateMessage)
                            .interaction_response_data(|message| {
                                message.set_embed(embed).set_components(components)
                            })
                    })
                    .await?;
            }
            PagerUpdate::Stop(embed, components) => {
                self.paginators.remove(message_id);
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::UpdateMessage)
                            .interaction_response_data(|message| {
                                message.set_embed(embed).set_components(components)
                            })
                    })
                    .await?;
            }
            PagerUpdate::NotOwner => {
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message
                                    .ephemeral(true)
                                    .content("Only the user who opened this menu can use it.")
                            })
                    })
                    .await?;
            }
            PagerUpdate::Missing => {
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.ephemeral(true).content("This menu is no longer active.")
                            })
                    })
                    .await?;
            }
        }

        Ok(())
    }
}
