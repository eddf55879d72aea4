use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::autocomplete::AutocompleteInteraction;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;

use herald::commands::handlers::extensions::handle_extension_command;
use herald::commands::{build_registry, subcommand_path, CommandContext};
use herald::components::{ComponentHandler, PaginatorStore};
use herald::core::Config;
use herald::features::extensions::{watch_extensions, ExtensionHost};
use herald::features::sync::CommandTree;
use herald::features::translation::{Translator, YamlCatalog};

struct Handler {
    context: Arc<CommandContext>,
    component_handler: Arc<ComponentHandler>,
    watch_interval: Duration,
    watcher_started: AtomicBool,
}

impl Handler {
    /// Suggest extension names for the /extensions info autocomplete
    async fn handle_autocomplete(
        &self,
        ctx: &Context,
        autocomplete: &AutocompleteInteraction,
    ) -> Result<()> {
        if autocomplete.data.name != "extensions" {
            return Ok(());
        }
        let (_, options) = subcommand_path(&autocomplete.data.options);
        let typed = options
            .iter()
            .find(|opt| opt.focused)
            .and_then(|opt| opt.value.as_ref())
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_lowercase();

        let names = self.context.extensions.extension_names();
        autocomplete
            .create_autocomplete_response(&ctx.http, |response| {
                for name in names
                    .iter()
                    .filter(|name| name.to_lowercase().starts_with(&typed))
                    .take(25)
                {
                    response.add_string_choice(name, name);
                }
                response
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "Logged in as {} ({}) at {}",
            ready.user.name,
            ready.user.id,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        // Startup sync against remote truth; publish only if something changed
        match self.context.tree.sync(&ctx.http).await {
            Ok(Some(diff)) => info!("Startup sync published {} change(s).", diff.change_count()),
            Ok(None) => info!("Startup sync found nothing to publish."),
            Err(e) => error!("Startup sync failed: {e:#}"),
        }

        // Ready fires again on reconnect; only spawn the watcher once
        if !self.watcher_started.swap(true, Ordering::SeqCst) {
            let host = self.context.extensions.clone();
            let tree = self.context.tree.clone();
            let http = ctx.http.clone();
            let interval = self.watch_interval;
            tokio::spawn(async move {
                watch_extensions(host, tree, http, interval).await;
            });
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                let name = command.data.name.clone();
                let result = match self.context.tree.registry().get(&name) {
                    Some(handler) => handler.handle(self.context.clone(), &ctx, &command).await,
                    None if self.context.extensions.has_command(&name) => {
                        handle_extension_command(&self.context, &ctx, &command).await
                    }
                    None => {
                        error!("No handler registered for command '{name}'");
                        return;
                    }
                };

                if let Err(e) = result {
                    error!("Error handling slash command '{name}': {e:#}");

                    let error_message =
                        "Sorry, I encountered an error processing your command. Please try again.";

                    // Try to edit a deferred response, fall back to a new one
                    if command
                        .edit_original_interaction_response(&ctx.http, |response| {
                            response.content(error_message)
                        })
                        .await
                        .is_err()
                    {
                        let _ = command
                            .create_interaction_response(&ctx.http, |response| {
                                response
                                    .kind(serenity::model::application::interaction::InteractionResponseType::ChannelMessageWithSource)
                                    .interaction_response_data(|message| {
                                        message.ephemeral(true).content(error_message)
                                    })
                            })
                            .await;
                    }
                }
            }
            Interaction::MessageComponent(component) => {
                if let Err(e) = self
                    .component_handler
                    .handle_component_interaction(&ctx, &component)
                    .await
                {
                    error!(
                        "Error handling component interaction '{}': {e:#}",
                        component.data.custom_id
                    );
                }
            }
            Interaction::Autocomplete(autocomplete) => {
                if let Err(e) = self.handle_autocomplete(&ctx, &autocomplete).await {
                    error!("Error handling autocomplete for '{}': {e:#}", autocomplete.data.name);
                }
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting herald...");

    let registry = Arc::new(build_registry());
    info!("Declared {} command(s) in {} categories", registry.len(), registry.categories().len());

    let extensions = Arc::new(ExtensionHost::new(config.extensions_dir.as_str()));
    match extensions.load() {
        Ok(count) => info!("Loaded {count} extension(s) from {}", config.extensions_dir),
        Err(e) => error!("Failed to load extensions: {e:#}"),
    }

    let translator: Option<Arc<dyn Translator>> = match &config.locales_path {
        Some(path) => match YamlCatalog::load(path) {
            Ok(catalog) => {
                info!("Loaded locale catalog from {path}");
                Some(Arc::new(catalog))
            }
            Err(e) => {
                error!("Failed to load locale catalog: {e:#}. Continuing without localizations.");
                None
            }
        },
        None => None,
    };

    let guild = config.guild_id.map(GuildId);
    if let Some(guild_id) = guild {
        info!("Publishing commands to guild {guild_id} (faster for testing)");
    }

    let tree = Arc::new(CommandTree::new(
        registry,
        extensions.clone(),
        translator,
        guild,
    ));
    let paginators = Arc::new(PaginatorStore::new());
    let context = Arc::new(CommandContext::new(tree, extensions, paginators.clone()));

    let handler = Handler {
        context,
        component_handler: Arc::new(ComponentHandler::new(paginators)),
        watch_interval: Duration::from_secs(config.watch_interval_secs.max(1)),
        watcher_started: AtomicBool::new(false),
    };

    let intents = GatewayIntents::GUILDS;
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await?;

    client.start().await?;
    Ok(())
}
