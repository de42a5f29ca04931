//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the `SupplyBuddy`
//! application, including all slash commands, autocomplete handlers, the
//! admin permission check, and bot startup.

/// Discord command implementations (supply, item, contribution, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::config::app::AppConfig;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

/// Shared data available to all bot commands.
/// This structure holds the database connection and the presentation
/// settings that commands need to access.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Presentation settings (banks, status labels, payment requisites)
    pub settings: AppConfig,
}

impl BotData {
    /// Creates a new `BotData` instance with the given database connection
    /// and settings.
    #[must_use]
    pub const fn new(database: DatabaseConnection, settings: AppConfig) -> Self {
        Self { database, settings }
    }
}

/// Command check gating the curation commands to the admin roster.
///
/// Non-admins get a refusal reply instead of a silent failure.
pub async fn admin_only(ctx: poise::Context<'_, BotData, Error>) -> Result<bool> {
    let caller = ctx.author().id.to_string();
    if crate::config::admins::is_admin(&caller) {
        return Ok(true);
    }

    ctx.say("❌ This command is for administrators only.")
        .await?;
    Ok(false)
}

/// Sends a direct message to a user by ID, logging instead of failing when
/// the DM cannot be delivered (closed DMs, left server).
pub async fn dm_user(ctx: poise::Context<'_, BotData, Error>, user_id: &str, text: &str) {
    let Ok(id) = user_id.parse::<u64>() else {
        warn!("Cannot DM malformed user id {user_id}");
        return;
    };

    let user_id = serenity::UserId::new(id);
    match user_id.create_dm_channel(ctx.serenity_context()).await {
        Ok(channel) => {
            if let Err(e) = channel.id.say(ctx.http(), text).await {
                warn!("Failed to DM user {user_id}: {e}");
            }
        }
        Err(e) => warn!("Failed to open DM channel to {user_id}: {e}"),
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework, registers all commands globally, and runs the
/// bot until the gateway connection ends.
#[instrument(skip_all)]
pub async fn run_bot(
    token: String,
    settings: AppConfig,
    database: DatabaseConnection,
) -> std::result::Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::supplies(),
                commands::supply_items(),
                commands::item(),
                commands::my_contributions(),
                commands::payment_details(),
                commands::contribute(),
                commands::create_supply(),
                commands::complete_supply(),
                commands::delete_supply(),
                commands::supply_report(),
                commands::add_item(),
                commands::edit_item(),
                commands::set_item_status(),
                commands::toggle_sold(),
                commands::delete_item(),
                commands::clear_supply(),
                commands::set_all_statuses(),
                commands::add_contribution(),
                commands::contributions(),
                commands::requests(),
                commands::approve(),
                commands::reject(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database, settings))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    if let Err(why) = client.start().await {
        tracing::error!("Client error: {why:?}");
        return Err(why);
    }
    Ok(())
}
