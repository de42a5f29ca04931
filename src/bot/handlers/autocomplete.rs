//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for command parameters
//! like supply names, bank names, and item status labels, improving the user
//! experience by suggesting valid options as the user types.

use crate::{
    bot::BotData,
    core::supply,
    entities::Supply,
    errors::Error,
};
use sea_orm::{EntityTrait, QueryOrder};

/// Provides autocomplete suggestions for supply names.
///
/// Queries the database for supplies whose name matches the partial input
/// (case-insensitive) and returns up to 25 names, newest supplies first so
/// the current batch is the first suggestion.
pub async fn autocomplete_supply_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(supplies) = Supply::find()
        .order_by_desc(crate::entities::SupplyColumn::Id)
        .all(db)
        .await
    else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    supplies
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&partial_lower))
        .map(|s| s.name)
        .take(25) // Discord autocomplete limit
        .collect()
}

/// Provides autocomplete suggestions for active supply names only, used by
/// curation commands that must not touch archived batches.
pub async fn autocomplete_active_supply_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(supplies) = supply::get_supplies_by_status(db, supply::STATUS_ACTIVE).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    supplies
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&partial_lower))
        .map(|s| s.name)
        .take(25)
        .collect()
}

/// Provides autocomplete suggestions for item status labels from the
/// configured pipeline.
pub async fn autocomplete_status(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    ctx.data()
        .settings
        .item_statuses
        .iter()
        .filter(|status| status.to_lowercase().contains(&partial_lower))
        .cloned()
        .collect()
}

/// Provides autocomplete suggestions for bank names from the configured
/// list.
pub async fn autocomplete_bank(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    ctx.data()
        .settings
        .banks
        .iter()
        .filter(|bank| bank.to_lowercase().contains(&partial_lower))
        .cloned()
        .collect()
}
