//! Item Discord commands - browsing and curation of purchased goods.
//!
//! User-facing commands show item lists and detail cards; admin commands
//! cover the fill-supply flow, field edits, status relabeling, sold
//! tracking, and the bulk operations.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::resolve_supply, handlers::autocomplete},
        core::{item, report},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    fn validate_price_arg(price: f64) -> Option<&'static str> {
        if price.is_nan() || price.is_infinite() {
            Some("❌ Invalid price: must be a valid number")
        } else if price < 0.0 {
            Some("❌ Invalid price: must not be negative")
        } else {
            None
        }
    }

    /// Lists the items of a supply with their prices and sold markers.
    #[poise::command(slash_command, prefix_command)]
    pub async fn supply_items(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the supply to browse"]
        #[autocomplete = "autocomplete::autocomplete_supply_name"]
        supply_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        let items = item::get_items_for_supply(db, found.id).await?;
        if items.is_empty() {
            ctx.say(format!("📦 Supply '{}' has no items yet.", found.name))
                .await?;
            return Ok(());
        }

        let mut text = format!("📦 **Items in {}:**\n", found.name);
        for i in &items {
            writeln!(
                &mut text,
                "`#{}` {} — {} {}",
                i.id,
                i.title,
                report::format_rubles(i.price),
                report::sold_marker(i.is_sold),
            )?;
        }
        ctx.say(text).await?;

        Ok(())
    }

    /// Shows the full card of one item: prices, pipeline status, delivery
    ///
    /// and sale-time estimates, description, and photo.
    #[poise::command(slash_command, prefix_command)]
    pub async fn item(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id (shown in /supply_items)"] item_id: i64,
    ) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let db = &ctx.data().database;

        let Some(found) = item::get_item_by_id(db, item_id).await? else {
            ctx.say(format!("❌ Item #{item_id} not found.")).await?;
            return Ok(());
        };

        let mut description = String::new();
        writeln!(
            &mut description,
            "💰 Purchase: **{}**",
            report::format_rubles(found.price)
        )?;
        writeln!(
            &mut description,
            "🎯 Resale: **{}**",
            report::format_rubles(found.sell_price)
        )?;
        writeln!(&mut description, "🏷 Status: **{}**", found.status)?;
        writeln!(
            &mut description,
            "📦 Sold: {}",
            report::sold_marker(found.is_sold)
        )?;
        writeln!(
            &mut description,
            "\n🚚 Arrival: **{}**",
            report::ARRIVAL_ESTIMATE
        )?;
        writeln!(
            &mut description,
            "⏱ Sale time: **{}**",
            report::sale_time_estimate(found.sell_price)
        )?;
        write!(
            &mut description,
            "\n📝 {}",
            found.description.as_deref().unwrap_or("No description")
        )?;

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("📦 {}", found.title))
            .description(description)
            .color(0x0034_98DB);
        if let Some(url) = &found.photo_url {
            embed = embed.image(url.as_str());
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;

        Ok(())
    }

    /// Adds an item to a supply (the fill-supply flow).
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn add_item(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Supply to fill"]
        #[autocomplete = "autocomplete::autocomplete_active_supply_name"]
        supply_name: String,
        #[description = "Item title"] title: String,
        #[description = "Purchase price in rubles"] price: f64,
        #[description = "Expected resale price in rubles"] sell_price: f64,
        #[description = "Optional description"] description: Option<String>,
        #[description = "Optional photo"] photo: Option<poise::serenity_prelude::Attachment>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        for value in [price, sell_price] {
            if let Some(msg) = validate_price_arg(value) {
                ctx.say(msg).await?;
                return Ok(());
            }
        }

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        let status = ctx.data().settings.default_item_status().to_string();
        let created = item::create_item(
            db,
            found.id,
            title,
            price,
            sell_price,
            description,
            photo.map(|a| a.url),
            status,
        )
        .await?;

        ctx.say(format!(
            "✅ Item '{}' (#{}) added to supply '{}'.",
            created.title, created.id, found.name
        ))
        .await?;

        Ok(())
    }

    /// Edits the fields of an existing item; omitted fields stay unchanged.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn edit_item(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] item_id: i64,
        #[description = "New title"] title: Option<String>,
        #[description = "New purchase price"] price: Option<f64>,
        #[description = "New resale price"] sell_price: Option<f64>,
        #[description = "New description"] description: Option<String>,
        #[description = "New photo"] photo: Option<poise::serenity_prelude::Attachment>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        for value in [price, sell_price].into_iter().flatten() {
            if let Some(msg) = validate_price_arg(value) {
                ctx.say(msg).await?;
                return Ok(());
            }
        }

        let update = item::ItemUpdate {
            title,
            price,
            sell_price,
            description,
            photo_url: photo.map(|a| a.url),
        };

        match item::update_item(db, item_id, update).await {
            Ok(updated) => {
                ctx.say(format!("✅ Item '{}' (#{}) updated.", updated.title, updated.id))
                    .await?;
            }
            Err(Error::ItemNotFound { id }) => {
                ctx.say(format!("❌ Item #{id} not found.")).await?;
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Relabels one item's pipeline status.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn set_item_status(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] item_id: i64,
        #[description = "New pipeline status"]
        #[autocomplete = "autocomplete::autocomplete_status"]
        status: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match item::set_item_status(db, item_id, status).await {
            Ok(updated) => {
                ctx.say(format!(
                    "✅ Status of '{}' changed to: {}",
                    updated.title, updated.status
                ))
                .await?;
            }
            Err(Error::ItemNotFound { id }) => {
                ctx.say(format!("❌ Item #{id} not found.")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Flips an item's sold flag.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn toggle_sold(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] item_id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match item::toggle_sold(db, item_id).await {
            Ok(updated) => {
                ctx.say(format!(
                    "✅ '{}' is now {}.",
                    updated.title,
                    if updated.is_sold { "marked sold" } else { "back in the pipeline" }
                ))
                .await?;
            }
            Err(Error::ItemNotFound { id }) => {
                ctx.say(format!("❌ Item #{id} not found.")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Deletes one item.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn delete_item(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] item_id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match item::delete_item(db, item_id).await {
            Ok(()) => {
                ctx.say(format!("🗑 Item #{item_id} deleted.")).await?;
            }
            Err(Error::ItemNotFound { id }) => {
                ctx.say(format!("❌ Item #{id} not found.")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Deletes every item of a supply.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn clear_supply(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Supply to clear"]
        #[autocomplete = "autocomplete::autocomplete_supply_name"]
        supply_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        let removed = item::delete_items_for_supply(db, found.id).await?;
        ctx.say(format!(
            "🗑 Removed {removed} item(s) from supply '{}'.",
            found.name
        ))
        .await?;

        Ok(())
    }

    /// Relabels every item of a supply with one pipeline status.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn set_all_statuses(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Supply whose items get the status"]
        #[autocomplete = "autocomplete::autocomplete_supply_name"]
        supply_name: String,
        #[description = "New pipeline status"]
        #[autocomplete = "autocomplete::autocomplete_status"]
        status: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        let touched = item::set_status_for_supply(db, found.id, &status).await?;
        ctx.say(format!(
            "✅ Status of {touched} item(s) in '{}' changed to: {status}",
            found.name
        ))
        .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
