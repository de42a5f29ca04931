//! Supply Discord commands - listing, lifecycle, and the share report.
//!
//! This module contains commands that interact with the database through our
//! core modules to handle supply creation, completion, deletion, and the
//! per-contributor profit share report.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::resolve_supply, handlers::autocomplete},
        config,
        core::{report, supply},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Lists current supplies, or previous ones with `completed: true`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn supplies(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Show completed supplies instead of active ones"] completed: Option<bool>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let status = if completed.unwrap_or(false) {
            supply::STATUS_COMPLETED
        } else {
            supply::STATUS_ACTIVE
        };
        let supplies = supply::get_supplies_by_status(db, status).await?;

        if supplies.is_empty() {
            ctx.say(format!("📦 No {status} supplies found.")).await?;
            return Ok(());
        }

        let mut text = format!("📦 **{status} supplies:**\n");
        for s in &supplies {
            writeln!(&mut text, "• {} (#{})", s.name, s.id)?;
        }
        ctx.say(text).await?;

        Ok(())
    }

    /// Creates a new active supply. The name defaults to a dated label.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn create_supply(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Supply name (defaults to a dated label)"] name: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let name = name.unwrap_or_else(|| {
            format!("Supply {}", chrono::Local::now().format("%d.%m.%Y"))
        });

        match supply::create_supply(db, name).await {
            Ok(created) => {
                ctx.say(format!("✅ Supply '{}' created!", created.name))
                    .await?;
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Archives an active supply (moves it to the previous list).
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn complete_supply(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the supply to archive"]
        #[autocomplete = "autocomplete::autocomplete_active_supply_name"]
        supply_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        match supply::complete_supply(db, found.id).await {
            Ok(completed) => {
                ctx.say(format!(
                    "✅ Supply '{}' moved to previous supplies.",
                    completed.name
                ))
                .await?;
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Deletes a supply outright together with its items and contributions.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn delete_supply(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the supply to delete permanently"]
        #[autocomplete = "autocomplete::autocomplete_supply_name"]
        supply_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        supply::delete_supply(db, found.id).await?;
        ctx.say(format!(
            "🗑 Supply '{}' and all its items were deleted.",
            found.name
        ))
        .await?;

        Ok(())
    }

    /// Shows the full share report of a supply: pool, profit, and every
    ///
    /// contributor's percentage and expected earnings.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn supply_report(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the supply to report on"]
        #[autocomplete = "autocomplete::autocomplete_supply_name"]
        supply_name: String,
    ) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let db = &ctx.data().database;

        let Some(found) = resolve_supply(ctx, &supply_name).await? else {
            return Ok(());
        };

        let admins = config::admins::admin_ids();
        let full_report = report::generate_supply_report(db, found.id, &admins).await?;

        let mut embed_fields = Vec::new();
        for entry in &full_report.entries {
            let name = entry
                .username
                .clone()
                .unwrap_or_else(|| format!("ID:{}", entry.user_id));

            let mut value = String::new();
            writeln!(
                &mut value,
                "**Stake:** {}",
                report::format_rubles(entry.amount)
            )?;
            writeln!(
                &mut value,
                "**Share:** {}",
                report::format_share(entry.share_percent)
            )?;
            write!(
                &mut value,
                "**Expected:** {}",
                report::format_rubles(entry.expected_earnings)
            )?;

            embed_fields.push((name, value, true));
        }

        let report_embed = serenity::CreateEmbed::default()
            .title(format!("📊 Report: {}", full_report.supply.name))
            .description(format!(
                "Pool: {} | Profit: {} | Items sold: {}/{}",
                report::format_rubles(full_report.pool_total),
                report::format_rubles(full_report.total_profit),
                full_report.items_sold,
                full_report.items_total,
            ))
            .color(0x0034_98DB) // Blue color
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "SupplyBuddy | {} contributor{}",
                full_report.entries.len(),
                if full_report.entries.len() == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(report_embed))
            .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
