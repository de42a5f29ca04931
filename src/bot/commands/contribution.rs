//! Contribution Discord commands - stakes, shares, and transfer requests.
//!
//! Contributors see their own stakes and profit shares and declare
//! transfers; admins credit stakes directly, browse all stakes, and review
//! declared transfers.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, dm_user, handlers::autocomplete},
        config,
        core::{contribution, report, request, share, supply},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Shows the caller's stakes across supplies with share percentages and
    /// expected earnings.
    #[poise::command(slash_command, prefix_command)]
    pub async fn my_contributions(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let user_id = ctx.author().id.to_string();

        let stakes = contribution::get_contributions_for_user(db, &user_id).await?;
        if stakes.is_empty() {
            ctx.say("You have not contributed yet. See `/payment_details` to get started.")
                .await?;
            return Ok(());
        }

        let admins = config::admins::admin_ids();

        let mut text = "📊 **Your contributions:**\n\n".to_string();
        for (stake, supply) in &stakes {
            let supply_name = supply
                .as_ref()
                .map_or_else(|| format!("Supply #{}", stake.supply_id), |s| s.name.clone());
            let status = supply.as_ref().map_or("", |s| s.status.as_str());

            let percent = share::share_for_user(db, &user_id, stake.supply_id, &admins).await?;
            let earnings =
                share::expected_earnings_for_user(db, &user_id, stake.supply_id, &admins).await?;

            writeln!(&mut text, "📦 {supply_name} ({status})")?;
            writeln!(
                &mut text,
                "💸 Stake: {}",
                report::format_rubles(stake.amount)
            )?;
            writeln!(&mut text, "📊 Share: {}", report::format_share(percent))?;
            writeln!(
                &mut text,
                "📈 Expected: {}\n",
                report::format_rubles(earnings)
            )?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Shows where to send a contribution transfer.
    #[poise::command(slash_command, prefix_command)]
    pub async fn payment_details(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let text = format!(
            "💳 **To make a contribution, transfer money to:**\n\n{}\n\n\
             After the transfer, declare it with `/contribute`.",
            ctx.data().settings.payment_details
        );
        ctx.say(text).await?;
        Ok(())
    }

    /// Declares a completed transfer for admin review.
    ///
    /// Files a contribution request and notifies every admin by direct
    /// message; an admin later confirms the received amount with `/approve`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn contribute(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Bank you transferred from"]
        #[autocomplete = "autocomplete::autocomplete_bank"]
        bank: String,
        #[description = "Card or phone number the transfer came from"] payment_info: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let author = ctx.author();

        let created = match request::create_request(
            db,
            &author.id.to_string(),
            Some(author.name.clone()),
            bank,
            payment_info,
        )
        .await
        {
            Ok(created) => created,
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let notice = format!(
            "📬 **New contribution request #{}**\n\
             👤 User: {} (@{})\n\
             🏦 Bank: {}\n\
             📱/💳: `{}`\n\
             Confirm with `/approve {} <amount>` or `/reject {}`.",
            created.id,
            author.name,
            created.username.as_deref().unwrap_or("unknown"),
            created.bank,
            created.payment_info,
            created.id,
            created.id,
        );
        for admin_id in config::admins::admin_ids() {
            dm_user(ctx, &admin_id, &notice).await;
        }

        ctx.say(
            "✅ Your request was sent to the administrators.\n\
             You will be notified once the contribution is confirmed.",
        )
        .await?;
        Ok(())
    }

    /// Credits a user's stake in the current supply directly.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn add_contribution(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "User to credit"] user: poise::serenity_prelude::User,
        #[description = "Amount in rubles"] amount: f64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        if amount.is_nan() || amount.is_infinite() || amount <= 0.0 {
            ctx.say("❌ Invalid amount: must be a positive number")
                .await?;
            return Ok(());
        }

        let Some(active) = supply::get_active_supply(db).await? else {
            ctx.say("❌ No active supply. Create one with `/create_supply` first.")
                .await?;
            return Ok(());
        };

        let updated = contribution::add_contribution(
            db,
            &user.id.to_string(),
            Some(user.name.clone()),
            active.id,
            amount,
        )
        .await?;

        ctx.say(format!(
            "✅ Contribution of {} recorded for @{} in supply '{}' (total stake: {}).",
            report::format_rubles(amount),
            user.name,
            active.name,
            report::format_rubles(updated.amount),
        ))
        .await?;
        Ok(())
    }

    /// Lists every stake across all supplies.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn contributions(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let rows = contribution::get_all_contributions(db).await?;
        if rows.is_empty() {
            ctx.say("No contributions yet.").await?;
            return Ok(());
        }

        let mut text = "📊 **All contributions:**\n\n".to_string();
        for (stake, supply) in &rows {
            let who = stake
                .username
                .clone()
                .unwrap_or_else(|| format!("ID:{}", stake.user_id));
            let supply_name = supply
                .as_ref()
                .map_or_else(|| format!("Supply #{}", stake.supply_id), |s| s.name.clone());
            writeln!(
                &mut text,
                "👤 {who} → {supply_name}: {}",
                report::format_rubles(stake.amount)
            )?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Lists pending contribution requests.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn requests(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;

        let pending = request::get_pending_requests(db).await?;
        if pending.is_empty() {
            ctx.say("No new requests.").await?;
            return Ok(());
        }

        let mut text = "📬 **Pending requests:**\n\n".to_string();
        for req in &pending {
            let who = req
                .username
                .clone()
                .unwrap_or_else(|| format!("ID:{}", req.user_id));
            writeln!(
                &mut text,
                "#{} 👤 {who} | 🏦 {} | 📱/💳 `{}`",
                req.id, req.bank, req.payment_info
            )?;
        }
        write!(
            &mut text,
            "\nConfirm with `/approve <id> <amount>` or `/reject <id>`."
        )?;

        ctx.say(text).await?;
        Ok(())
    }

    /// Approves a request with the amount actually received, crediting the
    ///
    /// requester's stake in the current supply.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn approve(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Request id (shown in /requests)"] request_id: i64,
        #[description = "Amount received, in rubles"] amount: f64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        if amount.is_nan() || amount.is_infinite() || amount <= 0.0 {
            ctx.say("❌ Invalid amount: must be a positive number")
                .await?;
            return Ok(());
        }

        let (approved, stake) = match request::approve_request(db, request_id, amount).await {
            Ok(result) => result,
            Err(Error::RequestNotFound { id }) => {
                ctx.say(format!("❌ Request #{id} not found.")).await?;
                return Ok(());
            }
            Err(Error::NoActiveSupply) => {
                ctx.say("❌ No active supply. Create one with `/create_supply` first.")
                    .await?;
                return Ok(());
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let supply_name = supply::get_supply_by_id(db, stake.supply_id)
            .await?
            .map_or_else(|| format!("#{}", stake.supply_id), |s| s.name);

        dm_user(
            ctx,
            &approved.user_id,
            &format!(
                "✅ Your contribution of {} was confirmed!\n\
                 It was added to supply '{supply_name}'.",
                report::format_rubles(amount)
            ),
        )
        .await;

        ctx.say(format!(
            "✅ Request #{} approved: {} added for @{} (total stake: {}).",
            approved.id,
            report::format_rubles(amount),
            approved.username.as_deref().unwrap_or("unknown"),
            report::format_rubles(stake.amount),
        ))
        .await?;
        Ok(())
    }

    /// Rejects a pending request.
    #[poise::command(slash_command, prefix_command, check = "crate::bot::admin_only")]
    pub async fn reject(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Request id (shown in /requests)"] request_id: i64,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let rejected = match request::reject_request(db, request_id).await {
            Ok(rejected) => rejected,
            Err(Error::RequestNotFound { id }) => {
                ctx.say(format!("❌ Request #{id} not found.")).await?;
                return Ok(());
            }
            Err(Error::Config { message }) => {
                ctx.say(format!("❌ {message}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        dm_user(
            ctx,
            &rejected.user_id,
            "❌ Your contribution request was rejected.\n\
             Contact an administrator if you believe this is a mistake.",
        )
        .await;

        ctx.say(format!("❌ Request #{} rejected.", rejected.id))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
