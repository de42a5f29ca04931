//! General Discord commands - ping and help.
//! This module contains simple commands that don't require database
//! operations and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**SupplyBuddy Help**\n\
        Here is a summary of all available commands for SupplyBuddy.\n\n\
        **Contributor Commands**\n\
        • `/my_contributions` - Your stakes, profit shares, and expected earnings.\n\
        • `/supplies [completed]` - Lists current (or previous) supplies.\n\
        • `/supply_items <supply>` - Items of a supply with sold markers.\n\
        • `/item <item_id>` - Full item card with prices, status, and photo.\n\
        • `/payment_details` - Where to send your contribution.\n\
        • `/contribute <bank> <payment_info>` - Declare a transfer for admin review.\n\n\
        **Admin: Supplies**\n\
        • `/create_supply [name]` / `/complete_supply <supply>` / `/delete_supply <supply>`\n\
        • `/supply_report <supply>` - Pool, profit, and every contributor's share.\n\n\
        **Admin: Items**\n\
        • `/add_item <supply> <title> <price> <sell_price> [description] [photo]`\n\
        • `/edit_item <item_id> [...]` / `/set_item_status <item_id> <status>`\n\
        • `/toggle_sold <item_id>` / `/delete_item <item_id>`\n\
        • `/clear_supply <supply>` / `/set_all_statuses <supply> <status>`\n\n\
        **Admin: Contributions**\n\
        • `/add_contribution <user> <amount>` - Credit a user directly.\n\
        • `/contributions` - All stakes across supplies.\n\
        • `/requests` / `/approve <id> <amount>` / `/reject <id>` - Review declared transfers.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
