//! Discord command implementations organized by category.

/// Contribution and request commands
pub mod contribution;

/// General utility commands
pub mod general;

/// Item curation commands
pub mod item;

/// Supply lifecycle and report commands
pub mod supply;

use crate::{bot::BotData, core, errors::Error};

/// Looks up a supply by name, replying with a hint when it is missing.
/// Returns `None` after the reply so callers can just bail out.
pub(crate) async fn resolve_supply(
    ctx: poise::Context<'_, BotData, Error>,
    name: &str,
) -> crate::errors::Result<Option<crate::entities::supply::Model>> {
    let found = core::supply::get_supply_by_name(&ctx.data().database, name).await?;
    if found.is_none() {
        ctx.say(format!(
            "❌ Supply '{name}' not found. Use `/supplies` to see available supplies."
        ))
        .await?;
    }
    Ok(found)
}

// Export commands
pub use contribution::*;
pub use general::*;
pub use item::*;
pub use supply::*;
