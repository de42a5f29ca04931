//! `SupplyBuddy` binary entry point.

use dotenvy::dotenv;
use std::env;
use supply_buddy::errors::{Error, Result};
use supply_buddy::{bot, config, core};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load presentation settings (banks, statuses, payment details)
    let settings = config::app::load_default_config()
        .inspect(|_| info!("Loaded bot settings."))
        .inspect_err(|e| error!("Failed to load config.toml: {e}"))?;

    if config::admins::admin_ids().is_empty() {
        tracing::warn!("ADMIN_USER_IDS is not set; curation commands will be unusable.");
    }

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connected."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed the first supply on a fresh install
    if let Some(seeded) = core::supply::ensure_initial_supply(&db).await? {
        info!("Seeded initial supply '{}'.", seeded.name);
    }

    // 6. Run the bot. DISCORD_BOT_TOKEN is loaded here, directly before use.
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, settings, db).await.map_err(Error::from)?;

    Ok(())
}
