//! Shared test utilities for `SupplyBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{item, request, supply},
    entities,
    errors::Result,
};
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test supply with the given name, active by default.
pub async fn create_test_supply(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::supply::Model> {
    supply::create_supply(db, name.to_string()).await
}

/// Creates a test item with sensible defaults.
///
/// # Defaults
/// * `price`: 1000.0
/// * `sell_price`: 1500.0
/// * `description` / `photo_url`: None
/// * `status`: `"Purchased"`
pub async fn create_test_item(
    db: &DatabaseConnection,
    supply_id: i64,
    title: &str,
) -> Result<entities::item::Model> {
    create_custom_item(db, supply_id, title, 1000.0, 1500.0).await
}

/// Creates a test item with custom prices.
pub async fn create_custom_item(
    db: &DatabaseConnection,
    supply_id: i64,
    title: &str,
    price: f64,
    sell_price: f64,
) -> Result<entities::item::Model> {
    item::create_item(
        db,
        supply_id,
        title.to_string(),
        price,
        sell_price,
        None,
        None,
        "Purchased".to_string(),
    )
    .await
}

/// Inserts a contribution row directly, bypassing the accumulate-on-grant
/// path, so tests can build arbitrary snapshots including zero stakes.
pub async fn create_test_contribution(
    db: &DatabaseConnection,
    user_id: &str,
    supply_id: i64,
    amount: f64,
) -> Result<entities::contribution::Model> {
    let row = entities::contribution::ActiveModel {
        user_id: Set(user_id.to_string()),
        supply_id: Set(supply_id),
        amount: Set(amount),
        username: Set(Some(user_id.to_string())),
    };
    row.insert(db).await.map_err(Into::into)
}

/// Creates a pending test request with sensible defaults.
///
/// # Defaults
/// * `bank`: `"T-Bank"`
/// * `payment_info`: `"+7 900 000 00 00"`
pub async fn create_test_request(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entities::contribution_request::Model> {
    request::create_request(
        db,
        user_id,
        Some(user_id.to_string()),
        "T-Bank".to_string(),
        "+7 900 000 00 00".to_string(),
    )
    .await
}

/// Sets up a complete test environment with an active supply.
/// Returns (db, supply) for common test scenarios.
pub async fn setup_with_supply() -> Result<(DatabaseConnection, entities::supply::Model)> {
    let db = setup_test_db().await?;
    let supply = create_test_supply(&db, "Test Supply").await?;
    Ok((db, supply))
}
