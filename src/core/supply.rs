//! Supply business logic - Handles the supply lifecycle.
//!
//! Supplies are created active, collect items and contributions, and either
//! get completed (archived, one-way) or deleted outright, which removes
//! their items and contributions with them. Several supplies may be active
//! at once; where a single "current" supply is needed, the newest active
//! one wins.

use crate::{
    entities::{Contribution, Item, Supply, contribution, item, supply},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Lifecycle state of a supply still collecting and selling.
pub const STATUS_ACTIVE: &str = "active";
/// Lifecycle state of an archived supply.
pub const STATUS_COMPLETED: &str = "completed";

/// Creates a new active supply with the given display name.
///
/// # Errors
/// Returns an error if the name is empty or the insert fails.
pub async fn create_supply(db: &DatabaseConnection, name: String) -> Result<supply::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Supply name cannot be empty".to_string(),
        });
    }

    let supply = supply::ActiveModel {
        name: Set(name.trim().to_string()),
        status: Set(STATUS_ACTIVE.to_string()),
        ..Default::default()
    };

    supply.insert(db).await.map_err(Into::into)
}

/// Seeds a dated first supply when the table is empty, so a fresh install
/// has something to contribute to. Returns the created supply, or `None`
/// when supplies already exist.
pub async fn ensure_initial_supply(db: &DatabaseConnection) -> Result<Option<supply::Model>> {
    let existing = Supply::find().one(db).await?;
    if existing.is_some() {
        return Ok(None);
    }

    let name = format!("Supply {}", chrono::Local::now().format("%d.%m.%Y"));
    create_supply(db, name).await.map(Some)
}

/// Finds a supply by its unique ID.
pub async fn get_supply_by_id(
    db: &DatabaseConnection,
    supply_id: i64,
) -> Result<Option<supply::Model>> {
    Supply::find_by_id(supply_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a supply by its display name.
///
/// Names are chosen by admins and are not forced unique; if duplicates
/// exist the newest wins, matching the active-supply resolution order.
pub async fn get_supply_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<supply::Model>> {
    Supply::find()
        .filter(supply::Column::Name.eq(name))
        .order_by_desc(supply::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists supplies in one lifecycle state, newest first.
pub async fn get_supplies_by_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<Vec<supply::Model>> {
    Supply::find()
        .filter(supply::Column::Status.eq(status))
        .order_by_desc(supply::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Resolves "the" current supply: the newest active one, or `None` when no
/// supply is active.
pub async fn get_active_supply(db: &DatabaseConnection) -> Result<Option<supply::Model>> {
    Supply::find()
        .filter(supply::Column::Status.eq(STATUS_ACTIVE))
        .order_by_desc(supply::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Archives an active supply. The transition is one-way; completing an
/// already-completed supply is rejected.
pub async fn complete_supply(db: &DatabaseConnection, supply_id: i64) -> Result<supply::Model> {
    let supply = Supply::find_by_id(supply_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::SupplyNotFound {
            name: supply_id.to_string(),
        })?;

    if supply.status != STATUS_ACTIVE {
        return Err(Error::Config {
            message: format!("Supply '{}' is not active", supply.name),
        });
    }

    let mut active: supply::ActiveModel = supply.into();
    active.status = Set(STATUS_COMPLETED.to_string());
    active.update(db).await.map_err(Into::into)
}

/// Deletes a supply outright together with its items and contributions.
///
/// Runs inside one database transaction so a failure cannot leave orphaned
/// rows behind.
pub async fn delete_supply(db: &DatabaseConnection, supply_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let supply = Supply::find_by_id(supply_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::SupplyNotFound {
            name: supply_id.to_string(),
        })?;

    Item::delete_many()
        .filter(item::Column::SupplyId.eq(supply_id))
        .exec(&txn)
        .await?;
    Contribution::delete_many()
        .filter(contribution::Column::SupplyId.eq(supply_id))
        .exec(&txn)
        .await?;
    supply.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
