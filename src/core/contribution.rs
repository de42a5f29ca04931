//! Contribution business logic - Handles stakes in supplies.
//!
//! A user holds at most one contribution row per supply; granting again adds
//! to the stored amount and refreshes the username snapshot. Amounts never
//! overwrite and never go below zero.

use crate::{
    entities::{Contribution, Supply, contribution, supply},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Adds money to a user's stake in a supply, creating the row on first
/// contribution and accumulating afterwards. The username snapshot is
/// refreshed on every grant.
///
/// Works on a plain connection or inside an open transaction (request
/// approval folds a grant into its transaction).
///
/// # Errors
/// Returns an error if:
/// - The amount is not finite or not strictly positive
/// - The supply does not exist
/// - The database operation fails
pub async fn add_contribution<C>(
    db: &C,
    user_id: &str,
    username: Option<String>,
    supply_id: i64,
    amount: f64,
) -> Result<contribution::Model>
where
    C: ConnectionTrait,
{
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    Supply::find_by_id(supply_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::SupplyNotFound {
            name: supply_id.to_string(),
        })?;

    let existing = Contribution::find_by_id((user_id.to_string(), supply_id))
        .one(db)
        .await?;

    match existing {
        Some(row) => {
            let new_amount = row.amount + amount;
            let mut active: contribution::ActiveModel = row.into();
            active.amount = Set(new_amount);
            if username.is_some() {
                active.username = Set(username);
            }
            active.update(db).await.map_err(Into::into)
        }
        None => {
            let row = contribution::ActiveModel {
                user_id: Set(user_id.to_string()),
                supply_id: Set(supply_id),
                amount: Set(amount),
                username: Set(username),
            };
            row.insert(db).await.map_err(Into::into)
        }
    }
}

/// Finds one user's stake in one supply.
pub async fn get_contribution(
    db: &DatabaseConnection,
    user_id: &str,
    supply_id: i64,
) -> Result<Option<contribution::Model>> {
    Contribution::find_by_id((user_id.to_string(), supply_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists every contribution row of one supply - the snapshot the share
/// calculation runs over.
pub async fn get_contributions_for_supply(
    db: &DatabaseConnection,
    supply_id: i64,
) -> Result<Vec<contribution::Model>> {
    Contribution::find()
        .filter(contribution::Column::SupplyId.eq(supply_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists one user's stakes across all supplies, joined with the supply for
/// display, newest supply first.
pub async fn get_contributions_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<(contribution::Model, Option<supply::Model>)>> {
    Contribution::find()
        .filter(contribution::Column::UserId.eq(user_id))
        .find_also_related(Supply)
        .order_by_desc(contribution::Column::SupplyId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists every contribution in the system with its supply, for the admin
/// overview.
pub async fn get_all_contributions(
    db: &DatabaseConnection,
) -> Result<Vec<(contribution::Model, Option<supply::Model>)>> {
    Contribution::find()
        .find_also_related(Supply)
        .order_by_desc(contribution::Column::SupplyId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sums the pool of one supply.
pub async fn pool_total(db: &DatabaseConnection, supply_id: i64) -> Result<f64> {
    let rows = get_contributions_for_supply(db, supply_id).await?;
    Ok(rows.iter().map(|c| c.amount).sum())
}
