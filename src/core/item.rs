//! Item business logic - Handles curation of purchased goods.
//!
//! Items are created by admins while filling a supply, move through a
//! free-text pipeline status, and get flagged sold once resale happens.
//! Bulk operations (clear a supply, relabel every item) exist because
//! admins manage whole batches at once.

use crate::{
    entities::{Item, Supply, item},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Optional field changes applied by [`update_item`]. `None` leaves the
/// stored value untouched.
#[derive(Debug, Default, Clone)]
pub struct ItemUpdate {
    /// New title
    pub title: Option<String>,
    /// New purchase price
    pub price: Option<f64>,
    /// New expected resale price
    pub sell_price: Option<f64>,
    /// New description
    pub description: Option<String>,
    /// New photo attachment URL
    pub photo_url: Option<String>,
}

fn validate_price(price: f64) -> Result<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }
    Ok(())
}

/// Creates a new item inside a supply, performing input validation.
///
/// The item starts not-sold with the given pipeline status label.
///
/// # Errors
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - Either price is negative or not finite (NaN, infinity)
/// - The supply does not exist
/// - The database insert operation fails
pub async fn create_item(
    db: &DatabaseConnection,
    supply_id: i64,
    title: String,
    price: f64,
    sell_price: f64,
    description: Option<String>,
    photo_url: Option<String>,
    status: String,
) -> Result<item::Model> {
    if title.trim().is_empty() {
        return Err(Error::Config {
            message: "Item title cannot be empty".to_string(),
        });
    }
    validate_price(price)?;
    validate_price(sell_price)?;

    Supply::find_by_id(supply_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::SupplyNotFound {
            name: supply_id.to_string(),
        })?;

    let item = item::ActiveModel {
        supply_id: Set(supply_id),
        title: Set(title.trim().to_string()),
        price: Set(price),
        sell_price: Set(sell_price),
        description: Set(description),
        photo_url: Set(photo_url),
        is_sold: Set(false),
        status: Set(status),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Finds an item by its unique ID.
pub async fn get_item_by_id(db: &DatabaseConnection, item_id: i64) -> Result<Option<item::Model>> {
    Item::find_by_id(item_id).one(db).await.map_err(Into::into)
}

/// Lists the items of one supply in insertion order.
pub async fn get_items_for_supply(
    db: &DatabaseConnection,
    supply_id: i64,
) -> Result<Vec<item::Model>> {
    Item::find()
        .filter(item::Column::SupplyId.eq(supply_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies the non-`None` fields of an [`ItemUpdate`] to an existing item,
/// validating the changed values.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    update: ItemUpdate,
) -> Result<item::Model> {
    if let Some(ref title) = update.title
        && title.trim().is_empty()
    {
        return Err(Error::Config {
            message: "Item title cannot be empty".to_string(),
        });
    }
    if let Some(price) = update.price {
        validate_price(price)?;
    }
    if let Some(sell_price) = update.sell_price {
        validate_price(sell_price)?;
    }

    let mut item: item::ActiveModel = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?
        .into();

    if let Some(title) = update.title {
        item.title = Set(title.trim().to_string());
    }
    if let Some(price) = update.price {
        item.price = Set(price);
    }
    if let Some(sell_price) = update.sell_price {
        item.sell_price = Set(sell_price);
    }
    if let Some(description) = update.description {
        item.description = Set(Some(description));
    }
    if let Some(photo_url) = update.photo_url {
        item.photo_url = Set(Some(photo_url));
    }

    item.update(db).await.map_err(Into::into)
}

/// Replaces an item's pipeline status label.
pub async fn set_item_status(
    db: &DatabaseConnection,
    item_id: i64,
    status: String,
) -> Result<item::Model> {
    let mut item: item::ActiveModel = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?
        .into();

    item.status = Set(status);
    item.update(db).await.map_err(Into::into)
}

/// Flips an item's sold flag and returns the updated model.
pub async fn toggle_sold(db: &DatabaseConnection, item_id: i64) -> Result<item::Model> {
    let item = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let was_sold = item.is_sold;
    let mut active: item::ActiveModel = item.into();
    active.is_sold = Set(!was_sold);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a single item.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let item = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    item.delete(db).await?;
    Ok(())
}

/// Deletes every item of one supply. Returns the number of rows removed.
pub async fn delete_items_for_supply(db: &DatabaseConnection, supply_id: i64) -> Result<u64> {
    let result = Item::delete_many()
        .filter(item::Column::SupplyId.eq(supply_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Relabels every item of one supply with the given pipeline status.
/// Returns the number of rows touched.
pub async fn set_status_for_supply(
    db: &DatabaseConnection,
    supply_id: i64,
    status: &str,
) -> Result<u64> {
    use sea_orm::sea_query::Expr;

    let result = Item::update_many()
        .col_expr(item::Column::Status, Expr::value(status))
        .filter(item::Column::SupplyId.eq(supply_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_item_validation() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;

        let result = create_item(
            &db,
            supply.id,
            String::new(),
            100.0,
            200.0,
            None,
            None,
            "Purchased".to_string(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_item(
            &db,
            supply.id,
            "Jacket".to_string(),
            -5.0,
            200.0,
            None,
            None,
            "Purchased".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -5.0 }
        ));

        let result = create_item(
            &db,
            supply.id,
            "Jacket".to_string(),
            100.0,
            f64::NAN,
            None,
            None,
            "Purchased".to_string(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_requires_supply() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_item(
            &db,
            999,
            "Jacket".to_string(),
            100.0,
            200.0,
            None,
            None,
            "Purchased".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::SupplyNotFound { name: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_defaults() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;

        let item = create_custom_item(&db, supply.id, "Jacket", 1000.0, 1500.0).await?;
        assert_eq!(item.title, "Jacket");
        assert_eq!(item.price, 1000.0);
        assert_eq!(item.sell_price, 1500.0);
        assert!(!item.is_sold);
        assert_eq!(item.status, "Purchased");
        assert!(item.description.is_none());
        assert!(item.photo_url.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_partial_fields() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let item = create_custom_item(&db, supply.id, "Jacket", 1000.0, 1500.0).await?;

        let updated = update_item(
            &db,
            item.id,
            ItemUpdate {
                sell_price: Some(1800.0),
                description: Some("Winter model".to_string()),
                ..Default::default()
            },
        )
        .await?;

        // Changed fields
        assert_eq!(updated.sell_price, 1800.0);
        assert_eq!(updated.description.as_deref(), Some("Winter model"));
        // Untouched fields
        assert_eq!(updated.title, "Jacket");
        assert_eq!(updated.price, 1000.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_rejects_bad_values() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let item = create_custom_item(&db, supply.id, "Jacket", 1000.0, 1500.0).await?;

        let result = update_item(
            &db,
            item.id,
            ItemUpdate {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = update_item(
            &db,
            item.id,
            ItemUpdate {
                price: Some(f64::INFINITY),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_sold_round_trip() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let item = create_test_item(&db, supply.id, "Jacket").await?;

        let sold = toggle_sold(&db, item.id).await?;
        assert!(sold.is_sold);

        let unsold = toggle_sold(&db, item.id).await?;
        assert!(!unsold.is_sold);

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_sold_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = toggle_sold(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ItemNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_bulk_delete_and_relabel() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let other = crate::core::supply::create_supply(&db, "Other".to_string()).await?;

        create_test_item(&db, supply.id, "Jacket").await?;
        create_test_item(&db, supply.id, "Sneakers").await?;
        create_test_item(&db, other.id, "Scarf").await?;

        let relabeled = set_status_for_supply(&db, supply.id, "In stock").await?;
        assert_eq!(relabeled, 2);
        for item in get_items_for_supply(&db, supply.id).await? {
            assert_eq!(item.status, "In stock");
        }
        // Other supply untouched
        assert_eq!(
            get_items_for_supply(&db, other.id).await?[0].status,
            "Purchased"
        );

        let removed = delete_items_for_supply(&db, supply.id).await?;
        assert_eq!(removed, 2);
        assert!(get_items_for_supply(&db, supply.id).await?.is_empty());
        assert_eq!(get_items_for_supply(&db, other.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let item = create_test_item(&db, supply.id, "Jacket").await?;

        delete_item(&db, item.id).await?;
        assert!(get_item_by_id(&db, item.id).await?.is_none());

        let result = delete_item(&db, item.id).await;
        assert!(matches!(result.unwrap_err(), Error::ItemNotFound { .. }));

        Ok(())
    }
}
