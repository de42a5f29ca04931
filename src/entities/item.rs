//! Item entity - Represents a single purchased good inside a supply.
//!
//! Each item tracks its purchase price, expected resale price, a free-text
//! pipeline status label, and whether the resale has actually happened
//! (`is_sold`). The photo is stored as a Discord attachment URL.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the supply this item belongs to
    pub supply_id: i64,
    /// Human-readable item title
    pub title: String,
    /// Purchase price in rubles
    pub price: f64,
    /// Expected resale price in rubles
    pub sell_price: f64,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional photo attachment URL
    pub photo_url: Option<String>,
    /// Whether the item has actually been resold
    pub is_sold: bool,
    /// Free-text pipeline status label (e.g., "Purchased", "In stock")
    pub status: String,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one supply
    #[sea_orm(
        belongs_to = "super::supply::Entity",
        from = "Column::SupplyId",
        to = "super::supply::Column::Id"
    )]
    Supply,
}

impl Related<super::supply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supply.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
