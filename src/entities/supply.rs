//! Supply entity - Represents one pooled purchasing campaign.
//!
//! A supply collects contributions from users and items bought with the pool.
//! Supplies are `active` while collecting and selling, and `completed` once
//! archived; completion is one-way.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supply database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplies")]
pub struct Model {
    /// Unique identifier for the supply
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the supply (e.g., "Supply 2024-09-01")
    pub name: String,
    /// Lifecycle state: `"active"` or `"completed"`
    pub status: String,
}

/// Defines relationships between Supply and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One supply has many items
    #[sea_orm(has_many = "super::item::Entity")]
    Items,
    /// One supply has many contributions
    #[sea_orm(has_many = "super::contribution::Entity")]
    Contributions,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::contribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
