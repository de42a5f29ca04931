//! Contribution entity - A user's monetary stake in one supply.
//!
//! The `(user_id, supply_id)` pair is the primary key, so a user holds at
//! most one row per supply; repeated contributions accumulate into `amount`.
//! The username is a denormalized snapshot for display without API lookups.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contribution database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contributions")]
pub struct Model {
    /// Discord user ID of the contributor
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// ID of the supply the stake belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub supply_id: i64,
    /// Accumulated contribution amount in rubles, always >= 0
    pub amount: f64,
    /// Username snapshot taken at the last contribution
    pub username: Option<String>,
}

/// Defines relationships between Contribution and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each contribution belongs to one supply
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
