//! Contribution request entity - A pending transfer declaration.
//!
//! Users declare the bank and payment identifier they transferred from; an
//! admin later confirms the received amount and folds it into a contribution,
//! or rejects the request. Status is `"pending"`, `"approved"`, or
//! `"rejected"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contribution request database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contribution_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the requester
    pub user_id: String,
    /// Username snapshot taken when the request was filed
    pub username: Option<String>,
    /// Bank the user says they transferred from
    pub bank: String,
    /// Card or phone number the transfer came from
    pub payment_info: String,
    /// Review state: `"pending"`, `"approved"`, or `"rejected"`
    pub status: String,
    /// When the request was filed
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `ContributionRequest` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
