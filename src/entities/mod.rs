//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod contribution;
pub mod contribution_request;
pub mod item;
pub mod supply;

// Re-export specific types to avoid conflicts
pub use contribution::{
    Column as ContributionColumn, Entity as Contribution, Model as ContributionModel,
};
pub use contribution_request::{
    Column as ContributionRequestColumn, Entity as ContributionRequest,
    Model as ContributionRequestModel,
};
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use supply::{Column as SupplyColumn, Entity as Supply, Model as SupplyModel};
