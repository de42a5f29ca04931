//! Unified error types and result handling.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! [`Error`] enum so that the core, config, and bot layers share one error
//! path.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (missing file, bad value, invalid state change)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// An amount that is non-positive where forbidden, NaN, or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// Supply lookup failed
    #[error("Supply not found: {name}")]
    SupplyNotFound {
        /// Name or id of the supply that was requested
        name: String,
    },

    /// Item lookup failed
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// Id of the item that was requested
        id: i64,
    },

    /// Contribution request lookup failed
    #[error("Contribution request not found: {id}")]
    RequestNotFound {
        /// Id of the request that was requested
        id: i64,
    },

    /// An operation needed an active supply but none exists
    #[error("No active supply")]
    NoActiveSupply,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// String formatting error (from `write!` into reply buffers)
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
