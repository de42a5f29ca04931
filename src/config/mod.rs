/// Admin roster loaded from environment variables
pub mod admins;

/// Bot presentation settings loaded from config.toml
pub mod app;

/// Database configuration and connection management
pub mod database;
