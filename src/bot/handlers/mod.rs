//! Discord interaction handlers.

/// Autocomplete handlers for command parameters
pub mod autocomplete;
