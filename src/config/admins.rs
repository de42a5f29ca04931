//! Administrator roster loaded from environment variables.
//!
//! Admin user IDs come from the `ADMIN_USER_IDS` environment variable as a
//! comma-separated list of Discord user IDs. Admins get access to the supply
//! curation commands and receive contribution request notifications.

use std::collections::HashSet;

/// Parses a comma-separated admin ID list.
///
/// Whitespace around entries is tolerated and empty entries are skipped.
fn parse_admin_ids(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Gets the set of administrator user IDs from the `ADMIN_USER_IDS`
/// environment variable.
///
/// An unset variable yields an empty set (no admins).
#[must_use]
pub fn admin_ids() -> HashSet<String> {
    std::env::var("ADMIN_USER_IDS")
        .map(|raw| parse_admin_ids(&raw))
        .unwrap_or_default()
}

/// Checks whether the given user ID belongs to an administrator.
#[must_use]
pub fn is_admin(user_id: &str) -> bool {
    admin_ids().contains(user_id)
}
