//! Profit share calculation.
//!
//! A contributor's share of a supply's profit is their fraction of the pool,
//! shifted by the administrator adjustment: an admin gains a flat
//! [`ADMIN_BONUS_POINTS`] on top of their proportional share, funded by an
//! equal per-capita deduction across the non-admin contributors. The
//! adjustment is intentionally not zero-sum; shares across all parties of a
//! supply need not add up to 100.
//!
//! The calculation is pure and display-only: it runs over a snapshot of
//! contribution rows and never touches the ledger.

use crate::{
    entities::{Item, contribution, item},
    errors::Result,
};
use sea_orm::{DatabaseConnection, prelude::*};
use std::collections::HashSet;

/// Flat percentage-point bonus an admin receives on their share, and the
/// total deduction split evenly across non-admin contributors.
pub const ADMIN_BONUS_POINTS: f64 = 20.0;

/// Computes a user's percentage share of a supply's profit.
///
/// `rows` is the full contribution snapshot for one supply; `admin_ids` is
/// the administrator roster. Any user with a row counts as a contributor,
/// including rows with a zero amount.
///
/// The result is always within `[0, 100]`:
/// - empty pool (total 0) yields 0 for every user;
/// - an admin gets `min(raw + 20, 100)` whenever at least one non-admin
///   contributes, regardless of how many;
/// - a non-admin gets `max(raw - 20/N, 0)` whenever any admin holds a row,
///   where `N` is the number of non-admin contributors — the deduction is
///   per capita, not proportional to the contributor's own stake;
/// - with no non-admin contributors, neither adjustment applies.
#[must_use]
pub fn compute_share(
    user_id: &str,
    rows: &[contribution::Model],
    admin_ids: &HashSet<String>,
) -> f64 {
    let total: f64 = rows.iter().map(|c| c.amount).sum();
    if total == 0.0 {
        return 0.0;
    }

    let user_amount = rows
        .iter()
        .find(|c| c.user_id == user_id)
        .map_or(0.0, |c| c.amount);
    let raw_share = user_amount / total * 100.0;

    let non_admin_count = rows
        .iter()
        .filter(|c| !admin_ids.contains(&c.user_id))
        .count();
    let admin_in_pool = rows.iter().any(|c| admin_ids.contains(&c.user_id));

    let share = if admin_ids.contains(user_id) {
        if non_admin_count > 0 {
            raw_share + ADMIN_BONUS_POINTS
        } else {
            raw_share
        }
    } else if admin_in_pool && non_admin_count > 0 {
        // Count is small, precision loss negligible
        #[allow(clippy::cast_precision_loss)]
        let deduction = ADMIN_BONUS_POINTS / non_admin_count as f64;
        raw_share - deduction
    } else {
        raw_share
    };

    share.clamp(0.0, 100.0)
}

/// Computes the monetary payout a share percentage corresponds to.
///
/// Linear in the share; a negative `total_profit` (resale undershooting
/// purchase cost) passes through unclamped.
#[must_use]
pub fn compute_expected_earnings(total_profit: f64, share_percent: f64) -> f64 {
    total_profit * (share_percent / 100.0)
}

/// Computes the aggregate profit of a supply over ALL of its items:
/// `sum(sell_price) - sum(price)`.
///
/// Unsold items count too, so this is an optimistic unrealized-profit
/// metric, not a cash-settled one. May be negative.
pub async fn total_profit(db: &DatabaseConnection, supply_id: i64) -> Result<f64> {
    let items = Item::find()
        .filter(item::Column::SupplyId.eq(supply_id))
        .all(db)
        .await?;

    Ok(items.iter().map(|i| i.sell_price - i.price).sum())
}

/// Computes a user's share for one supply from a fresh contribution snapshot.
pub async fn share_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    supply_id: i64,
    admin_ids: &HashSet<String>,
) -> Result<f64> {
    let rows = crate::core::contribution::get_contributions_for_supply(db, supply_id).await?;
    Ok(compute_share(user_id, &rows, admin_ids))
}

/// Computes a user's expected earnings for one supply: the supply's total
/// profit weighted by the user's share.
pub async fn expected_earnings_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    supply_id: i64,
    admin_ids: &HashSet<String>,
) -> Result<f64> {
    let share = share_for_user(db, user_id, supply_id, admin_ids).await?;
    let profit = total_profit(db, supply_id).await?;
    Ok(compute_expected_earnings(profit, share))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn row(user_id: &str, amount: f64) -> contribution::Model {
        contribution::Model {
            user_id: user_id.to_string(),
            supply_id: 1,
            amount,
            username: None,
        }
    }

    fn admins(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_pool_gives_zero_for_everyone() {
        let rows = vec![row("a", 0.0), row("admin", 0.0)];
        let admins = admins(&["admin"]);

        assert_eq!(compute_share("a", &rows, &admins), 0.0);
        assert_eq!(compute_share("admin", &rows, &admins), 0.0);
        assert_eq!(compute_share("stranger", &rows, &admins), 0.0);
        assert_eq!(compute_share("a", &[], &admins), 0.0);
    }

    #[test]
    fn test_proportional_share_without_admin() {
        // Concrete scenario: {userA: 800, userB: 200}, no admin contributed
        let rows = vec![row("userA", 800.0), row("userB", 200.0)];
        let admins = admins(&["admin"]);

        assert_eq!(compute_share("userA", &rows, &admins), 80.0);
        assert_eq!(compute_share("userB", &rows, &admins), 20.0);
    }

    #[test]
    fn test_non_contributor_gets_zero_without_admin() {
        let rows = vec![row("userA", 800.0), row("userB", 200.0)];
        assert_eq!(compute_share("userC", &rows, &admins(&[])), 0.0);
    }

    #[test]
    fn test_admin_zero_amount_row_shifts_shares() {
        // Same pool, plus an admin row of 0: N = 2, deduction = 10 each,
        // admin gets the flat 20. Shares no longer sum to 100.
        let rows = vec![row("userA", 800.0), row("userB", 200.0), row("admin", 0.0)];
        let admins = admins(&["admin"]);

        assert_eq!(compute_share("userA", &rows, &admins), 70.0);
        assert_eq!(compute_share("userB", &rows, &admins), 10.0);
        assert_eq!(compute_share("admin", &rows, &admins), 20.0);
    }

    #[test]
    fn test_admin_bonus_is_flat_and_capped() {
        // Admin already holding 90% raw gets capped at 100
        let rows = vec![row("admin", 900.0), row("userA", 100.0)];
        let admins = admins(&["admin"]);
        assert_eq!(compute_share("admin", &rows, &admins), 100.0);

        // Admin with a tiny stake still gains the full flat bonus
        let rows = vec![row("admin", 1.0), row("userA", 999.0)];
        let raw = 1.0 / 1000.0 * 100.0;
        assert_eq!(compute_share("admin", &rows, &admins), raw + 20.0);
    }

    #[test]
    fn test_admin_without_non_admin_contributors_gets_raw_share() {
        // Only admins in the pool: no bonus, no deduction
        let rows = vec![row("admin", 500.0), row("admin2", 500.0)];
        let admins = admins(&["admin", "admin2"]);

        assert_eq!(compute_share("admin", &rows, &admins), 50.0);
        assert_eq!(compute_share("admin2", &rows, &admins), 50.0);
    }

    #[test]
    fn test_deduction_is_per_capita_not_proportional() {
        // A 1-ruble contributor loses the same points as a 100000-ruble one
        let rows = vec![
            row("small", 1.0),
            row("large", 100_000.0),
            row("admin", 0.0),
        ];
        let admins = admins(&["admin"]);
        let total: f64 = 100_001.0;

        let small = compute_share("small", &rows, &admins);
        let large = compute_share("large", &rows, &admins);

        // raw - 20/2, clamped at 0
        assert_eq!(small, (1.0 / total * 100.0 - 10.0).clamp(0.0, 100.0));
        assert_eq!(small, 0.0);
        assert_eq!(large, 100_000.0 / total * 100.0 - 10.0);
    }

    #[test]
    fn test_total_deduction_equals_bonus_points() {
        // Across N non-admins the deductions sum to exactly 20 points
        // (as long as nobody clamps at 0)
        let rows = vec![
            row("u1", 300.0),
            row("u2", 300.0),
            row("u3", 200.0),
            row("u4", 200.0),
            row("admin", 0.0),
        ];
        let roster = admins(&["admin"]);
        let nobody = admins(&[]);

        let unadjusted: f64 = ["u1", "u2", "u3", "u4"]
            .iter()
            .map(|u| compute_share(u, &rows, &nobody))
            .sum();
        let adjusted: f64 = ["u1", "u2", "u3", "u4"]
            .iter()
            .map(|u| compute_share(u, &rows, &roster))
            .sum();

        assert!((unadjusted - adjusted - ADMIN_BONUS_POINTS).abs() < 1e-9);
    }

    #[test]
    fn test_admin_funded_with_positive_stake() {
        // Admin contributes real money: bonus stacks on the raw share
        let rows = vec![row("admin", 500.0), row("userA", 500.0)];
        let admins = admins(&["admin"]);

        assert_eq!(compute_share("admin", &rows, &admins), 70.0);
        assert_eq!(compute_share("userA", &rows, &admins), 30.0);
    }

    #[test]
    fn test_expected_earnings_linear_in_share() {
        assert_eq!(compute_expected_earnings(1000.0, 25.0), 250.0);
        assert_eq!(compute_expected_earnings(1000.0, 50.0), 500.0);
        assert_eq!(compute_expected_earnings(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_expected_earnings_negative_profit_not_clamped() {
        assert_eq!(compute_expected_earnings(-400.0, 25.0), -100.0);
    }

    #[tokio::test]
    async fn test_total_profit_counts_unsold_items() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;

        create_custom_item(&db, supply.id, "Jacket", 1000.0, 1500.0).await?;
        let unsold = create_custom_item(&db, supply.id, "Sneakers", 2000.0, 2600.0).await?;
        assert!(!unsold.is_sold);

        // Both items count, sold or not
        assert_eq!(total_profit(&db, supply.id).await?, 1100.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_total_profit_may_be_negative() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;

        create_custom_item(&db, supply.id, "Dud", 3000.0, 1000.0).await?;

        assert_eq!(total_profit(&db, supply.id).await?, -2000.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_share_for_user_reads_snapshot() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let admins = admins(&["admin"]);

        create_test_contribution(&db, "userA", supply.id, 800.0).await?;
        create_test_contribution(&db, "userB", supply.id, 200.0).await?;

        assert_eq!(share_for_user(&db, "userA", supply.id, &admins).await?, 80.0);

        // Admin files a zero-amount row; everyone shifts
        create_test_contribution(&db, "admin", supply.id, 0.0).await?;
        assert_eq!(share_for_user(&db, "userA", supply.id, &admins).await?, 70.0);
        assert_eq!(share_for_user(&db, "userB", supply.id, &admins).await?, 10.0);
        assert_eq!(share_for_user(&db, "admin", supply.id, &admins).await?, 20.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_expected_earnings_for_user_weights_profit() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let admins = admins(&[]);

        create_test_contribution(&db, "userA", supply.id, 800.0).await?;
        create_test_contribution(&db, "userB", supply.id, 200.0).await?;
        create_custom_item(&db, supply.id, "Jacket", 1000.0, 2000.0).await?;

        let earnings = expected_earnings_for_user(&db, "userA", supply.id, &admins).await?;
        assert_eq!(earnings, 800.0);
        Ok(())
    }
}
