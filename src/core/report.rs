//! Supply report assembly and display formatting.
//!
//! This module builds the structured per-supply report (pool, profit, and
//! every contributor's share and expected earnings) and hosts the small
//! formatting helpers the bot layer prints. Everything here is
//! framework-agnostic; the bot layer turns reports into embeds.

use crate::{
    core::{contribution, item, share},
    entities::supply,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

/// One contributor's line in a supply report.
#[derive(Debug, Clone)]
pub struct ShareEntry {
    /// Discord user ID of the contributor
    pub user_id: String,
    /// Username snapshot from the contribution row
    pub username: Option<String>,
    /// Accumulated stake in rubles
    pub amount: f64,
    /// Share of the supply's profit, percent in [0, 100]
    pub share_percent: f64,
    /// Monetary payout the share corresponds to; may be negative
    pub expected_earnings: f64,
}

/// A complete snapshot report for one supply.
#[derive(Debug, Clone)]
pub struct SupplyReport {
    /// The supply being reported on
    pub supply: supply::Model,
    /// Sum of all contributions
    pub pool_total: f64,
    /// Optimistic profit over all items, sold or not
    pub total_profit: f64,
    /// Number of items in the supply
    pub items_total: usize,
    /// Number of items already resold
    pub items_sold: usize,
    /// Per-contributor share lines, largest stake first
    pub entries: Vec<ShareEntry>,
}

/// Assembles a [`SupplyReport`] from a fresh snapshot of contributions and
/// items.
pub async fn generate_supply_report(
    db: &DatabaseConnection,
    supply_id: i64,
    admin_ids: &HashSet<String>,
) -> Result<SupplyReport> {
    let supply = crate::core::supply::get_supply_by_id(db, supply_id)
        .await?
        .ok_or_else(|| Error::SupplyNotFound {
            name: supply_id.to_string(),
        })?;

    let rows = contribution::get_contributions_for_supply(db, supply_id).await?;
    let items = item::get_items_for_supply(db, supply_id).await?;

    let pool_total: f64 = rows.iter().map(|c| c.amount).sum();
    let total_profit: f64 = items.iter().map(|i| i.sell_price - i.price).sum();
    let items_sold = items.iter().filter(|i| i.is_sold).count();

    let mut entries: Vec<ShareEntry> = rows
        .iter()
        .map(|row| {
            let share_percent = share::compute_share(&row.user_id, &rows, admin_ids);
            ShareEntry {
                user_id: row.user_id.clone(),
                username: row.username.clone(),
                amount: row.amount,
                share_percent,
                expected_earnings: share::compute_expected_earnings(total_profit, share_percent),
            }
        })
        .collect();
    entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    Ok(SupplyReport {
        supply,
        pool_total,
        total_profit,
        items_total: items.len(),
        items_sold,
        entries,
    })
}

/// Formats a ruble amount like `"1500.00₽"` (sign kept for negatives).
#[must_use]
pub fn format_rubles(amount: f64) -> String {
    format!("{amount:.2}₽")
}

/// Formats a share percentage like `"12.5%"`.
#[must_use]
pub fn format_share(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Marker shown next to an item: sold or still in the pipeline.
#[must_use]
pub const fn sold_marker(is_sold: bool) -> &'static str {
    if is_sold { "✅" } else { "🔄" }
}

/// Rough sale-time estimate shown on item cards, bracketed by resale price:
/// cheap goods move within a week, expensive ones can sit for months.
#[must_use]
pub fn sale_time_estimate(sell_price: f64) -> &'static str {
    if sell_price < 5000.0 {
        "Less than a week"
    } else if sell_price < 10_000.0 {
        "5-10 days"
    } else if sell_price < 15_000.0 {
        "10-20 days"
    } else {
        "3 weeks - 2 months"
    }
}

/// Rough delivery estimate shown on item cards.
pub const ARRIVAL_ESTIMATE: &str = "20-30 days";

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_format_rubles() {
        assert_eq!(format_rubles(1500.0), "1500.00₽");
        assert_eq!(format_rubles(0.5), "0.50₽");
        assert_eq!(format_rubles(-200.0), "-200.00₽");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(80.0), "80.0%");
        assert_eq!(format_share(12.34), "12.3%");
    }

    #[test]
    fn test_sold_marker() {
        assert_eq!(sold_marker(true), "✅");
        assert_eq!(sold_marker(false), "🔄");
    }

    #[test]
    fn test_sale_time_estimate_brackets() {
        assert_eq!(sale_time_estimate(4999.0), "Less than a week");
        assert_eq!(sale_time_estimate(5000.0), "5-10 days");
        assert_eq!(sale_time_estimate(9999.0), "5-10 days");
        assert_eq!(sale_time_estimate(10_000.0), "10-20 days");
        assert_eq!(sale_time_estimate(15_000.0), "3 weeks - 2 months");
    }

    #[tokio::test]
    async fn test_generate_supply_report_integration() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let admins: HashSet<String> = std::iter::once("admin".to_string()).collect();

        create_test_contribution(&db, "userA", supply.id, 800.0).await?;
        create_test_contribution(&db, "userB", supply.id, 200.0).await?;
        create_test_contribution(&db, "admin", supply.id, 0.0).await?;

        create_custom_item(&db, supply.id, "Jacket", 1000.0, 1600.0).await?;
        let sneakers = create_custom_item(&db, supply.id, "Sneakers", 2000.0, 2400.0).await?;
        crate::core::item::toggle_sold(&db, sneakers.id).await?;

        let report = generate_supply_report(&db, supply.id, &admins).await?;

        assert_eq!(report.supply.id, supply.id);
        assert_eq!(report.pool_total, 1000.0);
        assert_eq!(report.total_profit, 1000.0);
        assert_eq!(report.items_total, 2);
        assert_eq!(report.items_sold, 1);

        // Largest stake first
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[0].user_id, "userA");
        assert_eq!(report.entries[0].share_percent, 70.0);
        assert_eq!(report.entries[0].expected_earnings, 700.0);
        assert_eq!(report.entries[1].user_id, "userB");
        assert_eq!(report.entries[1].share_percent, 10.0);
        assert_eq!(report.entries[2].user_id, "admin");
        assert_eq!(report.entries[2].share_percent, 20.0);
        assert_eq!(report.entries[2].expected_earnings, 200.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_supply_report_empty_supply() -> Result<()> {
        let (db, supply) = setup_with_supply().await?;
        let admins = HashSet::new();

        let report = generate_supply_report(&db, supply.id, &admins).await?;
        assert_eq!(report.pool_total, 0.0);
        assert_eq!(report.total_profit, 0.0);
        assert!(report.entries.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_supply_report_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = generate_supply_report(&db, 999, &HashSet::new()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::SupplyNotFound { name: _ }
        ));

        Ok(())
    }
}
