//! Contribution request workflow.
//!
//! Users cannot credit themselves: they file a request naming the bank and
//! payment identifier they transferred from, and an admin who sees the money
//! arrive confirms the amount. Approval folds the confirmed amount into the
//! contribution for the newest active supply; rejection just closes the
//! request.

use crate::{
    entities::{ContributionRequest, Supply, contribution, contribution_request, supply},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Review state of a freshly filed request.
pub const STATUS_PENDING: &str = "pending";
/// Review state after an admin confirmed the amount.
pub const STATUS_APPROVED: &str = "approved";
/// Review state after an admin turned the request down.
pub const STATUS_REJECTED: &str = "rejected";

/// Files a new pending request.
///
/// # Errors
/// Returns an error if the bank or payment info is empty, or the insert
/// fails.
pub async fn create_request(
    db: &DatabaseConnection,
    user_id: &str,
    username: Option<String>,
    bank: String,
    payment_info: String,
) -> Result<contribution_request::Model> {
    if bank.trim().is_empty() {
        return Err(Error::Config {
            message: "Bank cannot be empty".to_string(),
        });
    }
    if payment_info.trim().is_empty() {
        return Err(Error::Config {
            message: "Payment info cannot be empty".to_string(),
        });
    }

    let request = contribution_request::ActiveModel {
        user_id: Set(user_id.to_string()),
        username: Set(username),
        bank: Set(bank.trim().to_string()),
        payment_info: Set(payment_info.trim().to_string()),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    request.insert(db).await.map_err(Into::into)
}

/// Lists pending requests, oldest first so admins review in arrival order.
pub async fn get_pending_requests(
    db: &DatabaseConnection,
) -> Result<Vec<contribution_request::Model>> {
    ContributionRequest::find()
        .filter(contribution_request::Column::Status.eq(STATUS_PENDING))
        .order_by_asc(contribution_request::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a request by its unique ID.
pub async fn get_request_by_id(
    db: &DatabaseConnection,
    request_id: i64,
) -> Result<Option<contribution_request::Model>> {
    ContributionRequest::find_by_id(request_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Approves a pending request with the amount the admin actually received,
/// folding it into the requester's contribution for the newest active
/// supply.
///
/// Runs inside one database transaction: either the contribution grows and
/// the request closes, or neither happens.
///
/// # Errors
/// Returns an error if:
/// - The request does not exist or is not pending
/// - The amount is not finite or not strictly positive
/// - No supply is active
pub async fn approve_request(
    db: &DatabaseConnection,
    request_id: i64,
    amount: f64,
) -> Result<(contribution_request::Model, contribution::Model)> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let txn = db.begin().await?;

    let request = ContributionRequest::find_by_id(request_id)
        .one(&txn)
        .await?
        .ok_or(Error::RequestNotFound { id: request_id })?;

    if request.status != STATUS_PENDING {
        return Err(Error::Config {
            message: format!("Request #{request_id} is not pending"),
        });
    }

    let active_supply = Supply::find()
        .filter(supply::Column::Status.eq(crate::core::supply::STATUS_ACTIVE))
        .order_by_desc(supply::Column::Id)
        .one(&txn)
        .await?
        .ok_or(Error::NoActiveSupply)?;

    let contribution = crate::core::contribution::add_contribution(
        &txn,
        &request.user_id,
        request.username.clone(),
        active_supply.id,
        amount,
    )
    .await?;

    let mut active: contribution_request::ActiveModel = request.into();
    active.status = Set(STATUS_APPROVED.to_string());
    let request = active.update(&txn).await?;

    txn.commit().await?;
    Ok((request, contribution))
}

/// Rejects a pending request.
pub async fn reject_request(
    db: &DatabaseConnection,
    request_id: i64,
) -> Result<contribution_request::Model> {
    let request = ContributionRequest::find_by_id(request_id)
        .one(db)
        .await?
        .ok_or(Error::RequestNotFound { id: request_id })?;

    if request.status != STATUS_PENDING {
        return Err(Error::Config {
            message: format!("Request #{request_id} is not pending"),
        });
    }

    let mut active: contribution_request::ActiveModel = request.into();
    active.status = Set(STATUS_REJECTED.to_string());
    active.update(db).await.map_err(Into::into)
}
