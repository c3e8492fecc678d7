// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{PaidByUser, PayableAccount, PayableStatus, StatusCounts};

/// A payer's paid total and its share of the period total, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayerShare {
    pub user_id: Option<i64>,
    pub name: String,
    pub total_paid: Decimal,
    pub percentage: Decimal,
}

pub fn total_paid(paid_by_user: &[PaidByUser]) -> Decimal {
    paid_by_user.iter().map(|p| p.total_paid).sum()
}

/// Shares of the period total. All shares are zero when nothing was paid.
pub fn payer_shares(paid_by_user: &[PaidByUser]) -> Vec<PayerShare> {
    let total = total_paid(paid_by_user);
    paid_by_user
        .iter()
        .map(|p| PayerShare {
            user_id: p.user_id,
            name: p.name.clone(),
            total_paid: p.total_paid,
            percentage: if total > Decimal::ZERO {
                p.total_paid / total * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect()
}

pub fn status_counts(items: &[PayableAccount]) -> StatusCounts {
    items
        .iter()
        .fold(StatusCounts::default(), |mut acc, a| {
            match a.effective_status() {
                PayableStatus::Unpaid => acc.unpaid += 1,
                PayableStatus::Paid | PayableStatus::PaidZero => acc.paid += 1,
            }
            acc
        })
}
