// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayableStatus {
    Unpaid,
    Paid,
    PaidZero,
}

impl PayableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::PaidZero => "paid_zero",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub payer_id: Option<i64>,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    // Raw wire text; unpaid accounts may carry an empty period.
    #[serde(default)]
    pub period: String,
}

impl Payment {
    pub fn period(&self) -> Option<Period> {
        self.period.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableAccount {
    pub id: i64,
    pub name: String,
    pub status: PayableStatus,
    pub payment: Payment,
}

impl PayableAccount {
    /// Status implied by the embedded payment: no payment id is always
    /// unpaid, and an exact zero amount is `paid_zero`.
    pub fn effective_status(&self) -> PayableStatus {
        match self.payment.id {
            None => PayableStatus::Unpaid,
            Some(_) if self.payment.amount.is_zero() => PayableStatus::PaidZero,
            Some(_) => PayableStatus::Paid,
        }
    }

    pub fn payment_id(&self) -> Option<i64> {
        self.payment.id
    }
}

/// Payer directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidByUser {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_paid: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableAccountsSummary {
    #[serde(default)]
    pub period: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub month_total: Option<Decimal>,
    #[serde(default)]
    pub paid_by_user: Vec<PaidByUser>,
}

/// Response of the account listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsPage {
    pub data: Vec<PayableAccount>,
    #[serde(default)]
    pub summary: Option<PayableAccountsSummary>,
}

/// Body of both the pay and the update-payment requests. `payer_id` is
/// sent as `null` for zero-amount retractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub period: Period,
    pub payer_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub paid: usize,
    pub unpaid: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.paid + self.unpaid
    }
}
