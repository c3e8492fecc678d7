// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Message used when the server could not be reached or gave nothing usable.
pub const CONNECTION_ERROR: &str = "Connection error.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Invalid period '{0}', expected DD-MM-YYYY")]
    Malformed(String),
    #[error("Invalid month number {0}")]
    Month(u32),
}

/// Failure reported by the remote collaborator. Carries a single
/// human-readable message which callers surface verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ApiError(pub String);

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub fn connection() -> Self {
        Self(CONNECTION_ERROR.to_string())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        tracing::warn!(error = %e, "transport failure");
        if e.is_decode() {
            return Self::new("Unexpected response from server");
        }
        match e.status().and_then(|s| s.canonical_reason()) {
            Some(reason) => Self::new(reason),
            None => Self::connection(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("No account selected")]
    NotOpen,
    #[error("A request is already in progress")]
    Busy,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Please select a payer")]
    MissingPayer,
    #[error("Account {0} has no payment to edit")]
    NoPayment(i64),
    #[error("Account {0} already has a payment")]
    AlreadyPaid(i64),
    #[error(transparent)]
    Period(#[from] PeriodError),
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl DialogError {
    /// Validation failures are rejected before any remote call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Remote(_) | Self::Busy | Self::NotOpen)
    }
}
