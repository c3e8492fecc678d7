// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::rc::Rc;
use tracing::{info, warn};

use super::SharedApi;
use crate::models::{PayableAccount, PayableAccountsSummary, StatusCounts};
use crate::period::Period;
use crate::summary::{PayerShare, payer_shares, status_counts, total_paid};

/// Owner of the fetched accounts for the active period.
pub struct AccountsList {
    api: SharedApi,
    min_period: Period,
    period: Period,
    items: Vec<PayableAccount>,
    summary: Option<PayableAccountsSummary>,
    loading: bool,
    error: Option<String>,
}

impl AccountsList {
    pub fn new(api: SharedApi, min_period: Period, today: Period) -> Self {
        Self {
            api,
            min_period,
            period: today.clamped(min_period),
            items: Vec::new(),
            summary: None,
            loading: false,
            error: None,
        }
    }

    pub fn api(&self) -> SharedApi {
        Rc::clone(&self.api)
    }

    pub fn items(&self) -> &[PayableAccount] {
        &self.items
    }

    pub fn find(&self, account_id: i64) -> Option<&PayableAccount> {
        self.items.iter().find(|a| a.id == account_id)
    }

    pub fn summary(&self) -> Option<&PayableAccountsSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn min_period(&self) -> Period {
        self.min_period
    }

    pub fn is_min_period(&self) -> bool {
        self.period == self.min_period
    }

    /// Fetches accounts for `period`, or the active period when `None`.
    /// On failure the previous collection stays in place and the message
    /// is kept in `error()`. Returns whether the fetch succeeded.
    pub fn load(&mut self, period: Option<Period>) -> bool {
        let target = period.unwrap_or(self.period);
        self.loading = true;
        self.error = None;
        let ok = match self.api.fetch_accounts(target) {
            Ok(page) => {
                info!(period = %target, count = page.data.len(), "accounts loaded");
                self.items = page.data;
                self.summary = page.summary;
                true
            }
            Err(e) => {
                warn!(period = %target, error = %e, "failed to load accounts");
                self.error = Some(e.to_string());
                false
            }
        };
        self.loading = false;
        ok
    }

    pub fn reload(&mut self) -> bool {
        self.load(None)
    }

    /// Moves the active period to `period`, clamped to the minimum, without
    /// fetching.
    pub fn set_period(&mut self, period: Period) {
        self.period = period.clamped(self.min_period);
    }

    /// Moves one month back without fetching. Refuses to pass the minimum.
    pub fn step_back(&mut self) -> bool {
        if self.is_min_period() {
            return false;
        }
        self.period = self.period.pred().clamped(self.min_period);
        true
    }

    /// Moves one month forward without fetching.
    pub fn step_forward(&mut self) {
        self.period = self.period.succ();
    }

    pub fn prev_month(&mut self) {
        if self.step_back() {
            self.reload();
        }
    }

    pub fn next_month(&mut self) {
        self.step_forward();
        self.reload();
    }

    pub fn total_paid(&self) -> Decimal {
        self.summary
            .as_ref()
            .map(|s| total_paid(&s.paid_by_user))
            .unwrap_or_default()
    }

    pub fn paid_by_user_with_percentage(&self) -> Vec<PayerShare> {
        self.summary
            .as_ref()
            .map(|s| payer_shares(&s.paid_by_user))
            .unwrap_or_default()
    }

    pub fn status_counts(&self) -> StatusCounts {
        status_counts(&self.items)
    }

    /// Optimistic insert of a freshly created account.
    pub fn append(&mut self, account: PayableAccount) {
        self.items.push(account);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
