// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::PeriodError;
use crate::models::PayableAccount;
use crate::money::{format_money, parse_money};
use crate::period::{MonthOption, Period, month_options_for_year, year_options};

/// Lifecycle of a dialog. `submit` is only legal from `Idle` or `Error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Idle,
    Loading,
    Submitting,
    Error(String),
}

impl DialogState {
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Error(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-facing message; the view drains these after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub(crate) struct Notices(Vec<Notice>);

impl Notices {
    pub(crate) fn success(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    pub(crate) fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.0)
    }
}

/// The account a dialog works on, by id. The list controller keeps the
/// only authoritative copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTarget {
    pub account_id: i64,
    pub payment_id: Option<i64>,
    pub name: String,
}

impl From<&PayableAccount> for DialogTarget {
    fn from(a: &PayableAccount) -> Self {
        Self {
            account_id: a.id,
            payment_id: a.payment.id,
            name: a.name.clone(),
        }
    }
}

/// Amount, payer and period fields shared by the pay and edit dialogs.
/// The year/month pickers and the period never drift apart: both are
/// derived from the same `Period`, clamped to the minimum.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    amount_text: String,
    payer_id: Option<i64>,
    period: Period,
    min_period: Period,
}

impl PaymentForm {
    pub fn new(min_period: Period, period: Period) -> Self {
        Self {
            amount_text: format_money(""),
            payer_id: None,
            period: period.clamped(min_period),
            min_period,
        }
    }

    /// Re-encodes the whole field from raw keystrokes.
    pub fn input_amount(&mut self, raw: &str) {
        self.amount_text = format_money(raw);
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn amount(&self) -> Decimal {
        parse_money(&self.amount_text)
    }

    pub fn payer_id(&self) -> Option<i64> {
        self.payer_id
    }

    pub fn select_payer(&mut self, payer_id: Option<i64>) {
        self.payer_id = payer_id;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period.clamped(self.min_period);
    }

    pub fn select_year(&mut self, year: i32) {
        self.period = self.period.with_year(year, self.min_period);
    }

    pub fn select_month(&mut self, month: u32) -> Result<(), PeriodError> {
        self.period = self.period.with_month(month, self.min_period)?;
        Ok(())
    }

    pub fn month_options(&self) -> &'static [MonthOption] {
        month_options_for_year(self.period.year(), self.min_period)
    }

    pub fn year_options(&self, current_year: i32) -> Vec<i32> {
        year_options(self.min_period, current_year)
    }

    pub(crate) fn reset(&mut self, amount_text: String, payer_id: Option<i64>, period: Period) {
        self.amount_text = amount_text;
        self.payer_id = payer_id;
        self.set_period(period);
    }
}
