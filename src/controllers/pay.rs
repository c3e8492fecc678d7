// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::dialog::Notices;
use super::{AccountsList, DialogState, DialogTarget, Notice, PayerDirectory, PaymentForm, SharedApi};
use crate::error::DialogError;
use crate::models::{PayableAccount, PaymentRequest};
use crate::money::format_money;
use crate::period::Period;

/// First payment on an unpaid account.
pub struct PayDialog {
    api: SharedApi,
    payers: PayerDirectory,
    target: Option<DialogTarget>,
    form: PaymentForm,
    state: DialogState,
    notices: Notices,
    paying_id: Option<i64>,
}

impl PayDialog {
    pub fn new(api: SharedApi, min_period: Period, today: Period) -> Self {
        Self {
            api,
            payers: PayerDirectory::default(),
            target: None,
            form: PaymentForm::new(min_period, today),
            state: DialogState::Idle,
            notices: Notices::default(),
            paying_id: None,
        }
    }

    /// Resets the form to an empty amount and the clamped current period,
    /// loads payers and preselects the first one.
    pub fn open(&mut self, account: &PayableAccount, today: Period) -> Result<(), DialogError> {
        if self.state.is_busy() {
            return Err(DialogError::Busy);
        }
        if account.payment.id.is_some() {
            let err = DialogError::AlreadyPaid(account.id);
            self.notices.error(err.to_string());
            return Err(err);
        }
        self.target = Some(DialogTarget::from(account));
        self.form.reset(format_money(""), None, today);

        self.state = DialogState::Loading;
        self.payers.load(&*self.api);
        self.state = DialogState::Idle;
        let first = self.payers.first().map(|u| u.id);
        self.form.select_payer(first);
        Ok(())
    }

    pub fn close(&mut self) {
        self.target = None;
        self.state = DialogState::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&DialogTarget> {
        self.target.as_ref()
    }

    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PaymentForm {
        &mut self.form
    }

    pub fn payers(&self) -> &PayerDirectory {
        &self.payers
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Account currently being paid, for disabling its row.
    pub fn paying_id(&self) -> Option<i64> {
        self.paying_id
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    pub fn has_valid_amount(&self) -> bool {
        self.form.amount() > Decimal::ZERO
    }

    pub fn has_valid_payer(&self) -> bool {
        self.payers.resolve(self.form.payer_id()).is_some()
    }

    /// Sends the payment and reloads `list` on success. Validation failures
    /// never reach the server.
    pub fn submit(&mut self, list: &mut AccountsList) -> Result<(), DialogError> {
        if !self.state.can_submit() {
            return Err(DialogError::Busy);
        }
        let Some(target) = self.target.clone() else {
            return Err(DialogError::NotOpen);
        };
        let amount = self.form.amount();
        if amount <= Decimal::ZERO {
            return Err(self.reject(DialogError::NonPositiveAmount));
        }
        let Some(payer_id) = self.payers.resolve(self.form.payer_id()).map(|u| u.id) else {
            return Err(self.reject(DialogError::MissingPayer));
        };
        let req = PaymentRequest {
            amount,
            period: self.form.period(),
            payer_id: Some(payer_id),
        };

        self.state = DialogState::Submitting;
        self.paying_id = Some(target.account_id);
        let res = self.api.pay_account(target.account_id, &req);
        self.paying_id = None;

        match res {
            Ok(_) => {
                info!(account = target.account_id, %amount, period = %req.period, "payment registered");
                self.notices.success("Payment registered");
                self.close();
                list.reload();
                Ok(())
            }
            Err(e) => {
                warn!(account = target.account_id, error = %e, "payment failed");
                self.notices.error(e.message());
                self.state = DialogState::Error(e.to_string());
                Err(e.into())
            }
        }
    }

    fn reject(&mut self, err: DialogError) -> DialogError {
        self.notices.error(err.to_string());
        err
    }
}
