// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::dialog::Notices;
use super::{AccountsList, DialogState, DialogTarget, Notice, PayerDirectory, PaymentForm, SharedApi};
use crate::config::ZeroAmountPolicy;
use crate::error::DialogError;
use crate::models::{PayableAccount, PaymentRequest};
use crate::money::amount_to_field;
use crate::period::Period;

/// Amends an existing payment. Under `ZeroAmountPolicy::AllowRetraction`
/// an amount of exactly zero is valid and is sent without a payer; any
/// positive amount still needs a payer from the directory.
pub struct EditPaymentDialog {
    api: SharedApi,
    policy: ZeroAmountPolicy,
    payers: PayerDirectory,
    target: Option<DialogTarget>,
    form: PaymentForm,
    state: DialogState,
    notices: Notices,
    editing_id: Option<i64>,
}

impl EditPaymentDialog {
    pub fn new(api: SharedApi, min_period: Period, today: Period) -> Self {
        Self::with_policy(api, min_period, today, ZeroAmountPolicy::default())
    }

    pub fn with_policy(
        api: SharedApi,
        min_period: Period,
        today: Period,
        policy: ZeroAmountPolicy,
    ) -> Self {
        Self {
            api,
            policy,
            payers: PayerDirectory::default(),
            target: None,
            form: PaymentForm::new(min_period, today),
            state: DialogState::Idle,
            notices: Notices::default(),
            editing_id: None,
        }
    }

    pub fn policy(&self) -> ZeroAmountPolicy {
        self.policy
    }

    /// Pre-fills the form from the existing payment. Accounts without a
    /// payment id are left alone.
    pub fn open(&mut self, account: &PayableAccount, today: Period) -> Result<(), DialogError> {
        if self.state.is_busy() {
            return Err(DialogError::Busy);
        }
        if account.payment.id.is_none() {
            return Err(DialogError::NoPayment(account.id));
        }
        let payment = &account.payment;
        self.target = Some(DialogTarget::from(account));
        self.form.reset(
            amount_to_field(payment.amount),
            payment.payer_id,
            payment.period().unwrap_or(today),
        );

        self.state = DialogState::Loading;
        self.payers.load(&*self.api);
        self.state = DialogState::Idle;
        if self.form.payer_id().is_none() && payment.amount > Decimal::ZERO {
            let first = self.payers.first().map(|u| u.id);
            self.form.select_payer(first);
        }
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

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    pub fn is_zero_amount(&self) -> bool {
        self.form.amount().is_zero()
    }

    pub fn has_valid_amount(&self) -> bool {
        let amount = self.form.amount();
        match self.policy {
            ZeroAmountPolicy::AllowRetraction => amount >= Decimal::ZERO,
            ZeroAmountPolicy::RequirePositive => amount > Decimal::ZERO,
        }
    }

    pub fn has_valid_payer(&self) -> bool {
        if self.is_zero_amount() && self.policy == ZeroAmountPolicy::AllowRetraction {
            return true;
        }
        self.payers.resolve(self.form.payer_id()).is_some()
    }

    pub fn submit(&mut self, list: &mut AccountsList) -> Result<(), DialogError> {
        if !self.state.can_submit() {
            return Err(DialogError::Busy);
        }
        let Some(target) = self.target.clone() else {
            return Err(DialogError::NotOpen);
        };
        let Some(payment_id) = target.payment_id else {
            return Err(DialogError::NoPayment(target.account_id));
        };
        let amount = self.form.amount();
        if amount < Decimal::ZERO {
            return Err(self.reject(DialogError::NegativeAmount));
        }
        if amount.is_zero() && self.policy == ZeroAmountPolicy::RequirePositive {
            return Err(self.reject(DialogError::NonPositiveAmount));
        }
        let payer_id = if amount.is_zero() {
            None
        } else {
            let resolved = self.payers.resolve(self.form.payer_id()).map(|u| u.id);
            if resolved.is_none() {
                return Err(self.reject(DialogError::MissingPayer));
            }
            resolved
        };
        let req = PaymentRequest {
            amount,
            period: self.form.period(),
            payer_id,
        };

        self.state = DialogState::Submitting;
        self.editing_id = Some(target.account_id);
        let res = self
            .api
            .update_payment(target.account_id, payment_id, &req);
        self.editing_id = None;

        match res {
            Ok(()) => {
                info!(account = target.account_id, payment = payment_id, %amount, "payment updated");
                self.notices.success("Payment updated");
                self.close();
                list.reload();
                Ok(())
            }
            Err(e) => {
                warn!(account = target.account_id, payment = payment_id, error = %e, "payment update failed");
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
