// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use payables::api::PayablesApi;
use payables::controllers::SharedApi;
use payables::error::ApiError;
use payables::models::{
    AccountsPage, PaidByUser, PayableAccount, PayableAccountsSummary, PayableStatus, Payment,
    PaymentRequest, User,
};
use payables::period::Period;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory server: recomputes status and summary the way the backend
/// does, and records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub accounts: RefCell<Vec<PayableAccount>>,
    pub users: RefCell<Vec<User>>,
    pub calls: RefCell<Vec<String>>,
    pub fail_with: RefCell<Option<String>>,
    pub fail_users: RefCell<bool>,
    next_id: RefCell<i64>,
}

impl FakeApi {
    pub fn new() -> Rc<Self> {
        let api = Self::default();
        *api.next_id.borrow_mut() = 100;
        api.users.borrow_mut().extend([
            User {
                id: 1,
                name: "Ana".into(),
                email: "ana@example.com".into(),
            },
            User {
                id: 2,
                name: "Bruno".into(),
                email: "bruno@example.com".into(),
            },
        ]);
        Rc::new(api)
    }

    pub fn shared(self: &Rc<Self>) -> SharedApi {
        self.clone()
    }

    pub fn add_unpaid(&self, id: i64, name: &str) -> PayableAccount {
        let acc = unpaid(id, name);
        self.accounts.borrow_mut().push(acc.clone());
        acc
    }

    pub fn add_paid(&self, id: i64, name: &str, amount: Decimal, payer: i64) -> PayableAccount {
        let payer_name = self.user_name(payer);
        let acc = PayableAccount {
            id,
            name: name.into(),
            status: PayableStatus::Paid,
            payment: Payment {
                id: Some(id * 10),
                payer_id: Some(payer),
                payer: payer_name,
                amount,
                period: "01-10-2025".into(),
            },
        };
        self.accounts.borrow_mut().push(acc.clone());
        acc
    }

    pub fn fail_next(&self, msg: &str) {
        *self.fail_with.borrow_mut() = Some(msg.to_string());
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn account(&self, id: i64) -> PayableAccount {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .expect("account exists")
    }

    fn user_name(&self, id: i64) -> Option<String> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.clone())
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match self.fail_with.borrow_mut().take() {
            Some(msg) => Err(ApiError::new(msg)),
            None => Ok(()),
        }
    }

    fn apply(&self, account_id: i64, payment_id: i64, req: &PaymentRequest) -> PayableAccount {
        let payer = req.payer_id.and_then(|id| self.user_name(id));
        let mut accounts = self.accounts.borrow_mut();
        let acc = accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .expect("account exists");
        acc.payment = Payment {
            id: Some(payment_id),
            payer_id: req.payer_id,
            payer,
            amount: req.amount,
            period: req.period.to_string(),
        };
        acc.status = acc.effective_status();
        acc.clone()
    }
}

pub fn unpaid(id: i64, name: &str) -> PayableAccount {
    PayableAccount {
        id,
        name: name.into(),
        status: PayableStatus::Unpaid,
        payment: Payment {
            id: None,
            payer_id: None,
            payer: None,
            amount: Decimal::ZERO,
            period: String::new(),
        },
    }
}

impl PayablesApi for FakeApi {
    fn fetch_accounts(&self, period: Period) -> Result<AccountsPage, ApiError> {
        self.calls.borrow_mut().push(format!("fetch {period}"));
        self.check_failure()?;
        let data = self.accounts.borrow().clone();
        let mut paid_by_user: Vec<PaidByUser> = Vec::new();
        for a in data.iter().filter(|a| a.payment.amount > Decimal::ZERO) {
            let name = a.payment.payer.clone().unwrap_or_default();
            match paid_by_user.iter_mut().find(|p| p.user_id == a.payment.payer_id) {
                Some(p) => p.total_paid += a.payment.amount,
                None => paid_by_user.push(PaidByUser {
                    user_id: a.payment.payer_id,
                    name,
                    total_paid: a.payment.amount,
                }),
            }
        }
        let month_total = paid_by_user.iter().map(|p| p.total_paid).sum();
        Ok(AccountsPage {
            data,
            summary: Some(PayableAccountsSummary {
                period: period.to_string(),
                month_total: Some(month_total),
                paid_by_user,
            }),
        })
    }

    fn create_account(&self, name: &str) -> Result<PayableAccount, ApiError> {
        self.calls.borrow_mut().push(format!("create {name}"));
        self.check_failure()?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        Ok(self.add_unpaid(id, name))
    }

    fn pay_account(
        &self,
        account_id: i64,
        req: &PaymentRequest,
    ) -> Result<PayableAccount, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("pay {account_id} {} {}", req.amount, req.period));
        self.check_failure()?;
        Ok(self.apply(account_id, account_id * 10, req))
    }

    fn update_payment(
        &self,
        account_id: i64,
        payment_id: i64,
        req: &PaymentRequest,
    ) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("update {account_id}/{payment_id} {}", req.amount));
        self.check_failure()?;
        self.apply(account_id, payment_id, req);
        Ok(())
    }

    fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.calls.borrow_mut().push("users".into());
        if *self.fail_users.borrow() {
            return Err(ApiError::new("Server Error"));
        }
        Ok(self.users.borrow().clone())
    }
}

pub fn period(s: &str) -> Period {
    s.parse().expect("valid period")
}
