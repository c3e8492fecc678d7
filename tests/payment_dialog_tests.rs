// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeApi, period};
use payables::config::ZeroAmountPolicy;
use payables::controllers::{AccountsList, DialogState, EditPaymentDialog, NoticeLevel, PayDialog};
use payables::error::{ApiError, DialogError};
use payables::models::PayableStatus;
use payables::period::MIN_PERIOD;
use rust_decimal::Decimal;
use std::rc::Rc;

fn setup() -> (Rc<FakeApi>, AccountsList) {
    let api = FakeApi::new();
    api.add_unpaid(1, "Luz");
    api.add_paid(2, "Água", Decimal::new(15050, 2), 1);
    let mut list = AccountsList::new(api.shared(), MIN_PERIOD, period("01-02-2026"));
    assert!(list.reload());
    (api, list)
}

#[test]
fn pay_then_reload_records_amount_and_payer() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    let account = list.find(1).cloned().unwrap();

    dialog.open(&account, today).unwrap();
    assert!(dialog.is_open());
    assert_eq!(dialog.form().amount_text(), "R$ ");
    assert_eq!(dialog.form().payer_id(), Some(1));
    assert_eq!(dialog.form().period().to_string(), "01-02-2026");

    dialog.form_mut().input_amount("150000");
    dialog.form_mut().select_payer(Some(2));
    assert!(dialog.has_valid_amount());
    assert!(dialog.has_valid_payer());
    dialog.submit(&mut list).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(dialog.paying_id(), None);
    assert_eq!(dialog.state(), &DialogState::Idle);
    assert_eq!(api.calls.borrow().last().unwrap(), "fetch 01-02-2026");

    let paid = list.find(1).unwrap();
    assert_eq!(paid.payment.amount, Decimal::new(1500, 0));
    assert_eq!(paid.payment.payer_id, Some(2));
    assert_eq!(paid.payment.period, "01-02-2026");
    assert_eq!(paid.effective_status(), PayableStatus::Paid);

    let notices = dialog.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[test]
fn pay_defaults_to_clamped_period() {
    let (_api, list) = setup();
    let today = period("01-03-2025");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(1).unwrap(), today).unwrap();
    assert_eq!(dialog.form().period(), MIN_PERIOD);
}

#[test]
fn pay_rejects_non_positive_amount_before_calling_server() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(1).unwrap(), today).unwrap();

    dialog.form_mut().input_amount("000");
    assert_eq!(dialog.submit(&mut list), Err(DialogError::NonPositiveAmount));
    assert_eq!(api.call_count("pay"), 0);
    assert!(dialog.is_open());
}

#[test]
fn pay_requires_a_payer_from_the_directory() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    let account = list.find(1).cloned().unwrap();
    dialog.open(&account, today).unwrap();
    dialog.form_mut().input_amount("1000");
    dialog.form_mut().select_payer(Some(99));

    assert_eq!(dialog.submit(&mut list), Err(DialogError::MissingPayer));
    assert_eq!(api.call_count("pay"), 0);
    let notices = dialog.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Please select a payer");
}

#[test]
fn pay_without_payer_directory_cannot_submit() {
    let (api, mut list) = setup();
    *api.fail_users.borrow_mut() = true;
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    let account = list.find(1).cloned().unwrap();
    dialog.open(&account, today).unwrap();

    assert!(dialog.payers().users().is_empty());
    assert_eq!(dialog.form().payer_id(), None);
    dialog.form_mut().input_amount("1000");
    assert_eq!(dialog.submit(&mut list), Err(DialogError::MissingPayer));
}

#[test]
fn pay_refuses_accounts_with_a_payment() {
    let (_api, list) = setup();
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    assert_eq!(
        dialog.open(list.find(2).unwrap(), today),
        Err(DialogError::AlreadyPaid(2))
    );
    assert!(!dialog.is_open());
}

#[test]
fn pay_failure_keeps_dialog_open_for_retry() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = PayDialog::new(list.api(), MIN_PERIOD, today);
    let account = list.find(1).cloned().unwrap();
    dialog.open(&account, today).unwrap();
    dialog.form_mut().input_amount("2599");
    api.fail_next("Period is closed");

    assert_eq!(
        dialog.submit(&mut list),
        Err(DialogError::Remote(ApiError::new("Period is closed")))
    );
    assert!(dialog.is_open());
    assert_eq!(dialog.paying_id(), None);
    assert_eq!(dialog.state(), &DialogState::Error("Period is closed".into()));
    assert_eq!(dialog.take_notices()[0].message, "Period is closed");
    assert_eq!(list.find(1).unwrap().effective_status(), PayableStatus::Unpaid);

    dialog.submit(&mut list).unwrap();
    assert_eq!(list.find(1).unwrap().payment.amount, Decimal::new(2599, 2));
}

#[test]
fn submit_without_open_dialog() {
    let (_api, mut list) = setup();
    let mut pay = PayDialog::new(list.api(), MIN_PERIOD, MIN_PERIOD);
    assert_eq!(pay.submit(&mut list), Err(DialogError::NotOpen));
    let mut edit = EditPaymentDialog::new(list.api(), MIN_PERIOD, MIN_PERIOD);
    assert_eq!(edit.submit(&mut list), Err(DialogError::NotOpen));
}

#[test]
fn edit_ignores_accounts_without_payment() {
    let (api, list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    assert_eq!(
        dialog.open(list.find(1).unwrap(), today),
        Err(DialogError::NoPayment(1))
    );
    assert!(!dialog.is_open());
    assert_eq!(api.call_count("users"), 0);
}

#[test]
fn edit_prefills_from_existing_payment() {
    let (_api, list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();

    assert_eq!(dialog.form().amount_text(), "R$ 150,50");
    assert_eq!(dialog.form().payer_id(), Some(1));
    assert_eq!(dialog.form().period(), period("01-10-2025"));
    assert_eq!(dialog.target().unwrap().payment_id, Some(20));
}

#[test]
fn edit_to_zero_retracts_without_payer() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();

    dialog.form_mut().input_amount("");
    dialog.form_mut().select_payer(None);
    assert!(dialog.is_zero_amount());
    assert!(dialog.has_valid_amount());
    assert!(dialog.has_valid_payer());
    dialog.submit(&mut list).unwrap();

    assert_eq!(api.call_count("update 2/20"), 1);
    let account = list.find(2).unwrap();
    assert_eq!(account.payment.id, Some(20));
    assert_eq!(account.payment.payer_id, None);
    assert!(account.payment.amount.is_zero());
    assert_eq!(account.status, PayableStatus::PaidZero);
    assert_eq!(account.effective_status(), PayableStatus::PaidZero);
    assert_eq!(dialog.take_notices()[0].message, "Payment updated");
}

#[test]
fn edit_zero_drops_a_selected_payer() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();
    dialog.form_mut().input_amount("0");
    assert_eq!(dialog.form().payer_id(), Some(1));

    dialog.submit(&mut list).unwrap();
    assert_eq!(api.account(2).payment.payer_id, None);
}

#[test]
fn edit_positive_without_payer_is_rejected_locally() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();
    dialog.form_mut().input_amount("50000");
    dialog.form_mut().select_payer(None);

    assert!(!dialog.has_valid_payer());
    assert_eq!(dialog.submit(&mut list), Err(DialogError::MissingPayer));
    assert_eq!(api.call_count("update"), 0);
    assert!(dialog.is_open());
}

#[test]
fn edit_changes_amount_payer_and_period() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();
    dialog.form_mut().input_amount("50000");
    dialog.form_mut().select_payer(Some(2));
    dialog.form_mut().select_year(2026);
    dialog.form_mut().select_month(1).unwrap();

    dialog.submit(&mut list).unwrap();
    assert_eq!(dialog.editing_id(), None);
    let stored = api.account(2);
    assert_eq!(stored.payment.amount, Decimal::new(500, 0));
    assert_eq!(stored.payment.payer.as_deref(), Some("Bruno"));
    assert_eq!(stored.payment.period, "01-01-2026");
    assert_eq!(list.find(2).unwrap().payment.amount, Decimal::new(500, 0));
}

#[test]
fn strict_policy_rejects_zero_edits() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::with_policy(
        list.api(),
        MIN_PERIOD,
        today,
        ZeroAmountPolicy::RequirePositive,
    );
    dialog.open(list.find(2).unwrap(), today).unwrap();
    dialog.form_mut().input_amount("0");

    assert!(!dialog.has_valid_amount());
    assert!(!dialog.has_valid_payer());
    assert_eq!(dialog.submit(&mut list), Err(DialogError::NonPositiveAmount));
    assert_eq!(api.call_count("update"), 0);
}

#[test]
fn edit_failure_keeps_dialog_open_for_retry() {
    let (api, mut list) = setup();
    let today = period("01-02-2026");
    let mut dialog = EditPaymentDialog::new(list.api(), MIN_PERIOD, today);
    dialog.open(list.find(2).unwrap(), today).unwrap();
    dialog.form_mut().input_amount("20000");
    api.fail_next("Payment is locked");

    assert_eq!(
        dialog.submit(&mut list),
        Err(DialogError::Remote(ApiError::new("Payment is locked")))
    );
    assert!(dialog.is_open());
    assert_eq!(dialog.editing_id(), None);
    assert_eq!(dialog.state(), &DialogState::Error("Payment is locked".into()));
    let notices = dialog.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Payment is locked");
    assert_eq!(list.find(2).unwrap().payment.amount, Decimal::new(15050, 2));
    assert_eq!(api.account(2).payment.amount, Decimal::new(15050, 2));

    dialog.submit(&mut list).unwrap();
    assert!(!dialog.is_open());
    assert_eq!(dialog.state(), &DialogState::Idle);
    assert_eq!(list.find(2).unwrap().payment.amount, Decimal::new(200, 0));
    assert_eq!(dialog.take_notices()[0].message, "Payment updated");
}
