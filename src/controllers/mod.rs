// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Stateful controllers behind the payable-accounts screens. The list
//! controller owns the account collection; dialogs only ask it to append
//! or reload.

use std::rc::Rc;

use crate::api::PayablesApi;

pub mod accounts_list;
pub mod create_account;
pub mod dialog;
pub mod edit_payment;
pub mod pay;
pub mod payers;

pub use accounts_list::AccountsList;
pub use create_account::CreateAccountDialog;
pub use dialog::{DialogState, DialogTarget, Notice, NoticeLevel, PaymentForm};
pub use edit_payment::EditPaymentDialog;
pub use pay::PayDialog;
pub use payers::PayerDirectory;

/// Controllers run on one logical thread and share the remote collaborator.
pub type SharedApi = Rc<dyn PayablesApi>;
