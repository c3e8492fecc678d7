// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::{info, warn};

use super::{AccountsList, DialogState, SharedApi};
use crate::error::DialogError;
use crate::models::PayableAccount;

pub struct CreateAccountDialog {
    api: SharedApi,
    open: bool,
    name: String,
    state: DialogState,
}

impl CreateAccountDialog {
    pub fn new(api: SharedApi) -> Self {
        Self {
            api,
            open: false,
            name: String::new(),
            state: DialogState::Idle,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Creates the account and appends it to `list` without a reload.
    /// A blank name does nothing and yields `Ok(None)`. Failures land in
    /// the list's shared error and keep the dialog open.
    pub fn add_item(
        &mut self,
        list: &mut AccountsList,
    ) -> Result<Option<PayableAccount>, DialogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Ok(None);
        }
        if !self.state.can_submit() {
            return Err(DialogError::Busy);
        }
        self.state = DialogState::Submitting;
        list.clear_error();
        match self.api.create_account(&name) {
            Ok(created) => {
                info!(id = created.id, name = %created.name, "account created");
                list.append(created.clone());
                self.name.clear();
                self.open = false;
                self.state = DialogState::Idle;
                Ok(Some(created))
            }
            Err(e) => {
                warn!(error = %e, "failed to create account");
                list.set_error(e.message());
                self.state = DialogState::Error(e.to_string());
                Err(e.into())
            }
        }
    }
}
