// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::warn;

use crate::api::PayablesApi;
use crate::models::User;

/// Payer options, cached for one dialog session.
#[derive(Debug, Default)]
pub struct PayerDirectory {
    users: Vec<User>,
    loading: bool,
}

impl PayerDirectory {
    /// Replaces the cache. A failed load leaves it empty, so no payer can
    /// be resolved until the next successful load.
    pub fn load(&mut self, api: &dyn PayablesApi) {
        self.loading = true;
        self.users = match api.fetch_users() {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "failed to load payers");
                Vec::new()
            }
        };
        self.loading = false;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn first(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The selected payer, if it exists in the directory.
    pub fn resolve(&self, id: Option<i64>) -> Option<&User> {
        id.and_then(|id| self.find(id))
    }
}
