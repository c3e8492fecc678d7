// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::PayablesApi;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(api: &dyn PayablesApi, sub: &clap::ArgMatches) -> Result<()> {
    let users = api.fetch_users()?;
    if !maybe_print_json(sub.get_flag("json"), &users)? {
        let rows = users
            .into_iter()
            .map(|u| vec![u.id.to_string(), u.name, u.email])
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Email"], rows));
    }
    Ok(())
}
