// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::HttpApi;
use crate::config::Config;
use crate::session::{Session, SessionStore};
use crate::utils::arg;
use anyhow::Result;

pub fn login(config: &Config, store: &SessionStore, sub: &clap::ArgMatches) -> Result<()> {
    let email = arg(sub, "email")?;
    let password = arg(sub, "password")?;
    let api = HttpApi::new(config, Session::anonymous())?;
    let token = api.login(email, password)?;
    store.save(&Session::with_token(token))?;
    println!("Logged in as {} (session at {})", email, store.path().display());
    Ok(())
}

pub fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("Logged out");
    Ok(())
}
