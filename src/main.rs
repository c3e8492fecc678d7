// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use payables::api::HttpApi;
use payables::config::Config;
use payables::controllers::SharedApi;
use payables::session::SessionStore;
use payables::{cli, commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli::build_cli().get_matches();

    let config = Config::load()?;
    let store = SessionStore::default_location()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::session::login(&config, &store, sub)?,
        Some(("logout", _)) => commands::session::logout(&store)?,
        Some(("periods", sub)) => commands::periods::handle(&config, sub)?,
        Some((name, sub)) => {
            let api: SharedApi = Rc::new(HttpApi::new(&config, store.load()?)?);
            match name {
                "list" | "summary" | "create" => {
                    commands::accounts::handle(api, &config, name, sub)?
                }
                "pay" | "edit-payment" => commands::payments::handle(api, &config, name, sub)?,
                "users" => commands::users::handle(api.as_ref(), sub)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
