// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::controllers::{AccountsList, CreateAccountDialog, SharedApi};
use crate::models::{PayableAccount, StatusCounts};
use crate::money::format_amount;
use crate::period::Period;
use crate::summary::PayerShare;
use crate::utils::{arg, maybe_print_json, parse_period, pretty_table};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(api: SharedApi, config: &Config, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "list" => list(load_list(api, config, sub)?, sub)?,
        "summary" => summary(load_list(api, config, sub)?, sub)?,
        "create" => create(api, config, sub)?,
        _ => {}
    }
    Ok(())
}

/// Loads the list for `--period` (or the current month) and turns a failed
/// fetch into an error.
pub fn load_list(api: SharedApi, config: &Config, sub: &clap::ArgMatches) -> Result<AccountsList> {
    let mut list = AccountsList::new(api, config.min_period, Period::current());
    if let Some(p) = sub.get_one::<String>("period") {
        list.set_period(parse_period(p)?);
    }
    if !list.reload() {
        bail!("{}", list.error().unwrap_or("Failed to load accounts"));
    }
    Ok(list)
}

pub fn account_row(a: &PayableAccount) -> Vec<String> {
    let paid = a.payment.id.is_some();
    vec![
        a.id.to_string(),
        a.name.clone(),
        a.effective_status().as_str().to_string(),
        if paid { format_amount(a.payment.amount) } else { "-".into() },
        a.payment.payer.clone().unwrap_or_else(|| "-".into()),
        a.payment.period().map(|p| p.label()).unwrap_or_else(|| "-".into()),
    ]
}

pub const ACCOUNT_HEADERS: [&str; 6] = ["Id", "Name", "Status", "Amount", "Payer", "Period"];

fn list(list: AccountsList, sub: &clap::ArgMatches) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), &list.items())? {
        let period = list.period();
        println!("{} ({})", period.month_name(), period.label());
        let rows = list.items().iter().map(account_row).collect();
        println!("{}", pretty_table(&ACCOUNT_HEADERS, rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct SummaryView {
    period: Period,
    total_paid: Decimal,
    counts: StatusCounts,
    payers: Vec<PayerShare>,
}

fn summary(list: AccountsList, sub: &clap::ArgMatches) -> Result<()> {
    let view = SummaryView {
        period: list.period(),
        total_paid: list.total_paid(),
        counts: list.status_counts(),
        payers: list.paid_by_user_with_percentage(),
    };
    if maybe_print_json(sub.get_flag("json"), &view)? {
        return Ok(());
    }
    println!(
        "{}: {} of {} accounts paid, total {}",
        view.period.label(),
        view.counts.paid,
        view.counts.total(),
        format_amount(view.total_paid)
    );
    let rows = view
        .payers
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                format_amount(s.total_paid),
                format!("{:.1}%", s.percentage),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Payer", "Paid", "Share"], rows));
    Ok(())
}

fn create(api: SharedApi, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let mut list = AccountsList::new(api.clone(), config.min_period, Period::current());
    let mut dialog = CreateAccountDialog::new(api);
    dialog.open();
    dialog.set_name(arg(sub, "name")?);
    match dialog.add_item(&mut list)? {
        Some(created) => println!("Created account '{}' (id {})", created.name, created.id),
        None => bail!("Account name cannot be empty"),
    }
    Ok(())
}
