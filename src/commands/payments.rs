// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::accounts::{ACCOUNT_HEADERS, account_row, load_list};
use crate::config::Config;
use crate::controllers::{AccountsList, EditPaymentDialog, Notice, NoticeLevel, PayDialog, SharedApi};
use crate::models::PayableAccount;
use crate::period::Period;
use crate::utils::{arg, parse_id, parse_period, pretty_table};
use anyhow::{Context, Result};

pub fn handle(api: SharedApi, config: &Config, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    let mut list = load_list(api, config, sub)?;
    let account = find_account(&list, sub)?;
    let period = sub
        .get_one::<String>("period")
        .map(|p| parse_period(p))
        .transpose()?;
    let payer = sub
        .get_one::<String>("payer")
        .map(|p| parse_id(p))
        .transpose()?;
    let amount = arg(sub, "amount")?;
    let today = Period::current();

    let (res, notices) = match name {
        "pay" => {
            let mut dialog = PayDialog::new(list.api(), config.min_period, today);
            dialog.open(&account, today)?;
            let form = dialog.form_mut();
            form.input_amount(amount);
            if let Some(p) = period {
                form.set_period(p);
            }
            if payer.is_some() {
                form.select_payer(payer);
            }
            let res = dialog.submit(&mut list);
            (res, dialog.take_notices())
        }
        _ => {
            let mut dialog = EditPaymentDialog::with_policy(
                list.api(),
                config.min_period,
                today,
                config.zero_amount_policy,
            );
            dialog.open(&account, today)?;
            let form = dialog.form_mut();
            form.input_amount(amount);
            if let Some(p) = period {
                form.set_period(p);
            }
            if payer.is_some() {
                form.select_payer(payer);
            }
            let res = dialog.submit(&mut list);
            (res, dialog.take_notices())
        }
    };

    print_notices(&notices);
    res?;
    if let Some(updated) = list.find(account.id) {
        println!("{}", pretty_table(&ACCOUNT_HEADERS, vec![account_row(updated)]));
    }
    Ok(())
}

fn find_account(list: &AccountsList, sub: &clap::ArgMatches) -> Result<PayableAccount> {
    let id = parse_id(arg(sub, "account")?)?;
    list.find(id)
        .cloned()
        .with_context(|| format!("Account {} not found in {}", id, list.period().label()))
}

fn print_notices(notices: &[Notice]) {
    for n in notices {
        match n.level {
            NoticeLevel::Success => println!("{}", n.message),
            NoticeLevel::Error => eprintln!("error: {}", n.message),
        }
    }
}
