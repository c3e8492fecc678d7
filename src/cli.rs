// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .help("Period as DD-MM-YYYY (day is ignored); defaults to the current month")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

fn payment_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("account").required(true).help("Account id"))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .help("Amount as typed, e.g. 1500 for R$ 15,00 or 'R$ 1.234,56'"),
        )
        .arg(Arg::new("payer").long("payer").help("Payer user id"))
        .arg(period_arg())
}

pub fn build_cli() -> Command {
    Command::new("payables")
        .about("Track monthly payable accounts and their payments")
        .version(crate_version!())
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session token")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Forget the stored session token"))
        .subcommand(
            Command::new("list")
                .about("List payable accounts for a period")
                .arg(period_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Paid totals per payer for a period")
                .arg(period_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a payable account")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(payment_args(
            Command::new("pay").about("Register the first payment of an unpaid account"),
        ))
        .subcommand(payment_args(Command::new("edit-payment").about(
            "Amend an existing payment; an amount of zero retracts it without a payer",
        )))
        .subcommand(
            Command::new("users")
                .about("List payers")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("periods")
                .about("Selectable years and months")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32)),
                ),
        )
}
