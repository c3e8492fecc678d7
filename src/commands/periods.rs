// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::period::{Period, month_options_for_year, year_options};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let current = Period::current();
    let years = year_options(config.min_period, current.year());
    if years.is_empty() {
        println!(
            "No selectable years: the clock is before {}",
            config.min_period.label()
        );
        return Ok(());
    }
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or(current.year());
    let rows = month_options_for_year(year, config.min_period)
        .iter()
        .map(|m| vec![format!("{:02}", m.value), m.label.to_string()])
        .collect();
    let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    println!("Years: {}", years.join(", "));
    println!("{}", pretty_table(&["Month", year.to_string().as_str()], rows));
    Ok(())
}
