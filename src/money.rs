// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Currency text codec for amount fields bound directly to keystrokes.
//!
//! Every keystroke re-encodes the whole field: non-digits are dropped and
//! the last two digits are read as cents, so the field never needs its own
//! cursor or cents state. `R$ 1.234,56` decodes back to `1234.56`.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub const CURRENCY_PREFIX: &str = "R$ ";

/// Longest digit run kept from the input.
pub const MAX_DIGITS: usize = 14;

// ASCII only: the split below works on byte offsets.
static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("static pattern"));
static PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^R\$").expect("static pattern"));

/// Encodes raw input as display text. Empty or all-zero input means "no
/// amount entered" and renders as the bare prefix.
pub fn format_money(raw: &str) -> String {
    let stripped = NON_DIGIT.replace_all(raw, "");
    let digits: String = stripped.chars().take(MAX_DIGITS).collect();
    if digits.chars().all(|c| c == '0') {
        return CURRENCY_PREFIX.to_string();
    }
    let split = digits.len().saturating_sub(2);
    let (int_part, cents) = digits.split_at(split);
    let cents = format!("{cents:0>2}");
    let int_part = int_part.trim_start_matches('0');
    format!("{CURRENCY_PREFIX}{},{cents}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Decodes display text to an amount in currency units. Anything that does
/// not parse decodes to zero.
pub fn parse_money(text: &str) -> Decimal {
    let compact = WHITESPACE.replace_all(text, "");
    let unprefixed = PREFIX.replace(&compact, "");
    let cleaned = unprefixed.replace('.', "").replacen(',', ".", 1);
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    let cleaned = if cleaned.starts_with('.') {
        format!("0{cleaned}")
    } else {
        cleaned
    };
    cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Display text for a stored amount. Unlike field input, zero is shown
/// explicitly as `R$ 0,00`.
pub fn format_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        return format!("{CURRENCY_PREFIX}0,00");
    }
    format_money(&amount_to_cents(amount).to_string())
}

/// Field text that reproduces `amount` when decoded; zero yields the bare
/// prefix, like an untouched field.
pub fn amount_to_field(amount: Decimal) -> String {
    format_money(&amount_to_cents(amount).to_string())
}

/// Largest amount the field can hold, in cents.
const MAX_CENTS: i128 = 99_999_999_999_999;

fn amount_to_cents(amount: Decimal) -> i128 {
    match amount.checked_mul(Decimal::ONE_HUNDRED) {
        Some(cents) => cents.round().to_i128().unwrap_or_default(),
        None if amount.is_sign_negative() => -MAX_CENTS,
        None => MAX_CENTS,
    }
}
