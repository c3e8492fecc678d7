// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar periods (one per month) and the minimum-period rules the
//! pickers and the account list share.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PeriodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub value: u32,
    pub label: &'static str,
}

pub static MONTHS: [MonthOption; 12] = [
    MonthOption { value: 1, label: "Janeiro" },
    MonthOption { value: 2, label: "Fevereiro" },
    MonthOption { value: 3, label: "Março" },
    MonthOption { value: 4, label: "Abril" },
    MonthOption { value: 5, label: "Maio" },
    MonthOption { value: 6, label: "Junho" },
    MonthOption { value: 7, label: "Julho" },
    MonthOption { value: 8, label: "Agosto" },
    MonthOption { value: 9, label: "Setembro" },
    MonthOption { value: 10, label: "Outubro" },
    MonthOption { value: 11, label: "Novembro" },
    MonthOption { value: 12, label: "Dezembro" },
];

/// Earliest period the server tracks (01-09-2025).
pub const MIN_PERIOD: Period = Period {
    year: 2025,
    month: 9,
};

/// A calendar month. Always rendered with the day fixed to `01`
/// (`01-MM-YYYY`), which is also the wire format.
///
/// Field order matters: the derived ordering compares year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::Month(month));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Period of today's local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Rounds a too-early period up to `min`.
    pub fn clamped(self, min: Period) -> Self {
        if self < min { min } else { self }
    }

    /// Moves to `year`, snapping the month forward when the combination
    /// would fall before `min`.
    pub fn with_year(self, year: i32, min: Period) -> Self {
        Self {
            year,
            month: self.month,
        }
        .clamped(min)
    }

    pub fn with_month(self, month: u32, min: Period) -> Result<Self, PeriodError> {
        Ok(Self::new(self.year, month)?.clamped(min))
    }

    /// `MM/YYYY`, used for display.
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS
            .iter()
            .find(|m| m.value == self.month)
            .map(|m| m.label)
            .unwrap_or_default()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "01-{:02}-{}", self.month, self.year)
    }
}

// (month, year) of a DD-MM-YYYY string without range checks. The day part
// is ignored entirely.
fn numeric_parts(s: &str) -> Option<(u32, i32)> {
    let parts: Vec<&str> = s.split('-').collect();
    let [_, month, year] = parts.as_slice() else {
        return None;
    };
    Some((month.trim().parse().ok()?, year.trim().parse().ok()?))
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, year) =
            numeric_parts(s).ok_or_else(|| PeriodError::Malformed(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.to_string()
    }
}

/// String form of the clamp rule. Earlier periods become `min`; anything
/// else, including text that does not look like a period, is returned as is.
pub fn clamp_period_str(period: &str, min: Period) -> String {
    // An empty month ("01--2025") counts as malformed, not as month zero.
    match numeric_parts(period) {
        Some((month, year)) if year < min.year || (year == min.year && month < min.month) => {
            min.to_string()
        }
        _ => period.to_string(),
    }
}

/// Month picker options for `year`: months before the minimum are hidden
/// in the minimum year.
pub fn month_options_for_year(year: i32, min: Period) -> &'static [MonthOption] {
    if year == min.year {
        let skip = MONTHS.iter().take_while(|m| m.value < min.month).count();
        &MONTHS[skip..]
    } else {
        &MONTHS
    }
}

/// Years from the minimum year up to `current_year`, inclusive. Empty when
/// the clock is behind the minimum.
pub fn year_options(min: Period, current_year: i32) -> Vec<i32> {
    (min.year..=current_year).collect()
}
