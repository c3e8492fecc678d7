// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::period::{MIN_PERIOD, Period};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Payables", "payables"));

pub const ENV_API_URL: &str = "PAYABLES_API_URL";
pub const ENV_MIN_PERIOD: &str = "PAYABLES_MIN_PERIOD";
pub const ENV_TIMEOUT: &str = "PAYABLES_TIMEOUT_SECS";

/// How the edit-payment dialog treats an amount of exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroAmountPolicy {
    /// Zero is a valid retraction: no payer, account becomes `paid_zero`.
    #[default]
    AllowRetraction,
    /// Every edit needs a positive amount and a payer.
    RequirePositive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub min_period: Period,
    pub timeout_secs: u64,
    pub zero_amount_policy: ZeroAmountPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            min_period: MIN_PERIOD,
            timeout_secs: 15,
            zero_amount_policy: ZeroAmountPolicy::default(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")
}

pub fn config_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir).context("Failed to create data dir")?;
    Ok(dir.to_path_buf())
}

impl Config {
    /// Defaults, then `config.json`, then environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        Self::from_file(&path)?.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("Read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(p) = lookup(ENV_MIN_PERIOD) {
            self.min_period = p
                .parse()
                .with_context(|| format!("Invalid {ENV_MIN_PERIOD} '{p}'"))?;
        }
        if let Some(t) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = t
                .parse()
                .with_context(|| format!("Invalid {ENV_TIMEOUT} '{t}'"))?;
        }
        Ok(self)
    }
}
