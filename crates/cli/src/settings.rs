//! Run settings: CLI flags layered over an optional TOML file
//!
//! Precedence is flag, then settings file, then built-in default.
//!
//! ```toml
//! layout = "%Y%m%d_%H%M%S"
//! order = "descending"
//! keep = false
//!
//! [retention]
//! daily = 7
//! weekly = 3
//! monthly = 5
//! ```

use crate::args::{Cli, OrderArg};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use filter_core::{Layout, Order, RetentionPolicy, Selection};
use serde::Deserialize;
use std::path::Path;

/// Default number of daily generations
pub const DEFAULT_DAILY: u32 = 7;
/// Default number of weekly generations
pub const DEFAULT_WEEKLY: u32 = 3;
/// Default number of monthly generations
pub const DEFAULT_MONTHLY: u32 = 5;

/// Settings file contents; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub layout: Option<String>,
    pub order: Option<OrderArg>,
    pub keep: Option<bool>,
    #[serde(default)]
    pub retention: RetentionSection,
}

/// `[retention]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionSection {
    pub daily: Option<u32>,
    pub weekly: Option<u32>,
    pub monthly: Option<u32>,
}

impl SettingsFile {
    /// Load and parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub layout: Layout,
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
    pub order: Order,
    pub selection: Selection,
    /// Reference day override; today in local time when unset
    pub now: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            daily: DEFAULT_DAILY,
            weekly: DEFAULT_WEEKLY,
            monthly: DEFAULT_MONTHLY,
            order: Order::default(),
            selection: Selection::Delete,
            now: None,
        }
    }
}

impl Settings {
    /// Merge parsed flags with the settings file they name, if any.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        let settings = Self::merge(cli, file);
        settings.validate().context("Invalid configuration")?;
        Ok(settings)
    }

    fn merge(cli: &Cli, file: SettingsFile) -> Self {
        let defaults = Self::default();

        let order = if cli.descending {
            Order::Descending
        } else {
            cli.order
                .or(file.order)
                .map(Order::from)
                .unwrap_or(defaults.order)
        };

        let keep = if cli.keep {
            true
        } else if cli.delete {
            false
        } else {
            file.keep.unwrap_or(false)
        };

        Self {
            layout: cli
                .layout
                .clone()
                .or(file.layout)
                .map(Layout::new)
                .unwrap_or(defaults.layout),
            daily: cli.backup_daily.or(file.retention.daily).unwrap_or(defaults.daily),
            weekly: cli.backup_weekly.or(file.retention.weekly).unwrap_or(defaults.weekly),
            monthly: cli
                .backup_monthly
                .or(file.retention.monthly)
                .unwrap_or(defaults.monthly),
            order,
            selection: if keep { Selection::Keep } else { Selection::Delete },
            now: cli.now,
        }
    }

    /// Check everything that can be checked before input is read.
    pub fn validate(&self) -> Result<()> {
        if self.layout.as_str().is_empty() {
            anyhow::bail!("layout must not be empty");
        }
        self.policy()?;
        Ok(())
    }

    /// Retention policy described by the tier counts
    pub fn policy(&self) -> Result<RetentionPolicy> {
        Ok(RetentionPolicy::from_counts(
            self.daily,
            self.weekly,
            self.monthly,
        )?)
    }

    /// Day the retention walk starts from
    pub fn reference_day(&self) -> NaiveDate {
        self.now.unwrap_or_else(|| Local::now().date_naive())
    }
}
