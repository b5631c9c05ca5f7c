//! Engine configuration
//!
//! Everything tunable about the slot engine lives in [`SlotConfig`]: bet
//! limits, the starting balance handed to new accounts, jackpot pool
//! parameters and the recent-winner feed size. Values come from built-in
//! defaults, then an optional TOML file, then `SWEEPSLOTS_*` environment
//! overrides, in that order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the optional config file.
pub const CONFIG_PATH_ENV: &str = "SWEEPSLOTS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Smallest accepted bet, in points.
    pub min_bet: u64,
    /// Largest accepted bet, in points.
    pub max_bet: u64,
    /// Balance handed to an account on first touch.
    pub starting_balance: u64,
    /// Value the jackpot pool starts at and resets to after a payout.
    pub jackpot_base: u64,
    /// Fraction of every bet fed into the jackpot pool, floored to whole points.
    pub jackpot_contribution_rate: f64,
    /// Maximum entries kept in the recent-winner feed.
    pub recent_winners_cap: usize,
    /// A win enters the feed when it reaches this multiple of the bet.
    pub notable_win_multiple: u64,
    /// User id assumed when an operation names nobody.
    pub default_user: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 100,
            starting_balance: 1_000,
            jackpot_base: 50_000,
            jackpot_contribution_rate: 0.1,
            recent_winners_cap: 10,
            notable_win_multiple: 5,
            default_user: "demo-user".to_string(),
        }
    }
}

impl SlotConfig {
    /// Load configuration: defaults, then the TOML file named by
    /// `SWEEPSLOTS_CONFIG` (if set), then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.override_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    fn override_from_env(&mut self) {
        if let Ok(v) = std::env::var("SWEEPSLOTS_MIN_BET") {
            if let Ok(n) = v.parse() {
                self.min_bet = n;
            }
        }
        if let Ok(v) = std::env::var("SWEEPSLOTS_MAX_BET") {
            if let Ok(n) = v.parse() {
                self.max_bet = n;
            }
        }
        if let Ok(v) = std::env::var("SWEEPSLOTS_STARTING_BALANCE") {
            if let Ok(n) = v.parse() {
                self.starting_balance = n;
            }
        }
        if let Ok(v) = std::env::var("SWEEPSLOTS_JACKPOT_BASE") {
            if let Ok(n) = v.parse() {
                self.jackpot_base = n;
            }
        }
        if let Ok(v) = std::env::var("SWEEPSLOTS_DEFAULT_USER") {
            if !v.is_empty() {
                self.default_user = v;
            }
        }
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.min_bet == 0 {
            return Err(Error::Config("min_bet must be at least 1".into()));
        }
        if self.max_bet < self.min_bet {
            return Err(Error::Config(format!(
                "max_bet {} below min_bet {}",
                self.max_bet, self.min_bet
            )));
        }
        if !(0.0..=1.0).contains(&self.jackpot_contribution_rate) {
            return Err(Error::Config(format!(
                "jackpot_contribution_rate {} outside 0.0..=1.0",
                self.jackpot_contribution_rate
            )));
        }
        if self.recent_winners_cap == 0 {
            return Err(Error::Config("recent_winners_cap must be at least 1".into()));
        }
        if self.default_user.is_empty() {
            return Err(Error::Config("default_user must not be empty".into()));
        }
        Ok(())
    }
}
