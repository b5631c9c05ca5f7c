//! Global game statistics and the progressive jackpot pool
//!
//! One aggregator owns the whole stats block behind a single writer lock:
//! spin counters, the biggest win seen, the jackpot pool, and a bounded
//! newest-first feed of notable winners. Every mutation is one lock
//! acquisition, so snapshots are always internally consistent and the
//! pool payout-and-reset cannot interleave with an accrual.

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::SlotConfig;
use crate::error::{Error, Result};
use crate::utils::now_millis;

/// One entry on the public winners feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentWinner {
    pub username: String,
    pub amount: u64,
    pub timestamp: u64,
    pub is_jackpot: bool,
}

/// The stats block served to clients. Counters only ever grow; the pool
/// is the one field that can drop, and only on a jackpot payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_spins: u64,
    pub total_wins: u64,
    pub biggest_win: u64,
    pub jackpot_pool: u64,
    pub recent_winners: VecDeque<RecentWinner>,
}

pub struct StatsTracker {
    stats: RwLock<GameStats>,
    jackpot_base: u64,
    contribution_rate: f64,
    winners_cap: usize,
    notable_multiple: u64,
}

impl StatsTracker {
    pub fn new(config: &SlotConfig) -> Self {
        Self {
            stats: RwLock::new(GameStats {
                total_spins: 0,
                total_wins: 0,
                biggest_win: 0,
                jackpot_pool: config.jackpot_base,
                recent_winners: VecDeque::with_capacity(config.recent_winners_cap),
            }),
            jackpot_base: config.jackpot_base,
            contribution_rate: config.jackpot_contribution_rate,
            winners_cap: config.recent_winners_cap,
            notable_multiple: config.notable_win_multiple,
        }
    }

    /// Every spin lands here exactly once, win or lose.
    pub async fn record_spin(&self) {
        let mut stats = self.stats.write().await;
        stats.total_spins = stats.total_spins.saturating_add(1);
    }

    /// Progressive contribution: `floor(bet * rate)` into the pool, every
    /// spin. Bets too small to floor past zero contribute nothing.
    pub async fn accrue_jackpot(&self, bet: u64) {
        let contribution = (bet as f64 * self.contribution_rate).floor() as u64;
        if contribution == 0 {
            return;
        }
        let mut stats = self.stats.write().await;
        stats.jackpot_pool = stats.jackpot_pool.saturating_add(contribution);
    }

    /// Pay the pool out: returns the current value and resets it to base
    /// in one atomic step.
    pub async fn take_jackpot_pool(&self) -> u64 {
        let mut stats = self.stats.write().await;
        let paid = stats.jackpot_pool;
        stats.jackpot_pool = self.jackpot_base;
        info!(
            "Jackpot pool of {} points paid out, reset to {}",
            paid, self.jackpot_base
        );
        paid
    }

    /// A spin that returned points to the player.
    pub async fn record_win(&self, amount: u64) {
        let mut stats = self.stats.write().await;
        stats.total_wins = stats.total_wins.saturating_add(1);
        if amount > stats.biggest_win {
            stats.biggest_win = amount;
        }
    }

    /// Put a win on the feed when it is notable: at least
    /// `notable_multiple` times the bet, or any jackpot. The feed holds at
    /// most `winners_cap` entries, newest first, evicting on insert.
    pub async fn maybe_record_winner(
        &self,
        username: &str,
        amount: u64,
        bet: u64,
        is_jackpot: bool,
    ) {
        if !is_jackpot && amount < bet.saturating_mul(self.notable_multiple) {
            return;
        }
        let winner = RecentWinner {
            username: username.to_string(),
            amount,
            timestamp: now_millis(),
            is_jackpot,
        };
        let mut stats = self.stats.write().await;
        if stats.recent_winners.len() >= self.winners_cap {
            stats.recent_winners.pop_back();
        }
        stats.recent_winners.push_front(winner);
        debug!("Winner on feed: {} with {} points", username, amount);
    }

    /// Consistent copy of the whole stats block.
    pub async fn snapshot(&self) -> GameStats {
        self.stats.read().await.clone()
    }

    /// The stats block as pretty JSON, for dashboards and logs.
    pub async fn export_json(&self) -> Result<String> {
        let stats = self.stats.read().await;
        serde_json::to_string_pretty(&*stats)
            .map_err(|e| Error::Internal(format!("stats serialization: {}", e)))
    }
}
