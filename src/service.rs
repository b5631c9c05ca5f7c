//! Spin orchestration and the engine's public operations
//!
//! [`SlotService`] owns every piece of engine state: configuration, the
//! symbol table, the balance ledger, the stats block, the random source,
//! and a per-user lock table. One instance serves all players.
//!
//! A spin runs as a fixed pipeline: validate the bet, enter the user's
//! scope, debit, generate the grid, score the paylines, settle a jackpot,
//! credit the win, then update global stats. Failures are only possible
//! before the debit lands; once points leave the account the matching
//! credit cannot be skipped.

use std::sync::Arc;

use dashmap::DashMap;
use log::{error, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::{Mutex as UserMutex, OwnedMutexGuard};

use crate::api::{BalanceResponse, ResetBalanceResponse, SpinRequest, SpinResponse, SpinResult};
use crate::config::SlotConfig;
use crate::error::{Error, Result};
use crate::game::{evaluate, is_jackpot, Grid, SymbolTable};
use crate::ledger::BalanceLedger;
use crate::stats::{GameStats, StatsTracker};
use crate::utils::{now_millis, winner_alias};

/// What a player sees when the engine itself failed. Detail stays in the
/// logs.
const INTERNAL_ERROR_MESSAGE: &str = "Internal engine error";

/// The slot engine. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct SlotService {
    config: SlotConfig,
    symbols: SymbolTable,
    ledger: BalanceLedger,
    stats: StatsTracker,
    rng: Mutex<Box<dyn RngCore + Send>>,
    user_scopes: DashMap<String, Arc<UserMutex<()>>>,
}

impl SlotService {
    /// Engine with entropy-seeded randomness.
    pub fn new(config: SlotConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a caller-supplied random source. Tests inject
    /// deterministic generators through this.
    pub fn with_rng<R>(config: SlotConfig, rng: R) -> Result<Self>
    where
        R: RngCore + Send + 'static,
    {
        config.validate()?;
        Ok(Self {
            symbols: SymbolTable::standard(),
            ledger: BalanceLedger::new(config.starting_balance),
            stats: StatsTracker::new(&config),
            rng: Mutex::new(Box::new(rng)),
            user_scopes: DashMap::new(),
            config,
        })
    }

    /// Engine with reproducible randomness, for simulations.
    pub fn with_seed(config: SlotConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    fn resolve_user<'a>(&'a self, user_id: Option<&'a str>) -> &'a str {
        user_id.unwrap_or(&self.config.default_user)
    }

    /// Exclusive scope for one user. Operations on the same account run
    /// one at a time; different users proceed in parallel.
    async fn user_scope(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .user_scopes
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(UserMutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }

    /// Balance read under the user's scope, so it never observes a spin
    /// between its debit and credit.
    async fn scoped_balance(&self, user_id: &str) -> u64 {
        let _scope = self.user_scope(user_id).await;
        self.ledger.balance(user_id).await
    }

    /// Resolve one spin end to end. Rejections come back as an envelope
    /// with `success: false`; the balance rides along only when the spin
    /// was refused for insufficient funds.
    pub async fn spin(&self, request: &SpinRequest) -> SpinResponse {
        let user_id = self.resolve_user(request.user_id.as_deref()).to_string();
        match self.execute_spin(&user_id, request.bet).await {
            Ok((result, balance)) => SpinResponse::settled(result, balance),
            Err(err @ Error::InsufficientBalance(_)) => {
                warn!("Spin rejected for {}: {}", user_id, err);
                let balance = self.scoped_balance(&user_id).await;
                SpinResponse::rejected(err.to_string(), Some(balance))
            }
            Err(err) if err.is_rejection() => {
                warn!("Spin rejected for {}: {}", user_id, err);
                SpinResponse::rejected(err.to_string(), None)
            }
            Err(err) => {
                error!("Spin for {} failed: {}", user_id, err);
                SpinResponse::rejected(INTERNAL_ERROR_MESSAGE.to_string(), None)
            }
        }
    }

    /// The spin pipeline. Returns the resolved spin and the settled
    /// balance. The ledger is only touched between debit and credit, both
    /// under the user's scope, so an early return never leaves a
    /// half-settled account.
    async fn execute_spin(&self, user_id: &str, bet: u64) -> Result<(SpinResult, u64)> {
        if bet < self.config.min_bet || bet > self.config.max_bet {
            return Err(Error::invalid_bet(
                bet,
                self.config.min_bet,
                self.config.max_bet,
            ));
        }

        let scope = self.user_scope(user_id).await;

        let after_debit = self.ledger.debit(user_id, bet).await?;

        // Guard scope stays synchronous: the rng lock is never held
        // across an await point.
        let grid = {
            let mut rng = self.rng.lock();
            Grid::generate(&self.symbols, rng.as_mut())
        };

        let evaluation = evaluate(&grid, bet, &self.symbols);
        let jackpot = is_jackpot(&grid, &self.symbols);

        let mut total_win = evaluation.total_win;
        if jackpot {
            let pool = self.stats.take_jackpot_pool().await;
            total_win = total_win.saturating_add(pool);
            info!("JACKPOT: {} hit the pool for {} points", user_id, pool);
        }

        let balance = if total_win > 0 {
            self.ledger.credit(user_id, total_win).await
        } else {
            after_debit
        };

        drop(scope);

        self.stats.record_spin().await;
        self.stats.accrue_jackpot(bet).await;
        if total_win > 0 {
            self.stats.record_win(total_win).await;
            self.stats
                .maybe_record_winner(&winner_alias(user_id), total_win, bet, jackpot)
                .await;
        }

        let multiplier = if total_win > 0 {
            (total_win as f64 / bet as f64).round() as u64
        } else {
            0
        };

        let result = SpinResult {
            reels: grid,
            win_lines: evaluation.win_lines,
            total_win,
            is_jackpot: jackpot,
            multiplier,
        };

        Ok((result, balance))
    }

    /// Current balance, creating the account at the starting balance on
    /// first touch.
    pub async fn balance(&self, user_id: Option<&str>) -> BalanceResponse {
        let user_id = self.resolve_user(user_id);
        let balance = self.scoped_balance(user_id).await;
        BalanceResponse {
            user_id: user_id.to_string(),
            balance,
            timestamp: now_millis(),
        }
    }

    /// Balance for an account that must already exist. Unlike the public
    /// read, an untouched user is an error here.
    pub async fn known_balance(&self, user_id: &str) -> Result<u64> {
        let _scope = self.user_scope(user_id).await;
        self.ledger.existing(user_id).await
    }

    /// Administrative reset to a fixed value, the starting balance when
    /// no value is given.
    pub async fn reset_balance(
        &self,
        user_id: Option<&str>,
        value: Option<u64>,
    ) -> ResetBalanceResponse {
        let user_id = self.resolve_user(user_id);
        let value = value.unwrap_or(self.config.starting_balance);
        let _scope = self.user_scope(user_id).await;
        let balance = self.ledger.reset(user_id, value).await;
        ResetBalanceResponse {
            user_id: user_id.to_string(),
            balance,
            message: format!("Balance reset to {} points", balance),
            timestamp: now_millis(),
        }
    }

    /// Consistent snapshot of the global stats block.
    pub async fn stats(&self) -> GameStats {
        self.stats.snapshot().await
    }

    /// The stats block as pretty JSON.
    pub async fn stats_json(&self) -> Result<String> {
        self.stats.export_json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn service_with_rng(rng: StepRng) -> SlotService {
        SlotService::with_rng(SlotConfig::default(), rng).expect("valid config")
    }

    #[tokio::test]
    async fn test_invalid_bet_leaves_everything_untouched() {
        let service = service_with_rng(StepRng::new(0, 0));

        for bet in [0u64, 101, u64::MAX] {
            let response = service
                .spin(&SpinRequest {
                    bet,
                    user_id: None,
                })
                .await;
            assert!(!response.success);
            assert!(response.result.is_none());
            assert!(response.balance.is_none());
            assert!(response.error.as_deref().unwrap().contains("Invalid bet"));
            assert!(response.game_id.is_empty());
        }

        let stats = service.stats().await;
        assert_eq!(stats.total_spins, 0);
        assert_eq!(stats.jackpot_pool, 50_000);
    }

    #[tokio::test]
    async fn test_constant_low_rng_spin_settles() {
        // StepRng at zero draws the first symbol everywhere: nine cherry
        // cells, nine three-long lines at multiplier 6.
        let service = service_with_rng(StepRng::new(0, 0));

        let response = service
            .spin(&SpinRequest {
                bet: 10,
                user_id: None,
            })
            .await;

        assert!(response.success);
        let result = response.result.expect("settled spin");
        assert_eq!(result.total_win, 540);
        assert_eq!(result.multiplier, 54);
        assert!(!result.is_jackpot);
        assert_eq!(result.win_lines.len(), 9);
        assert_eq!(response.balance, Some(1_530));
        assert!(response.game_id.starts_with("slot_"));
    }

    #[tokio::test]
    async fn test_insufficient_balance_reports_current_points() {
        let service = service_with_rng(StepRng::new(0, 0));
        service.reset_balance(None, Some(7)).await;

        let response = service
            .spin(&SpinRequest {
                bet: 10,
                user_id: None,
            })
            .await;

        assert!(!response.success);
        assert_eq!(response.balance, Some(7));
        assert!(response
            .error
            .as_deref()
            .unwrap()
            .contains("Insufficient balance"));

        // The failed debit must not have moved anything.
        assert_eq!(service.balance(None).await.balance, 7);
        assert_eq!(service.stats().await.total_spins, 0);
    }

    #[tokio::test]
    async fn test_missing_user_resolves_to_demo_identity() {
        let service = service_with_rng(StepRng::new(0, 0));
        let response = service.balance(None).await;
        assert_eq!(response.user_id, "demo-user");
        assert_eq!(response.balance, 1_000);
    }
}
