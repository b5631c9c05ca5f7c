//! Per-user point balances
//!
//! Accounts are created lazily: the first touch of an unknown user id
//! writes the configured starting balance. Debits check funds, credits
//! saturate, resets overwrite unconditionally. Each call is consistent on
//! its own; spin-level atomicity across a debit/credit pair is the
//! orchestrator's job and is enforced with its per-user scopes.

use std::collections::HashMap;

use log::{debug, info};
use tokio::sync::RwLock;

use crate::error::{Error, Result};

pub struct BalanceLedger {
    accounts: RwLock<HashMap<String, u64>>,
    starting_balance: u64,
}

impl BalanceLedger {
    pub fn new(starting_balance: u64) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            starting_balance,
        }
    }

    /// Current balance, creating the account at the starting balance on
    /// first touch.
    pub async fn balance(&self, user_id: &str) -> u64 {
        let mut accounts = self.accounts.write().await;
        *accounts
            .entry(user_id.to_string())
            .or_insert(self.starting_balance)
    }

    /// Strict read for administrative callers: no lazy creation.
    pub async fn existing(&self, user_id: &str) -> Result<u64> {
        self.accounts
            .read()
            .await
            .get(user_id)
            .copied()
            .ok_or_else(|| Error::UnknownUser(user_id.to_string()))
    }

    /// Take `amount` from the user's balance. The account is created first
    /// so a brand-new user spends from the starting balance.
    pub async fn debit(&self, user_id: &str, amount: u64) -> Result<u64> {
        let mut accounts = self.accounts.write().await;
        let balance = accounts
            .entry(user_id.to_string())
            .or_insert(self.starting_balance);
        if *balance < amount {
            return Err(Error::insufficient_balance(amount, *balance));
        }
        *balance -= amount;
        debug!("Debited {} points from {} (now {})", amount, user_id, balance);
        Ok(*balance)
    }

    /// Add winnings to the user's balance.
    pub async fn credit(&self, user_id: &str, amount: u64) -> u64 {
        let mut accounts = self.accounts.write().await;
        let balance = accounts
            .entry(user_id.to_string())
            .or_insert(self.starting_balance);
        *balance = balance.saturating_add(amount);
        debug!("Credited {} points to {} (now {})", amount, user_id, balance);
        *balance
    }

    /// Administrative overwrite; creates the account when missing.
    pub async fn reset(&self, user_id: &str, value: u64) -> u64 {
        let mut accounts = self.accounts.write().await;
        accounts.insert(user_id.to_string(), value);
        info!("Balance for {} reset to {} points", user_id, value);
        value
    }

    /// Number of accounts the ledger has seen.
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_account_creation() {
        tokio_test::block_on(async {
            let ledger = BalanceLedger::new(1_000);
            assert_eq!(ledger.account_count().await, 0);
            assert_eq!(ledger.balance("alice").await, 1_000);
            assert_eq!(ledger.account_count().await, 1);
            // second read does not re-seed
            ledger.credit("alice", 5).await;
            assert_eq!(ledger.balance("alice").await, 1_005);
        });
    }

    #[test]
    fn test_debit_checks_funds() {
        tokio_test::block_on(async {
            let ledger = BalanceLedger::new(100);
            assert_eq!(ledger.debit("bob", 40).await.expect("covered"), 60);

            let err = ledger.debit("bob", 61).await.unwrap_err();
            assert!(matches!(err, Error::InsufficientBalance(_)));
            // failed debit leaves the balance alone
            assert_eq!(ledger.balance("bob").await, 60);
        });
    }

    #[test]
    fn test_debit_seeds_new_accounts() {
        tokio_test::block_on(async {
            let ledger = BalanceLedger::new(1_000);
            // a user's first action can be a spin
            assert_eq!(ledger.debit("fresh", 10).await.expect("seeded"), 990);
        });
    }

    #[test]
    fn test_reset_overwrites_and_creates() {
        tokio_test::block_on(async {
            let ledger = BalanceLedger::new(1_000);
            ledger.credit("carol", 500).await;
            assert_eq!(ledger.reset("carol", 1_000).await, 1_000);
            assert_eq!(ledger.balance("carol").await, 1_000);

            assert_eq!(ledger.reset("nobody-yet", 250).await, 250);
            assert_eq!(ledger.balance("nobody-yet").await, 250);
        });
    }

    #[test]
    fn test_existing_is_strict() {
        tokio_test::block_on(async {
            let ledger = BalanceLedger::new(1_000);
            let err = ledger.existing("ghost").await.unwrap_err();
            assert!(matches!(err, Error::UnknownUser(_)));

            ledger.balance("ghost").await;
            assert_eq!(ledger.existing("ghost").await.expect("created"), 1_000);
        });
    }
}
