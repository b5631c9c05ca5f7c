//! Error types for the slot engine
//!
//! Every fallible operation in the crate returns [`Result`]. Player-caused
//! rejections (bad bet, not enough points) get their own variants so callers
//! can map them onto response envelopes; anything unexpected is `Internal`
//! and carries detail for the logs only.

use thiserror::Error;

/// Result type alias for slot engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bet: {0}")]
    InvalidBet(String),

    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Bet outside the configured range.
    pub fn invalid_bet(bet: u64, min: u64, max: u64) -> Self {
        Error::InvalidBet(format!(
            "bet {} outside allowed range {}..={} points",
            bet, min, max
        ))
    }

    /// Balance too small for the requested debit.
    pub fn insufficient_balance(required: u64, available: u64) -> Self {
        Error::InsufficientBalance(format!(
            "{} points required but only {} available",
            required, available
        ))
    }

    /// True for errors caused by the caller's request rather than the engine.
    /// Rejections are reported verbatim; everything else is masked behind a
    /// generic message before it reaches a player.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidBet(_) | Error::InsufficientBalance(_) | Error::UnknownUser(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_bet(0, 1, 100);
        assert_eq!(
            err.to_string(),
            "Invalid bet: bet 0 outside allowed range 1..=100 points"
        );

        let err = Error::insufficient_balance(10, 5);
        assert_eq!(
            err.to_string(),
            "Insufficient balance: 10 points required but only 5 available"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(Error::invalid_bet(101, 1, 100).is_rejection());
        assert!(Error::insufficient_balance(10, 5).is_rejection());
        assert!(Error::UnknownUser("nobody".into()).is_rejection());
        assert!(!Error::Internal("lock poisoned".into()).is_rejection());
        assert!(!Error::Config("bad file".into()).is_rejection());
    }
}
