//! Small shared helpers

use std::time::{SystemTime, UNIX_EPOCH};

/// Unix timestamp in milliseconds, the format every payload carries.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Public alias shown on the winners feed: "Player" plus the tail of the
/// user id, so raw identifiers never leave the engine.
pub fn winner_alias(user_id: &str) -> String {
    let chars: Vec<char> = user_id.chars().collect();
    let start = chars.len().saturating_sub(4);
    let tail: String = chars[start..].iter().collect();
    format!("Player{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_alias_takes_id_tail() {
        assert_eq!(winner_alias("demo-user"), "Playeruser");
        assert_eq!(winner_alias("player-011"), "Player-011");
    }

    #[test]
    fn test_winner_alias_short_ids() {
        assert_eq!(winner_alias("ab"), "Playerab");
        assert_eq!(winner_alias(""), "Player");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // anything after 2020-01-01 counts as a sane clock
        assert!(now_millis() > 1_577_836_800_000);
    }
}
