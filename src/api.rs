//! Operation payloads
//!
//! Request and response shapes for the engine's operations, exactly the
//! structures a transport serializes. Field names are camelCase on the
//! wire because the consumer is the browser demo client. No HTTP anything
//! lives in this crate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::{Grid, WinLine};
use crate::utils::now_millis;

/// Spin request. A missing `user_id` means the configured demo identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinRequest {
    pub bet: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A fully resolved spin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    pub reels: Grid,
    pub win_lines: Vec<WinLine>,
    /// Payline total plus the jackpot pool on a jackpot spin.
    pub total_win: u64,
    pub is_jackpot: bool,
    /// Rounded total_win / bet; 0 on a losing spin.
    pub multiplier: u64,
}

/// Envelope for the spin operation. Rejections come back with
/// `success: false` and an empty `game_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SpinResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub game_id: String,
    pub timestamp: u64,
}

impl SpinResponse {
    pub(crate) fn settled(result: SpinResult, balance: u64) -> Self {
        Self {
            success: true,
            result: Some(result),
            balance: Some(balance),
            error: None,
            game_id: new_spin_id(),
            timestamp: now_millis(),
        }
    }

    pub(crate) fn rejected(message: String, balance: Option<u64>) -> Self {
        Self {
            success: false,
            result: None,
            balance,
            error: Some(message),
            game_id: String::new(),
            timestamp: now_millis(),
        }
    }
}

/// Balance read response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub user_id: String,
    pub balance: u64,
    pub timestamp: u64,
}

/// Administrative balance reset response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetBalanceResponse {
    pub user_id: String,
    pub balance: u64,
    pub message: String,
    pub timestamp: u64,
}

/// Fresh spin id, unique per resolved spin.
pub(crate) fn new_spin_id() -> String {
    format!("slot_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SymbolId;

    #[test]
    fn test_spin_ids_are_prefixed_and_unique() {
        let a = new_spin_id();
        let b = new_spin_id();
        assert!(a.starts_with("slot_"));
        assert!(b.starts_with("slot_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_request_user_id_is_optional() {
        let request: SpinRequest = serde_json::from_str(r#"{"bet": 25}"#).expect("parse");
        assert_eq!(request.bet, 25);
        assert!(request.user_id.is_none());

        let request: SpinRequest =
            serde_json::from_str(r#"{"bet": 25, "userId": "alice"}"#).expect("parse");
        assert_eq!(request.user_id.as_deref(), Some("alice"));
    }

    #[test]
    fn test_settled_envelope_shape() {
        let result = SpinResult {
            reels: Grid::uniform(SymbolId::Cherry),
            win_lines: vec![],
            total_win: 540,
            is_jackpot: false,
            multiplier: 54,
        };
        let value = serde_json::to_value(SpinResponse::settled(result, 1_530)).expect("serialize");

        assert_eq!(value["success"], true);
        assert_eq!(value["balance"], 1_530);
        assert_eq!(value["result"]["totalWin"], 540);
        assert_eq!(value["result"]["isJackpot"], false);
        assert_eq!(value["result"]["reels"][0][0], "cherry");
        assert!(value["gameId"].as_str().expect("gameId").starts_with("slot_"));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_rejected_envelope_shape() {
        let value = serde_json::to_value(SpinResponse::rejected(
            "Invalid bet: bet 0 outside allowed range 1..=100 points".to_string(),
            None,
        ))
        .expect("serialize");

        assert_eq!(value["success"], false);
        assert_eq!(value["gameId"], "");
        assert!(value.get("result").is_none());
        assert!(value.get("balance").is_none());
        assert!(value["error"].as_str().expect("error").contains("Invalid bet"));
    }
}
