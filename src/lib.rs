//! Sweepslots - spin resolution engine for a points-based slot game
//!
//! The engine resolves one spin at a time for a browser casino demo:
//! - game: the pure math (weighted symbols, 3x3 grids, payline scoring)
//! - ledger: per-user point balances with lazy account creation
//! - stats: global counters, the winner feed, the progressive jackpot pool
//! - service: the spin pipeline tying the pieces together
//! - api: request and response envelopes in wire shape
//!
//! [`SlotService`] is the entry point; construct one per process and share
//! it behind an `Arc`. Points are play currency with no cash value.

pub mod api; // Operation request/response payloads
pub mod config; // Engine tunables with file and env overrides
pub mod error; // Crate-wide error and result types
pub mod game; // Pure game math: symbols, grids, paylines, jackpot
pub mod ledger; // Player point balances
pub mod service; // Spin orchestration and public operations
pub mod stats; // Global statistics and the jackpot pool
pub mod utils; // Small shared helpers

// Re-export commonly used types for easy access
pub use api::{BalanceResponse, ResetBalanceResponse, SpinRequest, SpinResponse, SpinResult};
pub use config::SlotConfig;
pub use error::{Error, Result};
pub use game::{
    evaluate, is_jackpot, Grid, LineEvaluation, Symbol, SymbolId, SymbolTable, WinLine,
    GRID_CELLS, GRID_COLS, GRID_ROWS, MIN_RUN, PAYLINES,
};
pub use ledger::BalanceLedger;
pub use service::SlotService;
pub use stats::{GameStats, RecentWinner, StatsTracker};
pub use utils::winner_alias;
