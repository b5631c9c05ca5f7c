//! Pure slot mechanics
//!
//! The stateless heart of the engine:
//! - Weighted symbol table and draws
//! - 3x3 grid generation from an injected random source
//! - Fixed paylines with leading-run evaluation
//! - Jackpot detection
//!
//! Nothing in here touches balances, stats or locks; given a grid or a
//! random source, every function is deterministic.

pub mod grid;
pub mod jackpot;
pub mod paylines;
pub mod symbols;

pub use grid::{Grid, GRID_CELLS, GRID_COLS, GRID_ROWS};
pub use jackpot::is_jackpot;
pub use paylines::{evaluate, LineEvaluation, WinLine, MIN_RUN, PAYLINES};
pub use symbols::{Symbol, SymbolId, SymbolTable};
