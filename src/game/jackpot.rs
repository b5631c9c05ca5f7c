//! Jackpot detection
//!
//! A spin hits the progressive jackpot when every cell of the grid shows
//! the table's jackpot symbol. Pool accounting lives with the stats
//! aggregator; this module only answers whether a grid hit.

use crate::game::grid::Grid;
use crate::game::symbols::SymbolTable;

/// True when all nine cells show the jackpot symbol.
pub fn is_jackpot(grid: &Grid, table: &SymbolTable) -> bool {
    grid.is_uniform(table.jackpot_symbol())
}
