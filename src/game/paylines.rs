//! Fixed paylines and win evaluation
//!
//! Nine paylines over the 3x3 grid, addressed by flat row-major cell
//! indices. A line pays on its leading run only: cells matching the
//! line's FIRST cell, stopping at the first mismatch. A run must reach
//! three cells to pay, so on these 3-cell lines a win means the whole
//! line matches. It is still the run rule that gets evaluated, not an
//! "any three anywhere" rule.

use serde::{Deserialize, Serialize};

use crate::game::grid::Grid;
use crate::game::symbols::{SymbolId, SymbolTable};

/// Run length required before a line pays.
pub const MIN_RUN: u32 = 3;

/// The nine paylines, in wire order: rows, diagonals, columns, then the V
/// through the middle. The position in this table is the `line` index
/// reported on every win.
pub const PAYLINES: [[usize; 3]; 9] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [1, 3, 5], // V
];

/// One winning payline in a resolved spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLine {
    /// Index into [`PAYLINES`].
    pub line: usize,
    /// The symbol forming the run.
    pub symbol: SymbolId,
    /// Leading run length.
    pub count: u32,
    /// Symbol multiplier times run length.
    pub multiplier: u64,
    /// Points paid on this line for the spin's bet.
    pub win: u64,
}

/// Every payline of one grid, scored.
#[derive(Debug, Clone, Default)]
pub struct LineEvaluation {
    pub win_lines: Vec<WinLine>,
    pub total_win: u64,
}

/// Score a grid against every payline. Pure: same grid and bet, same
/// result.
pub fn evaluate(grid: &Grid, bet: u64, table: &SymbolTable) -> LineEvaluation {
    let mut win_lines = Vec::new();
    let mut total_win = 0u64;

    for (line, positions) in PAYLINES.iter().enumerate() {
        let first = grid.cell(positions[0]);
        let mut count = 1u32;
        for &position in &positions[1..] {
            if grid.cell(position) != first {
                break;
            }
            count += 1;
        }
        if count < MIN_RUN {
            continue;
        }

        let symbol = match table.get(first) {
            Some(symbol) => symbol,
            None => continue,
        };
        let multiplier = symbol.multiplier * count as u64;
        let win = bet * multiplier;
        total_win += win;
        win_lines.push(WinLine {
            line,
            symbol: first,
            count,
            multiplier,
            win,
        });
    }

    LineEvaluation {
        win_lines,
        total_win,
    }
}
