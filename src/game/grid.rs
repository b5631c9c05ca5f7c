//! The 3x3 spin grid
//!
//! Nine statistically independent weighted draws, filled row-major. There
//! is no reel-strip simulation and no correlation between cells; every
//! cell is its own draw against the symbol table.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::symbols::{SymbolId, SymbolTable};

pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 3;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// A resolved grid. Serializes as three rows of symbol ids, the shape the
/// demo client renders. Cell `(row, col)` has flat index `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[SymbolId; GRID_COLS]; GRID_ROWS]);

impl Grid {
    /// Fill all nine cells with independent draws, row by row.
    pub fn generate<R: Rng + ?Sized>(table: &SymbolTable, rng: &mut R) -> Self {
        let mut rows = [[SymbolId::Cherry; GRID_COLS]; GRID_ROWS];
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = table.draw(rng);
            }
        }
        Self(rows)
    }

    pub fn from_rows(rows: [[SymbolId; GRID_COLS]; GRID_ROWS]) -> Self {
        Self(rows)
    }

    /// Grid showing the same symbol in every cell.
    pub fn uniform(id: SymbolId) -> Self {
        Self([[id; GRID_COLS]; GRID_ROWS])
    }

    /// Cell by flat row-major index. `flat` must be below [`GRID_CELLS`];
    /// payline definitions guarantee that.
    pub fn cell(&self, flat: usize) -> SymbolId {
        self.0[flat / GRID_COLS][flat % GRID_COLS]
    }

    pub fn rows(&self) -> &[[SymbolId; GRID_COLS]; GRID_ROWS] {
        &self.0
    }

    pub fn is_uniform(&self, id: SymbolId) -> bool {
        self.0.iter().all(|row| row.iter().all(|&cell| cell == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_generate_uses_the_draw_path() {
        let table = SymbolTable::standard();
        let mut rng = StepRng::new(0, 0);
        let grid = Grid::generate(&table, &mut rng);
        assert!(grid.is_uniform(SymbolId::Cherry));
    }

    #[test]
    fn test_flat_indexing_is_row_major() {
        let grid = Grid::from_rows([
            [SymbolId::Cherry, SymbolId::Lemon, SymbolId::Orange],
            [SymbolId::Plum, SymbolId::Bell, SymbolId::Diamond],
            [SymbolId::Seven, SymbolId::Crown, SymbolId::Cherry],
        ]);
        assert_eq!(grid.cell(0), SymbolId::Cherry);
        assert_eq!(grid.cell(2), SymbolId::Orange);
        assert_eq!(grid.cell(3), SymbolId::Plum);
        assert_eq!(grid.cell(4), SymbolId::Bell);
        assert_eq!(grid.cell(8), SymbolId::Cherry);
    }

    #[test]
    fn test_uniform_detection() {
        let grid = Grid::uniform(SymbolId::Crown);
        assert!(grid.is_uniform(SymbolId::Crown));
        assert!(!grid.is_uniform(SymbolId::Cherry));

        let mut rows = *grid.rows();
        rows[2][2] = SymbolId::Cherry;
        assert!(!Grid::from_rows(rows).is_uniform(SymbolId::Crown));
    }

    #[test]
    fn test_serializes_as_rows_of_ids() {
        let grid = Grid::uniform(SymbolId::Bell);
        let value = serde_json::to_value(grid).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!([
                ["bell", "bell", "bell"],
                ["bell", "bell", "bell"],
                ["bell", "bell", "bell"]
            ])
        );
    }
}
