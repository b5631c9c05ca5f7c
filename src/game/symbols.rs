//! Reel symbols and the weighted draw
//!
//! The reel strip is a flat weighted table: common fruit at the bottom,
//! crown on top. Draw probability of a symbol is `weight / total_weight`,
//! so with the standard table (total weight 107) a cherry lands roughly
//! 28% of the time and a crown under 1%.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of one reel symbol. Serializes to its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolId {
    Cherry,
    Lemon,
    Orange,
    Plum,
    Bell,
    Diamond,
    Seven,
    Crown,
}

impl SymbolId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolId::Cherry => "cherry",
            SymbolId::Lemon => "lemon",
            SymbolId::Orange => "orange",
            SymbolId::Plum => "plum",
            SymbolId::Bell => "bell",
            SymbolId::Diamond => "diamond",
            SymbolId::Seven => "seven",
            SymbolId::Crown => "crown",
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the reel strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    /// Line payout multiplier per matched cell.
    pub multiplier: u64,
    /// Draw weight relative to the table total.
    pub weight: u32,
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl Into<String>, multiplier: u64, weight: u32) -> Self {
        Self {
            id,
            name: name.into(),
            multiplier,
            weight,
        }
    }
}

/// The validated symbol set used for every draw. Immutable after
/// construction; the highest-multiplier entry doubles as the jackpot
/// symbol.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    total_weight: u32,
    jackpot_symbol: SymbolId,
}

impl SymbolTable {
    /// Build a table from an arbitrary symbol list. Fails on an empty list
    /// or an all-zero weight sum, which would make drawing meaningless.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        let jackpot_symbol = match symbols.iter().max_by_key(|s| s.multiplier) {
            Some(top) => top.id,
            None => return Err(Error::Config("symbol table must not be empty".into())),
        };
        let total_weight: u32 = symbols.iter().map(|s| s.weight).sum();
        if total_weight == 0 {
            return Err(Error::Config("symbol weights must not sum to zero".into()));
        }
        Ok(Self {
            symbols,
            total_weight,
            jackpot_symbol,
        })
    }

    /// The production reel strip: eight symbols, total weight 107.
    pub fn standard() -> Self {
        let symbols = vec![
            Symbol::new(SymbolId::Cherry, "Cherry", 2, 30),
            Symbol::new(SymbolId::Lemon, "Lemon", 3, 25),
            Symbol::new(SymbolId::Orange, "Orange", 4, 20),
            Symbol::new(SymbolId::Plum, "Plum", 5, 15),
            Symbol::new(SymbolId::Bell, "Bell", 8, 8),
            Symbol::new(SymbolId::Diamond, "Diamond", 15, 5),
            Symbol::new(SymbolId::Seven, "Lucky Seven", 25, 3),
            Symbol::new(SymbolId::Crown, "Crown", 50, 1),
        ];
        let total_weight = symbols.iter().map(|s| s.weight).sum();
        Self {
            symbols,
            total_weight,
            jackpot_symbol: SymbolId::Crown,
        }
    }

    /// One weighted draw: a uniform point in `[0, total_weight)` walked
    /// down the table, subtracting each weight until it crosses zero.
    /// Falls back to the first (most common) symbol if floating-point
    /// subtraction exhausts the list without crossing; the fallback is a
    /// safety net, not an error path.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> SymbolId {
        let mut remainder = rng.gen::<f64>() * self.total_weight as f64;
        for symbol in &self.symbols {
            remainder -= symbol.weight as f64;
            if remainder <= 0.0 {
                return symbol.id;
            }
        }
        self.symbols[0].id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn jackpot_symbol(&self) -> SymbolId {
        self.jackpot_symbol
    }
}
