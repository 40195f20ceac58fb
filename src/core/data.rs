//! Core data structures for the lookup tables
//!
//! Each table is a single ordered sequence of records. Pairing a name
//! with its value in one record keeps index correspondence structural
//! instead of relying on two separately indexed arrays staying in sync.

use serde::{Deserialize, Serialize};

/// One row of the score table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i32,
}

/// One row of the price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub item: String,
    pub cost: f64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl PriceEntry {
    pub fn new(item: impl Into<String>, cost: f64) -> Self {
        Self {
            item: item.into(),
            cost,
        }
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

impl std::fmt::Display for PriceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.item, self.cost)
    }
}

/// The built-in score table: five contestants, constructed once,
/// never mutated.
pub fn demo_scores() -> Vec<ScoreEntry> {
    vec![
        ScoreEntry::new("Ana", 12),
        ScoreEntry::new("Ben", 22),
        ScoreEntry::new("Ming", 18),
        ScoreEntry::new("Lila", 31),
        ScoreEntry::new("Kai", 15),
    ]
}

/// The built-in price table: four stationery items.
pub fn demo_prices() -> Vec<PriceEntry> {
    vec![
        PriceEntry::new("Pen", 1.25),
        PriceEntry::new("Notebook", 3.50),
        PriceEntry::new("Eraser", 0.99),
        PriceEntry::new("Pencil", 0.75),
    ]
}
