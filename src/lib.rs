//! Tabscan - lookup drills over small in-memory tables
//!
//! This library provides the core functionality for the tabscan CLI:
//! the record tables, the two linear scans over them, and the display
//! and interaction helpers.

pub mod cli;
pub mod commands;
pub mod core;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    data::{PriceEntry, ScoreEntry, demo_prices, demo_scores},
    lookup::{LookupError, find_item, top_index},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
