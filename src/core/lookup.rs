//! The two linear scans: highest score and exact item match.
//!
//! Both are single-pass pure functions over their input slice; neither
//! mutates anything or touches the outside world.

use thiserror::Error;

use crate::core::data::{PriceEntry, ScoreEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Item not found")]
    NotFound,
}

/// Index of the highest-scoring entry, or `None` for an empty table.
///
/// Replacement happens only on a strictly greater score, so among equal
/// maxima the first occurrence keeps the spot.
pub fn top_index(entries: &[ScoreEntry]) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    let mut best = 0;
    for i in 1..entries.len() {
        if entries[i].score > entries[best].score {
            best = i;
        }
    }
    Some(best)
}

/// Index of the first entry whose item name equals `wanted` exactly.
///
/// Matching is case-sensitive with no trimming or normalization. When the
/// table contains duplicate names, the lowest matching index wins.
pub fn find_item(entries: &[PriceEntry], wanted: &str) -> Result<usize, LookupError> {
    entries
        .iter()
        .position(|entry| entry.item == wanted)
        .ok_or(LookupError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{demo_prices, demo_scores};

    fn scores(values: &[i32]) -> Vec<ScoreEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoreEntry::new(format!("p{}", i), score))
            .collect()
    }

    #[test]
    fn test_top_index_demo_roster() {
        let roster = demo_scores();
        let idx = top_index(&roster).unwrap();
        assert_eq!(idx, 3);
        assert_eq!(roster[idx].name, "Lila");
        assert_eq!(roster[idx].score, 31);
    }

    #[test]
    fn test_top_index_is_maximal_and_first() {
        let table = scores(&[7, 31, 2, 31, 31]);
        let idx = top_index(&table).unwrap();
        assert!(table.iter().all(|e| e.score <= table[idx].score));
        // Smallest index among equal maxima
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_top_index_single_element() {
        assert_eq!(top_index(&scores(&[42])), Some(0));
    }

    #[test]
    fn test_top_index_empty() {
        assert_eq!(top_index(&[]), None);
    }

    #[test]
    fn test_top_index_idempotent() {
        let table = scores(&[12, 22, 18, 31, 15]);
        assert_eq!(top_index(&table), top_index(&table));
    }

    #[test]
    fn test_find_item_demo_prices() {
        let prices = demo_prices();
        let idx = find_item(&prices, "Eraser").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(prices[idx].cost, 0.99);
    }

    #[test]
    fn test_find_item_not_found() {
        let prices = demo_prices();
        let err = find_item(&prices, "Stapler").unwrap_err();
        assert_eq!(err, LookupError::NotFound);
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn test_find_item_case_sensitive() {
        let prices = vec![PriceEntry::new("Pen", 1.25)];
        assert_eq!(find_item(&prices, "pen"), Err(LookupError::NotFound));
        assert_eq!(find_item(&prices, "Pen"), Ok(0));
    }

    #[test]
    fn test_find_item_no_trimming() {
        let prices = demo_prices();
        assert_eq!(find_item(&prices, " Pen"), Err(LookupError::NotFound));
        assert_eq!(find_item(&prices, "Pen "), Err(LookupError::NotFound));
    }

    #[test]
    fn test_find_item_duplicates_first_wins() {
        let prices = vec![
            PriceEntry::new("Pen", 1.25),
            PriceEntry::new("Pen", 9.99),
        ];
        assert_eq!(find_item(&prices, "Pen"), Ok(0));
    }

    #[test]
    fn test_find_item_idempotent() {
        let prices = demo_prices();
        assert_eq!(find_item(&prices, "Pencil"), find_item(&prices, "Pencil"));
    }
}
