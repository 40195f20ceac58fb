use anyhow::Result;
use colored::*;

use crate::cli::ListFormat;
use crate::core::data::{PriceEntry, ScoreEntry};

pub struct OutputStyle;

impl OutputStyle {
    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(30)
    }
}

/// Display formatter for the built-in tables
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn format_scores(entries: &[ScoreEntry], format: ListFormat) -> Result<()> {
        let rows = score_rows(entries);
        Self::format_rows("🏅 Scores", "Name", "Score", &rows, format, entries)
    }

    pub fn format_prices(entries: &[PriceEntry], format: ListFormat) -> Result<()> {
        let rows = price_rows(entries);
        Self::format_rows("🛒 Prices", "Item", "Cost", &rows, format, entries)
    }

    fn format_rows<T: serde::Serialize>(
        title: &str,
        key_header: &str,
        value_header: &str,
        rows: &[(String, String)],
        format: ListFormat,
        entries: &[T],
    ) -> Result<()> {
        if rows.is_empty() {
            println!("{}", OutputStyle::muted("No rows."));
            return Ok(());
        }

        match format {
            ListFormat::Simple => Self::print_simple(title, rows),
            ListFormat::Table => Self::print_table(key_header, value_header, rows),
            ListFormat::Json => Self::print_json(entries)?,
        }

        Ok(())
    }

    fn print_simple(title: &str, rows: &[(String, String)]) {
        println!("{} ({} rows)", OutputStyle::header(title), rows.len());
        println!("{}", OutputStyle::separator());

        for (key, value) in rows {
            println!("{:>10}  {}", OutputStyle::label(key), value);
        }
    }

    fn print_table(key_header: &str, value_header: &str, rows: &[(String, String)]) {
        let mut key_width = key_header.len();
        let mut value_width = value_header.len();
        for (key, value) in rows {
            key_width = key_width.max(key.len());
            value_width = value_width.max(value.len());
        }

        println!(
            "┌─{}─┬─{}─┐",
            "─".repeat(key_width),
            "─".repeat(value_width)
        );
        println!(
            "│ {:<key_width$} │ {:<value_width$} │",
            OutputStyle::header(key_header),
            OutputStyle::header(value_header),
        );
        println!(
            "├─{}─┼─{}─┤",
            "─".repeat(key_width),
            "─".repeat(value_width)
        );

        for (key, value) in rows {
            println!("│ {:<key_width$} │ {:>value_width$} │", key, value);
        }

        println!(
            "└─{}─┴─{}─┘",
            "─".repeat(key_width),
            "─".repeat(value_width)
        );
    }

    fn print_json<T: serde::Serialize>(entries: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        println!("{}", json);
        Ok(())
    }
}

fn score_rows(entries: &[ScoreEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.name.clone(), e.score.to_string()))
        .collect()
}

fn price_rows(entries: &[PriceEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.item.clone(), e.cost.to_string()))
        .collect()
}
