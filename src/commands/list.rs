use anyhow::Result;

use crate::cli::{ListArgs, ListFormat, TableKind};
use crate::core::data::{demo_prices, demo_scores};
use crate::utils::output::DisplayFormatter;

pub fn handle_list_command(args: &ListArgs) -> Result<()> {
    let format = args.format.unwrap_or(ListFormat::Simple);

    if args.table.is_none() || args.table == Some(TableKind::Scores) {
        DisplayFormatter::format_scores(&demo_scores(), format)?;
    }

    if args.table.is_none() || args.table == Some(TableKind::Prices) {
        if args.table.is_none() {
            println!();
        }
        DisplayFormatter::format_prices(&demo_prices(), format)?;
    }

    Ok(())
}
