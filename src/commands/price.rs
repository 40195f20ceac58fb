use anyhow::Result;

use crate::cli::PriceArgs;
use crate::core::data::demo_prices;
use crate::core::lookup::find_item;
use crate::utils::interactive::prompt_input;

pub fn handle_price_command(args: &PriceArgs) -> Result<()> {
    let prices = demo_prices();

    let wanted = match &args.item {
        Some(item) => item.clone(),
        None => prompt_input("What: ")?,
    };

    // An unmatched name propagates straight to the binary boundary.
    let idx = find_item(&prices, &wanted)?;
    println!("{}", prices[idx].cost);

    Ok(())
}
