use anyhow::Result;

use crate::core::data::demo_scores;
use crate::core::lookup::top_index;

pub fn handle_top_command() -> Result<()> {
    let roster = demo_scores();

    // The built-in roster is never empty; an empty table simply prints
    // nothing rather than inventing an error kind for it.
    if let Some(idx) = top_index(&roster) {
        let winner = &roster[idx];
        println!("{} {}", winner.name, winner.score);
    }

    Ok(())
}
