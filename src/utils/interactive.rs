use anyhow::Result;
use std::io::{self, Write};

/// Print `prompt` without a newline and read one line from stdin.
///
/// Only the trailing line terminator is stripped. Interior and edge
/// whitespace is preserved so exact-match lookups stay exact.
pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    while input.ends_with('\n') || input.ends_with('\r') {
        input.pop();
    }

    Ok(input)
}
