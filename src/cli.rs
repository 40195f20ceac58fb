use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands::{list, price, top};

#[derive(Parser)]
#[command(name = "tabscan")]
#[command(about = "Lookup drills over small built-in score and price tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Top => {
                top::handle_top_command()?;
            }
            Commands::Price(args) => {
                price::handle_price_command(&args)?;
            }
            Commands::List(args) => {
                list::handle_list_command(&args)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the top scorer as "<name> <score>"
    Top,

    /// Look up the price of an item
    Price(PriceArgs),

    /// Show the built-in tables
    List(ListArgs),
}

#[derive(Args)]
pub struct PriceArgs {
    #[arg(help = "Item name; prompts interactively when omitted")]
    pub item: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(help = "Which table to show (both when omitted)")]
    pub table: Option<TableKind>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum TableKind {
    Scores,
    Prices,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ListFormat {
    Simple,
    Table,
    Json,
}
