//! emf history コマンド

use super::describe;
use clap::Parser;
use edit_menu_filter::{FilterContext, MenuKind};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Menu kind whose history is shown
    #[arg(long, value_enum, default_value_t = MenuKind::Menu)]
    pub kind: MenuKind,

    /// Maximum number of entries to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Remove all history entries
    #[arg(long, conflicts_with = "limit")]
    pub clear: bool,
}

pub fn run(args: Args, ctx: &FilterContext) -> Result<(), String> {
    let mut store = ctx.open_config(args.kind);

    if args.clear {
        let cleared = store.clear_history().map_err(describe)?;
        if cleared {
            println!("{} Cleared {} history", "✓".green(), args.kind);
        } else {
            println!("{} {} history is already empty", "•".yellow(), args.kind);
        }
        return Ok(());
    }

    let limit = args.limit.unwrap_or(store.config().history_max);
    let entries = store.history(limit);
    if entries.is_empty() {
        println!("No {} history", args.kind);
        return Ok(());
    }
    for (rank, entry) in entries.iter().enumerate() {
        println!("{:>3}  {}", (rank + 1).dimmed(), entry);
    }
    Ok(())
}
