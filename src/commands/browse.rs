//! emf browse コマンド
//!
//! カタログを TUI で表示し、対話的に絞り込む。

use super::describe;
use crate::tui;
use clap::Parser;
use edit_menu_filter::catalog::ItemCatalog;
use edit_menu_filter::FilterContext;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Item catalog (JSON)
    #[arg(long)]
    pub items: PathBuf,
}

pub fn run(args: Args, ctx: &FilterContext) -> Result<(), String> {
    let fs = ctx.fs();
    let catalog = ItemCatalog::load(fs.as_ref(), &args.items).map_err(describe)?;
    tui::run(&catalog, ctx).map_err(describe)
}
