//! emf filter コマンド
//!
//! カタログのアイテムに検索語を適用し、表示されるアイテムを一覧する。
//! 検索語は確定扱いなので履歴にも残る。

use super::describe;
use crate::output::FilterSummary;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use edit_menu_filter::catalog::ItemCatalog;
use edit_menu_filter::{FilterContext, FilterSession, ItemCollection, MenuKind, NoopView};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Item catalog (JSON)
    #[arg(long)]
    pub items: PathBuf,

    /// Menu kind whose settings and history are used
    #[arg(long, value_enum, default_value_t = MenuKind::Menu)]
    pub kind: MenuKind,

    /// Only filter this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output visible items in JSON format
    #[arg(long)]
    pub json: bool,

    /// Search phrase (words are combined with the saved AND/OR mode)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

pub fn run(args: Args, ctx: &FilterContext) -> Result<(), String> {
    let fs = ctx.fs();
    let catalog = ItemCatalog::load(fs.as_ref(), &args.items).map_err(describe)?;
    let records = catalog
        .items_for(args.kind, args.category.as_deref())
        .map_err(describe)?;

    let mut items = ItemCollection::with_items(args.kind, records);
    let mut view = NoopView;
    let mut session = FilterSession::install(args.kind, ctx, &view).map_err(describe)?;

    let query = args.query.join(" ");
    session
        .on_query_submitted(&query, &mut items, &mut view)
        .map_err(describe)?;

    if args.json {
        let visible: Vec<_> = items.visible_items().collect();
        let json = serde_json::to_string_pretty(&visible).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    print_table(&items);
    let summary = FilterSummary::format(items.visible_items().count(), items.items().len());
    println!("{} {}", summary.prefix, summary.message);
    Ok(())
}

fn print_table(items: &ItemCollection) {
    let visible: Vec<_> = items.visible_items().collect();
    if visible.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "File", "Description"]);
    for item in visible {
        table.add_row(vec![
            item.display_name.as_str(),
            item.id.as_str(),
            item.description.as_str(),
        ]);
    }
    println!("{table}");
}
