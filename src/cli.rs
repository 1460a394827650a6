use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, filter, history, options};

#[derive(Debug, Parser)]
#[command(name = "emf")]
#[command(about = "Edit menu item filter", long_about = None)]
pub struct Cli {
    /// Directory holding the per-menu settings files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログのアイテムを検索語で絞り込む
    Filter(filter::Args),

    /// 検索履歴の表示・消去
    History(history::Args),

    /// 検索オプションの表示・変更
    Options(options::Args),

    /// 対話的にアイテムを絞り込む
    Browse(browse::Args),
}
