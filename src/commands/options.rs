//! emf options コマンド
//!
//! 引数なしなら現在の設定を表示し、指定があれば変更して保存する。

use super::describe;
use clap::Parser;
use edit_menu_filter::{FilterConfig, FilterContext, FilterMode, MenuKind};

#[derive(Debug, Parser)]
pub struct Args {
    /// Menu kind whose options are shown or changed
    #[arg(long, value_enum, default_value_t = MenuKind::Menu)]
    pub kind: MenuKind,

    /// Combine words with AND or OR
    #[arg(long, value_enum)]
    pub mode: Option<FilterMode>,

    /// Ignore case, full/half width and kana type
    #[arg(long)]
    pub ignore_case: Option<bool>,

    /// Also search item descriptions
    #[arg(long)]
    pub desc: Option<bool>,

    /// Maximum number of history entries
    #[arg(long)]
    pub history_max: Option<usize>,
}

impl Args {
    fn has_changes(&self) -> bool {
        self.mode.is_some()
            || self.ignore_case.is_some()
            || self.desc.is_some()
            || self.history_max.is_some()
    }

    fn apply_to(&self, config: &mut FilterConfig) {
        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        if let Some(ignore_case) = self.ignore_case {
            config.ignore_case = ignore_case;
        }
        if let Some(desc) = self.desc {
            config.filter_desc = desc;
        }
        if let Some(max) = self.history_max {
            config.history_max = max;
        }
    }
}

pub fn run(args: Args, ctx: &FilterContext) -> Result<(), String> {
    let mut store = ctx.open_config(args.kind);

    if args.has_changes() {
        store.update(|config| args.apply_to(config)).map_err(describe)?;
    }

    let config = store.config();
    println!("kind:         {}", args.kind);
    println!("mode:         {}", config.options().mode.label());
    println!("ignore-case:  {}", config.ignore_case);
    println!("desc:         {}", config.filter_desc);
    println!("history-max:  {}", config.history_max);
    println!("history:      {} entr(ies)", config.history.len());
    Ok(())
}
