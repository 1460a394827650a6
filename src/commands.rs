use crate::cli::{Cli, Command};
use edit_menu_filter::error::FilterError;
use edit_menu_filter::FilterContext;
use owo_colors::OwoColorize;

pub mod browse;
pub mod filter;
pub mod history;
pub mod options;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    let ctx = FilterContext::resolve(cli.data_dir)?;
    match cli.command {
        Command::Filter(args) => filter::run(args, &ctx),
        Command::History(args) => history::run(args, &ctx),
        Command::Options(args) => options::run(args, &ctx),
        Command::Browse(args) => browse::run(args, &ctx),
    }
}

/// ライブラリのエラーを CLI 向けの文字列へ
pub(crate) fn describe(err: FilterError) -> String {
    let code = err.code();
    format!(
        "{}: {}\n  {} {}",
        format!("error[{}]", code.as_str()).red(),
        err,
        "=".dimmed(),
        code.cause().dimmed()
    )
}
