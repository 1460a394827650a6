//! 絞り込みブラウザ TUI
//!
//! カタログのアイテムをメニュー種別ごとのタブで表示し、検索語で絞り込む。
//!
//! ## モジュール構成
//!
//! - `app`: アプリケーション状態（Model, Msg, update）
//! - `render`: 画面描画

mod app;
mod render;

use app::{Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use edit_menu_filter::catalog::ItemCatalog;
use edit_menu_filter::error::FilterError;
use edit_menu_filter::FilterContext;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::time::Duration;

/// 1フレームの長さ
const FRAME: Duration = Duration::from_millis(50);

/// TUI を実行
pub fn run(catalog: &ItemCatalog, ctx: &FilterContext) -> Result<(), FilterError> {
    let mut model = Model::new(catalog, ctx)?;

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut model);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(result?)
}

/// メインループ
///
/// キー入力がなくてもフレームごとに `Tick` を送り、作り直し待ちの再適用を進める。
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, model: &mut Model) -> io::Result<()> {
    while !model.should_quit {
        app::update(model, Msg::Tick);
        terminal.draw(|f| render::draw(f, model))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        app::update(model, msg);
                    }
                }
            }
        }
    }
    Ok(())
}
