//! 絞り込みブラウザの描画処理

use super::app::{Focus, MenuTab, Model};
use edit_menu_filter::{FilterMode, MenuKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};

/// 中央に置くポップアップ領域を計算
fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// UI をレンダリング
pub(super) fn draw(f: &mut Frame, model: &mut Model) {
    f.render_widget(Clear, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // 入力欄
            Constraint::Length(1), // オプション
            Constraint::Min(1),    // アイテム一覧
            Constraint::Length(1), // ステータス/ヘルプ
        ])
        .split(f.area());

    render_tab_bar(f, model, chunks[0]);
    render_input(f, model, chunks[1]);
    render_options(f, model.tab(), chunks[2]);
    render_items(f, model.tab_mut(), chunks[3]);
    render_help(f, model, chunks[4]);

    if model.tab().view.show_detail {
        render_detail(f, model.tab());
    }
    if model.focus == Focus::History {
        render_history(f, model);
    }
}

/// タブバー（メニュー種別）
fn render_tab_bar(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<&str> = MenuKind::all().iter().map(|k| k.title()).collect();
    let tabs = Tabs::new(titles)
        .select(model.current)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// 検索語の入力欄
fn render_input(f: &mut Frame, model: &Model, area: Rect) {
    let focused = model.focus == Focus::Input;
    let text = &model.tab().view.query_text;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if focused {
        format!("{}█", text)
    } else {
        text.clone()
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    f.render_widget(input, area);
}

/// オプションの ON/OFF 表示
fn render_options(f: &mut Frame, tab: &MenuTab, area: Rect) {
    let options = tab.session.options();
    let on = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let off = Style::default().fg(Color::DarkGray);
    let flag = |enabled: bool| if enabled { on } else { off };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("[F2 {}]", options.mode.label()),
            flag(options.mode == FilterMode::And),
        ),
        Span::raw(" "),
        Span::styled("[F3 Aa]", flag(options.ignore_case)),
        Span::raw(" "),
        Span::styled("[F4 Desc]", flag(options.include_description)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// アイテム一覧
fn render_items(f: &mut Frame, tab: &mut MenuTab, area: Rect) {
    let category = tab.category_name().unwrap_or("-").to_string();
    let total = tab.items.items().len();

    if tab.view.scroll_hidden {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", category));
        let loading = Paragraph::new("  Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    let visible = tab.visible_items();
    let title = format!(" {} ({}/{}) ", category, visible.len(), total);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.display_name.clone()),
                Span::styled(
                    format!("  {}", item.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut tab.view.list_state);
}

/// ステータス行（エラーがあればそちらを優先）
fn render_help(f: &mut Frame, model: &Model, area: Rect) {
    let line = match &model.status {
        Some(status) => Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Red)),
        None => {
            let help = match model.focus {
                Focus::Input => " Enter: filter · Esc: clear/quit · ↓: list · F5: history · Tab: menu · PgUp/PgDn: category",
                Focus::List => " ↑/↓: move · Enter: details · ←/→: category · x: clear · /: search · q: quit",
                Focus::History => " ↑/↓: move · Enter: select · Esc: close",
            };
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
        }
    };
    f.render_widget(line, area);
}

/// 選択中アイテムの説明ポップアップ
fn render_detail(f: &mut Frame, tab: &MenuTab) {
    let Some(item) = tab.selected_item() else {
        return;
    };
    let area = popup_rect(50, 8, f.area());
    f.render_widget(Clear, area);
    let detail = Paragraph::new(item.description.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", item.display_name)),
        );
    f.render_widget(detail, area);
}

/// 検索履歴ポップアップ
fn render_history(f: &mut Frame, model: &mut Model) {
    let entries: Vec<ListItem> = model
        .tab()
        .session
        .history()
        .iter()
        .map(|entry| ListItem::new(entry.clone()))
        .collect();
    let height = (entries.len() as u16).min(12) + 2;
    let area = popup_rect(40, height, f.area());
    f.render_widget(Clear, area);

    let list = List::new(entries)
        .block(Block::default().borders(Borders::ALL).title(" History "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut model.history_state);
}
