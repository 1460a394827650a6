//! 絞り込みブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: メニュー種別ごとのタブとフォーカス
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新
//!
//! このブラウザがホスト役になり、カテゴリ切り替えでアイテムを作り直す。
//! 新しいアイテムは次のフレームで揃う（ゲーム側の挙動に合わせる）。

use crossterm::event::KeyCode;
use edit_menu_filter::catalog::{Category, ItemCatalog};
use edit_menu_filter::error::Result;
use edit_menu_filter::{
    FilterContext, FilterSession, Item, ItemCollection, MenuKind, OptionId, ViewHooks,
};
use ratatui::widgets::ListState;

// ============================================================================
// TuiView（セッションからの依頼を受ける）
// ============================================================================

/// 画面側の状態
#[derive(Debug, Default)]
pub struct TuiView {
    /// リストの選択・スクロール位置（表示中アイテムのインデックス）
    pub list_state: ListState,
    /// 作り直し中でリストを隠しているか
    pub scroll_hidden: bool,
    /// 入力欄の文字列
    pub query_text: String,
    /// 入力欄にフォーカスしているか
    pub input_focused: bool,
    /// 説明ポップアップを表示しているか
    pub show_detail: bool,
}

impl ViewHooks for TuiView {
    fn relayout(&mut self) {}

    fn reset_scroll_position(&mut self) {
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }

    fn dismiss_hover_tooltip(&mut self) {
        self.show_detail = false;
    }

    fn set_scroll_region_hidden(&mut self, hidden: bool) {
        self.scroll_hidden = hidden;
    }

    fn set_query_text(&mut self, text: &str) {
        self.query_text = text.to_string();
    }

    fn clear_input_focus(&mut self) {
        self.input_focused = false;
    }
}

// ============================================================================
// MenuTab（メニュー種別1つ分）
// ============================================================================

/// メニュー種別1つ分のタブ
pub struct MenuTab {
    pub kind: MenuKind,
    pub categories: Vec<Category>,
    pub category_index: usize,
    pub items: ItemCollection,
    pub session: FilterSession,
    pub view: TuiView,
    /// 次のフレームで並べるアイテム
    pending_population: Option<Vec<Item>>,
}

impl MenuTab {
    fn new(kind: MenuKind, catalog: &ItemCatalog, ctx: &FilterContext) -> Result<Self> {
        let categories: Vec<Category> = catalog.categories_of(kind).into_iter().cloned().collect();
        let mut view = TuiView {
            input_focused: true,
            ..TuiView::default()
        };
        view.reset_scroll_position();
        let session = FilterSession::install(kind, ctx, &view)?;
        let items = ItemCollection::with_items(
            kind,
            categories.first().map(Category::to_items).unwrap_or_default(),
        );

        Ok(Self {
            kind,
            categories,
            category_index: 0,
            items,
            session,
            view,
            pending_population: None,
        })
    }

    pub fn category_name(&self) -> Option<&str> {
        self.categories
            .get(self.category_index)
            .map(|c| c.name.as_str())
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        self.items.visible_items().collect()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        let index = self.view.list_state.selected()?;
        self.items.visible_items().nth(index)
    }

    /// カテゴリを切り替える（アイテムを作り直す）
    fn switch_category(&mut self, index: usize) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = index % self.categories.len();
        self.items.clear();
        self.session.on_collection_rebuilt(&mut self.view);
        self.pending_population = Some(self.categories[self.category_index].to_items());
        self.view.reset_scroll_position();
    }

    fn tick(&mut self) {
        // 保留中の再適用を先に確認し、アイテムはその後に並ぶ
        self.session.tick(&mut self.items, &mut self.view);
        if let Some(items) = self.pending_population.take() {
            self.items.rebuild(items);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.items.visible_items().count();
        if len == 0 {
            self.view.list_state.select(None);
            return;
        }
        let current = self.view.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.view.list_state.select(Some(next));
    }
}

// ============================================================================
// Focus / Msg
// ============================================================================

/// キー入力の行き先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
    History,
}

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// フレーム更新
    Tick,
    /// 次のタブへ
    NextTab,
    /// 前のタブへ
    PrevTab,
    /// 次のカテゴリへ
    NextCategory,
    /// 前のカテゴリへ
    PrevCategory,
    /// 文字入力
    Input(char),
    /// 文字削除
    Backspace,
    /// 入力確定
    Submit,
    /// ×ボタン
    Clear,
    /// オプション切り替え
    Toggle(OptionId),
    /// 入力欄へ
    FocusInput,
    /// リストへ
    FocusList,
    /// リスト上下
    ListMove(isize),
    /// 説明ポップアップの表示切り替え
    ToggleDetail,
    /// 履歴ポップアップを開く
    OpenHistory,
    /// 履歴ポップアップを閉じる
    CloseHistory,
    /// 履歴の上下
    HistoryMove(isize),
    /// 履歴を選ぶ
    HistorySelect,
}

// ============================================================================
// Model
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub tabs: Vec<MenuTab>,
    pub current: usize,
    pub focus: Focus,
    pub history_state: ListState,
    pub should_quit: bool,
    /// 直近のエラー
    pub status: Option<String>,
}

impl Model {
    pub fn new(catalog: &ItemCatalog, ctx: &FilterContext) -> Result<Self> {
        let tabs = MenuKind::all()
            .iter()
            .map(|kind| MenuTab::new(*kind, catalog, ctx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tabs,
            current: 0,
            focus: Focus::Input,
            history_state: ListState::default(),
            should_quit: false,
            status: None,
        })
    }

    pub fn tab(&self) -> &MenuTab {
        &self.tabs[self.current]
    }

    pub fn tab_mut(&mut self) -> &mut MenuTab {
        &mut self.tabs[self.current]
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        // どのフォーカスでも共通
        match key {
            KeyCode::F(2) => return Some(Msg::Toggle(OptionId::Mode)),
            KeyCode::F(3) => return Some(Msg::Toggle(OptionId::IgnoreCase)),
            KeyCode::F(4) => return Some(Msg::Toggle(OptionId::IncludeDescription)),
            KeyCode::Tab if self.focus != Focus::History => return Some(Msg::NextTab),
            KeyCode::BackTab if self.focus != Focus::History => return Some(Msg::PrevTab),
            KeyCode::PageDown => return Some(Msg::NextCategory),
            KeyCode::PageUp => return Some(Msg::PrevCategory),
            _ => {}
        }

        match self.focus {
            Focus::History => match key {
                KeyCode::Esc | KeyCode::F(5) => Some(Msg::CloseHistory),
                KeyCode::Enter => Some(Msg::HistorySelect),
                KeyCode::Up => Some(Msg::HistoryMove(-1)),
                KeyCode::Down => Some(Msg::HistoryMove(1)),
                _ => None,
            },
            Focus::Input => match key {
                KeyCode::Esc if !self.tab().view.query_text.is_empty() => Some(Msg::Clear),
                KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Enter => Some(Msg::Submit),
                KeyCode::Down => Some(Msg::FocusList),
                KeyCode::Backspace => Some(Msg::Backspace),
                KeyCode::F(5) => Some(Msg::OpenHistory),
                KeyCode::Char(c) => Some(Msg::Input(c)),
                _ => None,
            },
            Focus::List => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('/') | KeyCode::Esc => Some(Msg::FocusInput),
                KeyCode::Up => Some(Msg::ListMove(-1)),
                KeyCode::Down => Some(Msg::ListMove(1)),
                KeyCode::Left => Some(Msg::PrevCategory),
                KeyCode::Right => Some(Msg::NextCategory),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::ToggleDetail),
                KeyCode::Char('x') => Some(Msg::Clear),
                KeyCode::F(5) => Some(Msg::OpenHistory),
                _ => None,
            },
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Tick => {
            for tab in &mut model.tabs {
                tab.tick();
            }
        }
        Msg::NextTab => {
            model.current = model.tab().kind.next().index();
            model.focus = Focus::Input;
        }
        Msg::PrevTab => {
            model.current = model.tab().kind.prev().index();
            model.focus = Focus::Input;
        }
        Msg::NextCategory => {
            let tab = model.tab_mut();
            tab.switch_category(tab.category_index + 1);
        }
        Msg::PrevCategory => {
            let tab = model.tab_mut();
            let len = tab.categories.len().max(1);
            tab.switch_category(tab.category_index + len - 1);
        }
        Msg::Input(c) => {
            let tab = model.tab_mut();
            let mut text = tab.view.query_text.clone();
            text.push(c);
            set_input(tab, text);
        }
        Msg::Backspace => {
            let tab = model.tab_mut();
            let mut text = tab.view.query_text.clone();
            text.pop();
            set_input(tab, text);
        }
        Msg::Submit => {
            let tab = model.tab_mut();
            let text = tab.view.query_text.clone();
            let result = tab.session.on_query_submitted(&text, &mut tab.items, &mut tab.view);
            record(model, result);
        }
        Msg::Clear => {
            let tab = model.tab_mut();
            tab.session.on_clear_requested(&mut tab.items, &mut tab.view);
            model.focus = Focus::Input;
        }
        Msg::Toggle(option) => {
            let tab = model.tab_mut();
            let result = tab.session.on_option_toggled(option, &mut tab.items, &mut tab.view);
            record(model, result);
        }
        Msg::FocusInput => {
            model.focus = Focus::Input;
            model.tab_mut().view.input_focused = true;
        }
        Msg::FocusList => {
            model.focus = Focus::List;
            model.tab_mut().view.input_focused = false;
        }
        Msg::ListMove(delta) => model.tab_mut().move_selection(delta),
        Msg::ToggleDetail => {
            let view = &mut model.tab_mut().view;
            view.show_detail = !view.show_detail;
        }
        Msg::OpenHistory => {
            if !model.tab().session.history().is_empty() {
                model.focus = Focus::History;
                model.history_state.select(Some(0));
            }
        }
        Msg::CloseHistory => model.focus = Focus::Input,
        Msg::HistoryMove(delta) => {
            let len = model.tab().session.history().len();
            if len > 0 {
                let current = model.history_state.selected().unwrap_or(0) as isize;
                let next = (current + delta).clamp(0, len as isize - 1) as usize;
                model.history_state.select(Some(next));
            }
        }
        Msg::HistorySelect => {
            let index = model.history_state.selected().unwrap_or(0);
            let selected = model.tab().session.history().get(index).cloned();
            model.focus = Focus::Input;
            if let Some(text) = selected {
                let tab = model.tab_mut();
                let result = tab.session.on_history_selected(&text, &mut tab.items, &mut tab.view);
                record(model, result);
            }
        }
    }
}

/// 入力欄の変更をセッションへ伝える
fn set_input(tab: &mut MenuTab, text: String) {
    tab.session
        .on_query_text_changed(&text, &mut tab.items, &mut tab.view);
    tab.view.query_text = text;
}

/// 保存エラーをステータス行に残す
fn record(model: &mut Model, result: Result<()>) {
    model.status = result.err().map(|e| format!("error[{}]: {}", e.code().as_str(), e));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
