//! 絞り込みセッション
//!
//! アイテム集合に対して表示/非表示を適用・解除する状態機械。
//!
//! - `Idle`: 絞り込みなし（全アイテム表示）
//! - `Filtered`: 空でないクエリを適用中
//!
//! ホストがアイテムを作り直した場合（カテゴリ切り替えなど）は、
//! 新しいアイテムが揃うのを待って最後のクエリを再適用する。

use crate::config::{ConfigStore, FilterConfig};
use crate::context::FilterContext;
use crate::error::{FilterError, Result};
use crate::gate::ReadinessGate;
use crate::item::ItemProvider;
use crate::kind::MenuKind;
use crate::matcher::TokenMatcher;
use crate::query::{FilterOptions, FilterQuery, OptionId};
use crate::view::ViewHooks;

/// セッションの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Idle,
    Filtered(FilterQuery),
}

/// メニュー1つ分の絞り込みセッション
pub struct FilterSession {
    kind: MenuKind,
    matcher: TokenMatcher,
    store: ConfigStore,
    gate: ReadinessGate<FilterQuery>,
    state: FilterState,
    input_text: String,
}

impl FilterSession {
    pub fn new(kind: MenuKind, store: ConfigStore, matcher: TokenMatcher) -> Self {
        Self {
            kind,
            matcher,
            store,
            gate: ReadinessGate::new(),
            state: FilterState::Idle,
            input_text: String::new(),
        }
    }

    /// ホスト UI に取り付ける
    ///
    /// 必要な要素が見つからなければこのインスタンスだけ初期化を中止する。
    pub fn install(kind: MenuKind, ctx: &FilterContext, view: &dyn ViewHooks) -> Result<Self> {
        if let Some(element) = view.missing_elements().into_iter().next() {
            log::error!("[EditMenuFilter] failed to initialize {kind} filter: {element} not found");
            return Err(FilterError::MissingHostElement { kind, element });
        }
        Ok(Self::new(kind, ctx.open_config(kind), TokenMatcher::default()))
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.state, FilterState::Filtered(_))
    }

    /// 最後に適用したクエリ
    pub fn last_query(&self) -> Option<&FilterQuery> {
        match &self.state {
            FilterState::Filtered(query) => Some(query),
            FilterState::Idle => None,
        }
    }

    /// 作り直し後の再適用待ちか
    pub fn is_reapply_pending(&self) -> bool {
        self.gate.is_pending()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn options(&self) -> FilterOptions {
        self.store.options()
    }

    pub fn config(&self) -> &FilterConfig {
        self.store.config()
    }

    /// 表示用の履歴（最大数まで）
    pub fn history(&self) -> &[String] {
        self.store.history(self.store.config().history_max)
    }

    // ========================================================================
    // 状態遷移
    // ========================================================================

    /// クエリを適用
    ///
    /// トークンが空なら全表示して `Idle`、そうでなければ一致するものだけ表示して `Filtered`。
    pub fn apply(&mut self, text: &str, items: &mut dyn ItemProvider, view: &mut dyn ViewHooks) {
        let query = FilterQuery::parse(text);

        if query.is_empty() {
            self.show_all(items);
            self.state = FilterState::Idle;
            if self.gate.cancel().is_some() {
                view.set_scroll_region_hidden(false);
            }
            log::debug!("{} filter cleared", self.kind);
        } else if self.gate.is_pending() {
            // 作り直し中のアイテムには適用せず、揃ってから適用する
            self.gate.request(query.clone());
            self.state = FilterState::Filtered(query);
        } else {
            self.hide_unmatched(&query, items);
            log::debug!("{} filter applied: {:?}", self.kind, query.tokens());
            self.state = FilterState::Filtered(query);
        }

        self.refresh_view(view);
    }

    /// 絞り込みを解除
    pub fn clear(&mut self, items: &mut dyn ItemProvider, view: &mut dyn ViewHooks) {
        self.apply("", items, view);
        view.clear_input_focus();
    }

    /// オプション変更後、絞り込み中なら同じクエリで適用し直す
    pub fn on_option_changed(&mut self, items: &mut dyn ItemProvider, view: &mut dyn ViewHooks) {
        if let FilterState::Filtered(query) = &self.state {
            let raw = query.raw_text().to_string();
            self.apply(&raw, items, view);
        }
    }

    /// アイテムが作り直された
    ///
    /// 絞り込み中なら、新しいアイテムが揃うまでスクロール領域を隠して再適用を保留する。
    pub fn on_collection_rebuilt(&mut self, view: &mut dyn ViewHooks) {
        if let FilterState::Filtered(query) = &self.state {
            self.gate.request(query.clone());
            view.set_scroll_region_hidden(true);
            log::debug!("{} collection rebuilt, re-apply pending", self.kind);
        }
    }

    /// 毎フレーム呼ぶ。保留中の再適用を実行したら true
    pub fn tick(&mut self, items: &mut dyn ItemProvider, view: &mut dyn ViewHooks) -> bool {
        let Some(query) = self.gate.poll(items.count()) else {
            return false;
        };

        self.hide_unmatched(&query, items);
        self.state = FilterState::Filtered(query);
        self.refresh_view(view);
        view.set_scroll_region_hidden(false);
        true
    }

    // ========================================================================
    // ホストからのイベント
    // ========================================================================

    /// 入力中の文字列が変わった
    ///
    /// 入力中は絞り込まない。空になった時だけ解除する。
    pub fn on_query_text_changed(
        &mut self,
        text: &str,
        items: &mut dyn ItemProvider,
        view: &mut dyn ViewHooks,
    ) {
        self.input_text = text.to_string();
        if FilterQuery::parse(text).is_empty() && (self.is_filtered() || self.gate.is_pending()) {
            self.apply(text, items, view);
        }
    }

    /// 入力が確定した
    pub fn on_query_submitted(
        &mut self,
        text: &str,
        items: &mut dyn ItemProvider,
        view: &mut dyn ViewHooks,
    ) -> Result<()> {
        self.input_text = text.to_string();
        self.apply(text, items, view);
        if self.is_filtered() {
            self.store.record_history(text)?;
        }
        Ok(())
    }

    /// 履歴から選ばれた（入力して確定したのと同じ扱い）
    pub fn on_history_selected(
        &mut self,
        text: &str,
        items: &mut dyn ItemProvider,
        view: &mut dyn ViewHooks,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        view.set_query_text(text);
        self.on_query_submitted(text, items, view)
    }

    /// ×ボタン
    pub fn on_clear_requested(&mut self, items: &mut dyn ItemProvider, view: &mut dyn ViewHooks) {
        self.input_text.clear();
        view.set_query_text("");
        self.clear(items, view);
    }

    /// オプションの ON/OFF ボタン
    ///
    /// 保存に失敗しても表示は新しいオプションで更新してからエラーを返す。
    pub fn on_option_toggled(
        &mut self,
        option: OptionId,
        items: &mut dyn ItemProvider,
        view: &mut dyn ViewHooks,
    ) -> Result<()> {
        let saved = self.store.update(|config| match option {
            OptionId::Mode => config.is_and = !config.is_and,
            OptionId::IgnoreCase => config.ignore_case = !config.ignore_case,
            OptionId::IncludeDescription => config.filter_desc = !config.filter_desc,
        });
        self.on_option_changed(items, view);
        saved
    }

    /// 設定をまとめて変更（履歴最大数など）
    pub fn update_config<F>(
        &mut self,
        f: F,
        items: &mut dyn ItemProvider,
        view: &mut dyn ViewHooks,
    ) -> Result<()>
    where
        F: FnOnce(&mut FilterConfig),
    {
        let saved = self.store.update(f);
        self.on_option_changed(items, view);
        saved
    }

    /// 履歴を消去
    pub fn clear_history(&mut self) -> Result<bool> {
        self.store.clear_history()
    }

    // ========================================================================
    // 内部処理
    // ========================================================================

    fn show_all(&self, items: &mut dyn ItemProvider) {
        for index in 0..items.count() {
            let hidden = match items.item(index) {
                Some(item) if !items.is_excluded(item) => !item.visible,
                _ => continue,
            };
            if hidden {
                items.set_visible(index, true);
            }
        }
    }

    fn hide_unmatched(&self, query: &FilterQuery, items: &mut dyn ItemProvider) {
        let options = self.store.options();
        for index in 0..items.count() {
            let visible = match items.item(index) {
                Some(item) if !items.is_excluded(item) => {
                    self.matcher.matches(item, query, &options)
                }
                _ => continue,
            };
            items.set_visible(index, visible);
        }
    }

    fn refresh_view(&self, view: &mut dyn ViewHooks) {
        view.relayout();
        view.reset_scroll_position();
        // 説明ポップアップはアイテムが消えると残ってしまうので消しておく
        view.dismiss_hover_tooltip();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

#[cfg(test)]
#[path = "session_proptests.rs"]
mod proptests;
