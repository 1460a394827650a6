//! ホスト UI への出力フック
//!
//! 絞り込みのたびにリストの再配置・スクロール位置のリセット・
//! 説明ポップアップの消去を依頼する。

/// ホスト UI への依頼
pub trait ViewHooks {
    /// リストを再配置
    fn relayout(&mut self);

    /// スクロール位置を先頭へ
    fn reset_scroll_position(&mut self);

    /// 表示中の説明ポップアップを消す
    fn dismiss_hover_tooltip(&mut self);

    /// スクロール領域の表示/非表示（作り直し中のちらつき防止）
    fn set_scroll_region_hidden(&mut self, _hidden: bool) {}

    /// 入力欄の文字列を設定
    fn set_query_text(&mut self, _text: &str) {}

    /// 入力欄のフォーカスを外す
    fn clear_input_focus(&mut self) {}

    /// 初期化時に見つからなかったホストの要素
    fn missing_elements(&self) -> Vec<String> {
        Vec::new()
    }
}

/// 何もしないフック（CLI など UI のないホスト向け）
#[derive(Debug, Default)]
pub struct NoopView;

impl ViewHooks for NoopView {
    fn relayout(&mut self) {}

    fn reset_scroll_position(&mut self) {}

    fn dismiss_hover_tooltip(&mut self) {}
}
