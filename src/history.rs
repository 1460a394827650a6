//! 検索履歴（最近使った順のリスト）
//!
//! 設定データの履歴リストを直接操作する。先頭が最新。

/// 履歴リストへのビュー
///
/// 永続化は呼び出し側が行う。変更があったかどうかを戻り値で返す。
pub struct HistoryCache<'a> {
    entries: &'a mut Vec<String>,
    max: usize,
}

impl<'a> HistoryCache<'a> {
    pub fn new(entries: &'a mut Vec<String>, max: usize) -> Self {
        Self { entries, max }
    }

    /// 使用した文字列を先頭へ
    ///
    /// - 空文字列、既に先頭にある場合、最大数が 0 の場合は何もしない（false）
    /// - 途中にあれば取り除いてから先頭へ挿入
    /// - 最大数を超えたら末尾を削除
    pub fn record_use(&mut self, text: &str) -> bool {
        if text.is_empty() || self.max == 0 {
            return false;
        }

        match self.entries.iter().position(|e| e == text) {
            Some(0) => return false,
            Some(index) => {
                self.entries.remove(index);
            }
            None => {}
        }

        self.entries.insert(0, text.to_string());
        if self.entries.len() > self.max {
            self.entries.pop();
        }
        true
    }

    /// 表示用に先頭から最大 `limit` 件
    pub fn as_display_list(&self, limit: usize) -> &[String] {
        display_list(self.entries.as_slice(), limit)
    }

    /// 履歴を空にする
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }
}

/// 先頭から最大 `limit` 件
pub fn display_list(entries: &[String], limit: usize) -> &[String] {
    &entries[..entries.len().min(limit)]
}

/// 履歴を不変条件に合わせて補正する
///
/// 空文字列と重複（後ろ側）を除き、最大数で切り詰める。
pub fn normalize(entries: &mut Vec<String>, max: usize) {
    let mut seen = std::collections::HashSet::new();
    entries.retain(|e| !e.is_empty() && seen.insert(e.clone()));
    entries.truncate(max);
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
