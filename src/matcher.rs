//! トークン単位の絞り込み判定

use crate::compare::{CultureComparer, TextComparer};
use crate::item::Item;
use crate::query::{FilterMode, FilterOptions, FilterQuery};

/// クエリとオプションからアイテムの表示可否を決める
pub struct TokenMatcher {
    comparer: Box<dyn TextComparer>,
}

impl TokenMatcher {
    pub fn new(comparer: Box<dyn TextComparer>) -> Self {
        Self { comparer }
    }

    /// アイテムを表示したままにするか
    ///
    /// - トークンが空なら true
    /// - AND は最初に外れたトークンで false、OR は最初に当たったトークンで true
    /// - 打ち切り後のトークンは評価しない
    pub fn matches(&self, item: &Item, query: &FilterQuery, options: &FilterOptions) -> bool {
        if query.is_empty() {
            return true;
        }

        let mut hits = query
            .tokens()
            .iter()
            .map(|token| self.token_hits(item, token, options));

        match options.mode {
            FilterMode::And => hits.all(|hit| hit),
            FilterMode::Or => hits.any(|hit| hit),
        }
    }

    fn token_hits(&self, item: &Item, token: &str, options: &FilterOptions) -> bool {
        // 名前に含まれていれば説明は調べない
        self.comparer
            .contains(&item.display_name, token, options.ignore_case)
            || (options.include_description
                && self
                    .comparer
                    .contains(&item.description, token, options.ignore_case))
    }
}

impl Default for TokenMatcher {
    fn default() -> Self {
        Self::new(Box::new(CultureComparer))
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
