use super::*;
use crate::config::JsonConfigGateway;
use crate::fs::mock::MockFs;
use crate::item::{Item, ItemCollection};
use crate::query::FilterMode;
use crate::view::NoopView;
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

/// 名前・説明に使う文字列（かなと英字と空白）
fn text_strategy() -> impl Strategy<Value = String> {
    "[aAbBカかﾊﾞ ]{0,8}"
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (text_strategy(), text_strategy()).prop_map(|(name, desc)| Item::new("x.menu", name, desc)),
        0..8,
    )
}

fn options_strategy() -> impl Strategy<Value = FilterOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(is_and, ignore_case, desc)| {
        FilterOptions {
            mode: if is_and { FilterMode::And } else { FilterMode::Or },
            ignore_case,
            include_description: desc,
        }
    })
}

fn session() -> FilterSession {
    let store = ConfigStore::open(
        PathBuf::from("/data/EditMenuFilter.menu.json"),
        Box::new(JsonConfigGateway::new(Arc::new(MockFs::new()))),
    );
    FilterSession::new(MenuKind::Menu, store, TokenMatcher::default())
}

proptest! {
    /// どんなクエリの後でも空クエリで全アイテムが表示に戻る
    #[test]
    fn prop_clear_restores_all(items in items_strategy(), query in text_strategy()) {
        let mut session = session();
        let mut collection = ItemCollection::with_items(MenuKind::Menu, items);
        let mut view = NoopView;

        session.apply(&query, &mut collection, &mut view);
        session.apply("", &mut collection, &mut view);

        prop_assert!(collection.items().iter().all(|item| item.visible));
        prop_assert_eq!(session.state(), &FilterState::Idle);
    }

    /// AND はトークンごとの判定の論理積、OR は論理和と一致する
    #[test]
    fn prop_matcher_combines_single_token_results(
        items in items_strategy(),
        query in text_strategy(),
        options in options_strategy(),
    ) {
        let matcher = TokenMatcher::default();
        let parsed = FilterQuery::parse(&query);

        for item in &items {
            let per_token: Vec<bool> = parsed
                .tokens()
                .iter()
                .map(|token| matcher.matches(item, &FilterQuery::parse(token), &options))
                .collect();
            let expected = if parsed.is_empty() {
                true
            } else {
                match options.mode {
                    FilterMode::And => per_token.iter().all(|hit| *hit),
                    FilterMode::Or => per_token.iter().any(|hit| *hit),
                }
            };
            prop_assert_eq!(matcher.matches(item, &parsed, &options), expected);
        }
    }

    /// 表示状態は常に最後に適用したクエリの評価結果と一致する
    #[test]
    fn prop_visibility_reflects_last_query(
        items in items_strategy(),
        queries in prop::collection::vec(text_strategy(), 1..5),
    ) {
        let mut session = session();
        let mut collection = ItemCollection::with_items(MenuKind::Menu, items);
        let mut view = NoopView;

        for query in &queries {
            session.apply(query, &mut collection, &mut view);
        }

        let last = FilterQuery::parse(queries.last().unwrap());
        let options = session.options();
        let matcher = TokenMatcher::default();
        for item in collection.items() {
            prop_assert_eq!(item.visible, matcher.matches(item, &last, &options));
        }
    }
}
