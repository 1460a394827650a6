//! 絞り込み対象のアイテムとその集合
//!
//! アイテムの生成・破棄はホストが行う。セッションは `visible` だけを書き換える。

use crate::kind::MenuKind;
use serde::Serialize;

/// 絞り込み対象のアイテム
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// メニューファイル名（フォルダは空）
    pub id: String,
    /// 表示名
    pub display_name: String,
    /// 説明文
    pub description: String,
    /// 表示状態
    pub visible: bool,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            visible: true,
        }
    }
}

/// ホストのアイテム集合への窓口
pub trait ItemProvider {
    /// 現在の子要素数（準備完了の判定にも使う）
    fn count(&self) -> usize;

    /// index 番目のアイテム
    fn item(&self, index: usize) -> Option<&Item>;

    /// 表示状態を設定
    fn set_visible(&mut self, index: usize, visible: bool);

    /// フィルターの対象外か（フォルダなど）
    fn is_excluded(&self, _item: &Item) -> bool {
        false
    }
}

/// Vec ベースのアイテム集合
#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    kind: MenuKind,
    items: Vec<Item>,
}

impl ItemCollection {
    pub fn new(kind: MenuKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    pub fn with_items(kind: MenuKind, items: Vec<Item>) -> Self {
        let mut collection = Self::new(kind);
        collection.rebuild(items);
        collection
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    /// 全アイテムを作り直す（新しいアイテムは表示状態で始まる）
    pub fn rebuild(&mut self, items: Vec<Item>) {
        self.items = items
            .into_iter()
            .map(|item| Item {
                visible: true,
                ..item
            })
            .collect();
    }

    /// 全アイテムを破棄
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.visible)
    }
}

impl ItemProvider for ItemCollection {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.visible = visible;
        }
    }

    fn is_excluded(&self, item: &Item) -> bool {
        self.kind.excludes(item)
    }
}
