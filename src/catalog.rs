//! アイテムカタログ（ホストのアイテム一覧を JSON で与える）
//!
//! ```json
//! { "categories": [
//!     { "name": "帽子", "kind": "menu",
//!       "items": [ { "file": "hat001.menu", "name": "麦わら帽子", "description": "夏用" } ] }
//! ] }
//! ```

use crate::error::{FilterError, Result};
use crate::fs::FileSystem;
use crate::item::Item;
use crate::kind::MenuKind;
use serde::Deserialize;
use std::path::Path;

/// カタログのアイテム
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    /// メニューファイル名（フォルダは空）
    #[serde(default)]
    pub file: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ItemRecord {
    pub fn to_item(&self) -> Item {
        Item::new(&self.file, &self.name, &self.description)
    }
}

/// カテゴリ（ホストのタブ1つ分）
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub kind: MenuKind,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl Category {
    pub fn to_items(&self) -> Vec<Item> {
        self.items.iter().map(ItemRecord::to_item).collect()
    }
}

/// カタログ全体
#[derive(Debug, Clone, Deserialize)]
pub struct ItemCatalog {
    pub categories: Vec<Category>,
}

impl ItemCatalog {
    /// JSON 文字列から読み込み
    pub fn parse(content: &str) -> Result<Self> {
        let catalog: ItemCatalog = serde_json::from_str(content)
            .map_err(|e| FilterError::InvalidCatalog(e.to_string()))?;
        if catalog.categories.is_empty() {
            return Err(FilterError::InvalidCatalog(
                "catalog has no categories".to_string(),
            ));
        }
        Ok(catalog)
    }

    /// ファイルから読み込み
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        Self::parse(&fs.read_to_string(path)?)
    }

    /// 指定種別のカテゴリ
    pub fn categories_of(&self, kind: MenuKind) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.kind == kind).collect()
    }

    /// 種別とカテゴリ名でアイテムを取り出す（カテゴリ名省略時は種別の全アイテム）
    pub fn items_for(&self, kind: MenuKind, category: Option<&str>) -> Result<Vec<Item>> {
        let categories = self.categories_of(kind);
        match category {
            Some(name) => categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.to_items())
                .ok_or_else(|| {
                    FilterError::InvalidCatalog(format!("no {kind} category named '{name}'"))
                }),
            None => Ok(categories.iter().flat_map(|c| c.to_items()).collect()),
        }
    }
}
