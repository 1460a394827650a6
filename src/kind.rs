//! メニュー種別
//!
//! エディット画面の3種類のメニュー（アイテム・セット・プリセット）ごとの
//! 差分を小さな関数テーブルで表す。

use crate::item::Item;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// アイテムを外すボタンの表示名
pub const REMOVE_ITEM_NAME: &str = "無し";

/// メニュー種別
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    #[default]
    Menu,
    Set,
    Preset,
}

impl MenuKind {
    pub fn all() -> &'static [MenuKind] {
        &[MenuKind::Menu, MenuKind::Set, MenuKind::Preset]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKind::Menu => "menu",
            MenuKind::Set => "set",
            MenuKind::Preset => "preset",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuKind::Menu => "Menu",
            MenuKind::Set => "Set",
            MenuKind::Preset => "Preset",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MenuKind::Menu => 0,
            MenuKind::Set => 1,
            MenuKind::Preset => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => MenuKind::Menu,
            1 => MenuKind::Set,
            _ => MenuKind::Preset,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// 設定ファイル名（インスタンスごとに独立）
    pub fn config_file_name(&self) -> String {
        format!("EditMenuFilter.{}.json", self.as_str())
    }

    /// フィルターの対象外とするアイテムか
    ///
    /// フォルダ（ファイル名が空）と「無し」ボタンは常に表示したままにする。
    pub fn excludes(&self, item: &Item) -> bool {
        match self {
            MenuKind::Menu | MenuKind::Set => {
                item.id.is_empty() || item.display_name == REMOVE_ITEM_NAME
            }
            MenuKind::Preset => false,
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
