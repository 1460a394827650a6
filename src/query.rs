//! 検索クエリと検索オプション

use clap::ValueEnum;
use serde::Serialize;

/// 複数トークンの組み合わせ方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// すべてのトークンに一致
    #[default]
    And,
    /// いずれかのトークンに一致
    Or,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::And => FilterMode::Or,
            FilterMode::Or => FilterMode::And,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::And => "AND",
            FilterMode::Or => "OR",
        }
    }
}

/// 検索オプション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub mode: FilterMode,
    /// 大文字小文字・全角半角・かなの種類を無視
    pub ignore_case: bool,
    /// 説明文も検索
    pub include_description: bool,
}

/// 切り替え可能なオプションの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionId {
    Mode,
    IgnoreCase,
    IncludeDescription,
}

/// 入力文字列から作った検索クエリ
///
/// トークンが空のクエリは「絞り込みなし」を表す。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    raw_text: String,
    tokens: Vec<String>,
}

impl FilterQuery {
    /// 空白（全角スペースを含む）で区切ってトークン化
    pub fn parse(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            tokens: raw_text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 絞り込みなしのクエリか
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
