//! 設定データと永続化
//!
//! メニューのインスタンスごとに1ファイル（JSON）。
//! 読み込みに失敗した場合は既定値で続行し、ユーザーには通知しない。

use crate::error::Result;
use crate::fs::FileSystem;
use crate::history::{self, HistoryCache};
use crate::query::{FilterMode, FilterOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 履歴最大数の既定値
pub const DEFAULT_HISTORY_MAX: usize = 35;

/// 永続化する設定データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// 履歴最大数
    pub history_max: usize,
    /// 大文字小文字を無視して検索するか
    pub ignore_case: bool,
    /// 説明も検索するか
    pub filter_desc: bool,
    /// AND 検索か（false なら OR）
    pub is_and: bool,
    /// 履歴（先頭が最新）
    pub history: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            history_max: DEFAULT_HISTORY_MAX,
            ignore_case: false,
            filter_desc: false,
            is_and: true,
            history: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// 検索オプションとして取り出す
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            mode: if self.is_and {
                FilterMode::And
            } else {
                FilterMode::Or
            },
            ignore_case: self.ignore_case,
            include_description: self.filter_desc,
        }
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.is_and = mode == FilterMode::And;
    }

    /// 履歴を不変条件に合わせて補正
    pub fn normalize(&mut self) {
        history::normalize(&mut self.history, self.history_max);
    }
}

/// 設定の読み書き窓口
pub trait ConfigGateway {
    /// 読み込み（どんな失敗でも既定値を返す）
    fn load(&self, path: &Path) -> FilterConfig;

    /// 書き込み
    fn save(&self, path: &Path, config: &FilterConfig) -> Result<()>;
}

/// JSON ファイルによる永続化
pub struct JsonConfigGateway {
    fs: Arc<dyn FileSystem>,
}

impl JsonConfigGateway {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ConfigGateway for JsonConfigGateway {
    fn load(&self, path: &Path) -> FilterConfig {
        if !self.fs.exists(path) {
            log::debug!("no settings at {}, using defaults", path.display());
            return FilterConfig::default();
        }

        let parsed = self
            .fs
            .read_to_string(path)
            .and_then(|content| Ok(serde_json::from_str::<FilterConfig>(&content)?));

        match parsed {
            Ok(mut config) => {
                config.normalize();
                config
            }
            Err(e) => {
                log::warn!(
                    "failed to load settings from {}: {}; using defaults",
                    path.display(),
                    e
                );
                FilterConfig::default()
            }
        }
    }

    fn save(&self, path: &Path, config: &FilterConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        self.fs.write(path, content.as_bytes())
    }
}

/// 設定データとその保存先の組
///
/// 変更はすべて `update` 経由で行い、返る前に保存する。
pub struct ConfigStore {
    path: PathBuf,
    gateway: Box<dyn ConfigGateway>,
    config: FilterConfig,
}

impl ConfigStore {
    /// 読み込んで作成（失敗時は既定値）
    pub fn open(path: PathBuf, gateway: Box<dyn ConfigGateway>) -> Self {
        let config = gateway.load(&path);
        Self {
            path,
            gateway,
            config,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn options(&self) -> FilterOptions {
        self.config.options()
    }

    /// 変更して保存
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut FilterConfig),
    {
        f(&mut self.config);
        self.config.normalize();
        self.flush()
    }

    /// 履歴に追加（変更があった場合のみ保存）
    pub fn record_history(&mut self, text: &str) -> Result<bool> {
        let max = self.config.history_max;
        let changed = HistoryCache::new(&mut self.config.history, max).record_use(text);
        if changed {
            self.flush()?;
        }
        Ok(changed)
    }

    /// 履歴を消去（変更があった場合のみ保存）
    pub fn clear_history(&mut self) -> Result<bool> {
        let max = self.config.history_max;
        let changed = HistoryCache::new(&mut self.config.history, max).clear();
        if changed {
            self.flush()?;
        }
        Ok(changed)
    }

    /// 表示用の履歴
    pub fn history(&self, limit: usize) -> &[String] {
        history::display_list(&self.config.history, limit)
    }

    fn flush(&self) -> Result<()> {
        log::debug!("saving settings to {}", self.path.display());
        self.gateway.save(&self.path, &self.config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
