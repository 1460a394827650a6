//! 実行コンテキスト
//!
//! 設定ファイルの置き場所をまとめた値。起動時に一度作り、
//! 各セッションの生成時に渡す。

use crate::config::{ConfigStore, JsonConfigGateway};
use crate::env::{EnvVar, DATA_DIR_VAR};
use crate::fs::{FileSystem, RealFs};
use crate::kind::MenuKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 設定ファイルの置き場所とファイルシステム
#[derive(Clone)]
pub struct FilterContext {
    data_dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl FilterContext {
    pub fn new(data_dir: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fs,
        }
    }

    /// データディレクトリを解決して作成
    ///
    /// 優先順位: 明示的な指定 > EMF_DATA_DIR > $HOME/.emf
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, String> {
        let data_dir = match explicit {
            Some(dir) => dir,
            None => match EnvVar::get(DATA_DIR_VAR) {
                Some(dir) => PathBuf::from(dir),
                None => {
                    let home = EnvVar::get("HOME").ok_or("HOME environment variable not set")?;
                    PathBuf::from(home).join(".emf")
                }
            },
        };
        Ok(Self::new(data_dir, Arc::new(RealFs)))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn fs(&self) -> Arc<dyn FileSystem> {
        Arc::clone(&self.fs)
    }

    /// メニュー種別ごとの設定ファイルパス
    pub fn config_path(&self, kind: MenuKind) -> PathBuf {
        self.data_dir.join(kind.config_file_name())
    }

    /// メニュー種別ごとの設定を開く
    pub fn open_config(&self, kind: MenuKind) -> ConfigStore {
        ConfigStore::open(
            self.config_path(kind),
            Box::new(JsonConfigGateway::new(self.fs())),
        )
    }
}
