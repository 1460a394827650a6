/// 環境変数ユーティリティ
pub struct EnvVar;

/// データディレクトリを上書きする環境変数
pub const DATA_DIR_VAR: &str = "EMF_DATA_DIR";

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}
