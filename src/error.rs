mod code;

pub use code::ErrorCode;

use crate::kind::MenuKind;
use thiserror::Error;

/// フィルター統一エラー型
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Host element not found for {kind} filter: {element}")]
    MissingHostElement { kind: MenuKind, element: String },

    #[error("Invalid item catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            FilterError::Io(_) => ErrorCode::Io001,
            FilterError::Json(_) => ErrorCode::Cfg001,
            FilterError::MissingHostElement { .. } => ErrorCode::Hst001,
            FilterError::InvalidCatalog(_) => ErrorCode::Cat001,
        }
    }
}
