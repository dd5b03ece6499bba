use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("ファイル読み込みエラー: {path}\n理由: {message}")]
    Io { path: PathBuf, message: String },

    #[error("'{field}' の型が不正です: {expected} を期待しましたが {found} が指定されました")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("'{0}' に値が指定されていません")]
    MissingValue(String),

    #[error("無効な設定: {0}")]
    InvalidConfig(String),
}

impl DecodeError {
    pub(crate) fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &kdl::KdlValue,
    ) -> Self {
        DecodeError::TypeMismatch {
            field: field.into(),
            expected,
            found: found.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
