use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "マニフェストファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: dockwright.local.yaml, dockwright.yaml, dockwright.local.kdl, dockwright.kdl\n\
        - ./.dockwright/ ディレクトリ\n\
        - ~/.config/dockwright/dockwright.yaml\n\
        または DOCKWRIGHT_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ManifestNotFound,

    #[error("IO エラー: {path}\n理由: {message}")]
    Io { path: PathBuf, message: String },

    #[error("マニフェストのデコードに失敗しました: {path}:{line}:{column}\n理由: {source}")]
    Yaml {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("マニフェストのデコードに失敗しました: {path}\n理由: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: dockwright_core::DecodeError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
