//! イメージ取得オプション

use super::build::BuildDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// イメージの作成・取得オプション
///
/// `build` が `None` の場合はビルドせず、名前でpull（または既存イメージを使用）する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptions {
    pub name: String,
    #[serde(default)]
    pub build: Option<BuildDefinition>,
}

impl ImageOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build: None,
        }
    }

    pub fn with_build(mut self, build: BuildDefinition) -> Self {
        self.build = Some(build);
        self
    }

    /// ビルド定義をイメージ名と作業ディレクトリで解決したコピーを返す
    ///
    /// ビルド定義がある場合、`name` が空でなければ解決後の tags に必ず含まれる。
    pub fn resolved(&self, cwd: &Path) -> ImageOptions {
        ImageOptions {
            name: self.name.clone(),
            build: self
                .build
                .as_ref()
                .map(|build| build.image_build_info(&self.name, cwd)),
        }
    }
}

/// ローカル環境でのイメージの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum ImageStatus {
    /// ローカルに存在する
    Exists = 0,
    /// pullも取得もできなかった
    UnexpectedError = 1,
    /// レジストリからpull中
    Pull = 2,
    /// ビルド中
    Build = 3,
}

/// イメージ取得時のレスポンス
pub struct ImageStatusResponse {
    pub status: ImageStatus,
    /// pull / build の進捗ストリーム
    pub progress: Option<Box<dyn Read + Send>>,
}

impl ImageStatusResponse {
    pub fn new(status: ImageStatus) -> Self {
        Self {
            status,
            progress: None,
        }
    }

    pub fn with_progress(status: ImageStatus, progress: Box<dyn Read + Send>) -> Self {
        Self {
            status,
            progress: Some(progress),
        }
    }
}

impl fmt::Debug for ImageStatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStatusResponse")
            .field("status", &self.status)
            .field("progress", &self.progress.as_ref().map(|_| "<stream>"))
            .finish()
    }
}
