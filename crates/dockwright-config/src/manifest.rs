//! マニフェストの読み込み
//!
//! YAML形式:
//! ```yaml
//! images:
//!   - name: myimg
//!     build: ./src
//!   - name: alpine:3.20
//! ```
//!
//! KDL形式（拡張子 `.kdl`）:
//! ```kdl
//! image "myimg" {
//!     build "./src"
//! }
//! image "alpine:3.20"
//! ```

use crate::error::{ConfigError, Result};
use dockwright_core::ImageOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// マニフェスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub images: Vec<ImageOptions>,
}

impl Manifest {
    /// 名前でイメージ定義を取得
    pub fn image(&self, name: &str) -> Option<&ImageOptions> {
        self.images.iter().find(|image| image.name == name)
    }

    /// 全イメージのビルド定義を `base_dir` 基準で解決
    pub fn resolve(&self, base_dir: &Path) -> Vec<ImageOptions> {
        self.images
            .iter()
            .map(|image| image.resolved(base_dir))
            .collect()
    }
}

/// マニフェストファイルを読み込む
///
/// 拡張子が `.kdl` ならKDL、それ以外はYAMLとして扱う。
/// デコードに失敗した場合、部分的な結果は返さない。
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let manifest = if path.extension().is_some_and(|ext| ext == "kdl") {
        let images =
            dockwright_core::parse_kdl_string(&content).map_err(|source| ConfigError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Manifest { images }
    } else {
        parse_yaml(&content, path)?
    };

    info!(images = manifest.images.len(), "Manifest loaded");
    Ok(manifest)
}

/// マニフェストを読み込み、マニフェストのディレクトリ基準で解決する
pub fn load_resolved(path: &Path) -> Result<Vec<ImageOptions>> {
    let manifest = load_manifest(path)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let base_dir = std::path::absolute(parent).map_err(|e| ConfigError::Io {
        path: parent.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(base_dir = %base_dir.display(), "Resolving manifest images");

    Ok(manifest.resolve(&base_dir))
}

fn parse_yaml(content: &str, path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|source| {
        let (line, column) = source
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or_default();
        ConfigError::Yaml {
            path: path.to_path_buf(),
            line,
            column,
            source,
        }
    })
}
