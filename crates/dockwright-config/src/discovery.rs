//! マニフェスト発見ロジック

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// マニフェストファイルの環境変数
pub const CONFIG_PATH_ENV: &str = "DOCKWRIGHT_CONFIG_PATH";

/// 検索するファイル名（優先順）
const MANIFEST_CANDIDATES: [&str; 4] = [
    "dockwright.local.yaml",
    "dockwright.yaml",
    "dockwright.local.kdl",
    "dockwright.kdl",
];

/// マニフェストファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 DOCKWRIGHT_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ
/// 3. ./.dockwright/ ディレクトリ
/// 4. ~/.config/dockwright/dockwright.yaml (グローバル設定)
#[tracing::instrument]
pub fn find_manifest_file() -> Result<PathBuf> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(&config_path);
        if path.exists() {
            info!(manifest = %path.display(), "Found manifest from environment variable");
            return Ok(path);
        }
        warn!(env_path = %config_path, "DOCKWRIGHT_CONFIG_PATH is set but file does not exist");
    }

    let current_dir = std::env::current_dir().map_err(|e| ConfigError::Io {
        path: PathBuf::from("."),
        message: e.to_string(),
    })?;

    if let Some(path) = find_manifest_in(&current_dir) {
        return Ok(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join("dockwright").join("dockwright.yaml");
        if global.exists() {
            info!(manifest = %global.display(), "Found global manifest");
            return Ok(global);
        }
    }

    Err(ConfigError::ManifestNotFound)
}

/// 指定ディレクトリとその .dockwright/ からマニフェストを探す
pub fn find_manifest_in(dir: &Path) -> Option<PathBuf> {
    let search_dirs = [dir.to_path_buf(), dir.join(".dockwright")];

    for search_dir in &search_dirs {
        debug!(checking = %search_dir.display(), "Looking for manifest");
        for filename in MANIFEST_CANDIDATES {
            let path = search_dir.join(filename);
            if path.is_file() {
                info!(manifest = %path.display(), "Found manifest file");
                return Some(path);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_find_manifest_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("dockwright.yaml"), "images: []").unwrap();

        let result = find_manifest_in(temp_dir.path()).unwrap();
        assert!(result.ends_with("dockwright.yaml"));
    }

    #[test]
    fn test_find_manifest_local_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("dockwright.yaml"), "images: []").unwrap();
        fs::write(temp_dir.path().join("dockwright.local.yaml"), "images: []").unwrap();
        fs::write(temp_dir.path().join("dockwright.kdl"), "").unwrap();

        let result = find_manifest_in(temp_dir.path()).unwrap();
        assert!(result.ends_with("dockwright.local.yaml"));
    }

    #[test]
    fn test_find_manifest_in_hidden_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let hidden = temp_dir.path().join(".dockwright");
        fs::create_dir(&hidden).unwrap();
        fs::write(hidden.join("dockwright.kdl"), "").unwrap();

        let result = find_manifest_in(temp_dir.path()).unwrap();
        assert!(result.ends_with(".dockwright/dockwright.kdl"));
    }

    #[test]
    fn test_find_manifest_in_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(find_manifest_in(temp_dir.path()).is_none());
    }

    #[test]
    #[serial]
    fn test_find_manifest_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(&config_path, "images: []").unwrap();

        let result = temp_env::with_var(CONFIG_PATH_ENV, Some(&config_path), find_manifest_file);
        assert_eq!(result.unwrap(), config_path);
    }
}
