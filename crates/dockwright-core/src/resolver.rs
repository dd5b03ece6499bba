use crate::model::BuildDefinition;
use std::path::{Component, Path, PathBuf};

/// 作業ディレクトリを基準にビルド定義を解決する
#[derive(Debug, Clone)]
pub struct BuildResolver {
    cwd: PathBuf,
}

impl BuildResolver {
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// ビルド定義を解決
    ///
    /// ビルド定義がない場合（pullのみ）はそのまま `None` を返す。
    pub fn resolve(&self, build: Option<&BuildDefinition>, name: &str) -> Option<BuildDefinition> {
        resolve_build(build, name, &self.cwd)
    }
}

/// ビルド定義を実行可能な形に解決
///
/// `build` が `None` の場合は `None`。失敗することはない。
pub fn resolve_build(
    build: Option<&BuildDefinition>,
    name: &str,
    cwd: &Path,
) -> Option<BuildDefinition> {
    build.map(|b| b.image_build_info(name, cwd))
}

/// パスを字句的に正規化
///
/// `.` を除去し、`..` は直前の要素を取り除く。ルートより上には遡らない。
/// ファイルシステムにはアクセスしない。
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(part) => normalized.push(part),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}
