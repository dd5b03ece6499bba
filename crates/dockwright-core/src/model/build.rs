//! イメージビルド定義

use crate::resolver::normalize_path;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// イメージビルド定義
///
/// 短縮記法（コンテキストパスのみ）:
/// ```yaml
/// build: ./app
/// ```
///
/// 完全記法:
/// ```yaml
/// build:
///   context: ./app
///   buildfile: Dockerfile.dev
///   args:
///     VERSION: "1.0"
///     DEBUG: ~
///   tags: [v1, v2]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildDefinition {
    /// ビルドコンテキストのパス（解決後は常に絶対パス）
    pub context: PathBuf,
    /// ビルドファイルのパス（contextからの相対パスとしてランタイムが解釈する）
    pub buildfile: PathBuf,
    /// ビルド引数。`None` は値なしで宣言された引数を表す
    pub args: HashMap<String, Option<String>>,
    /// イメージに付与するタグ（先頭がプライマリ）
    pub tags: Vec<String>,
}

impl BuildDefinition {
    /// コンテキストパスのみのビルド定義を作成
    pub fn from_context(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            ..Default::default()
        }
    }

    /// コンテナビルド用にビルド定義を前処理する
    ///
    /// - 相対パスの context は `cwd` と結合して正規化する
    /// - `name` が空でなければ tags の末尾に追加する（重複チェックなし）
    ///
    /// 戻り値は独立したコピーで、`self` の tags / args とストレージを共有しない。
    pub fn image_build_info(&self, name: &str, cwd: &Path) -> BuildDefinition {
        let mut build = self.clone();

        if !build.context.is_absolute() {
            build.context = normalize_path(&cwd.join(&build.context));
        }

        if !name.is_empty() {
            build.tags.push(name.to_string());
        }

        debug!(
            context = %build.context.display(),
            tags = ?build.tags,
            "Resolved build definition"
        );

        build
    }
}

/// 完全記法のデシリアライズ用中間表現
#[derive(Deserialize)]
struct StructuredBuild {
    #[serde(default, deserialize_with = "null_as_default")]
    context: PathBuf,
    #[serde(default, deserialize_with = "null_as_default")]
    buildfile: PathBuf,
    #[serde(default, deserialize_with = "null_as_default")]
    args: HashMap<String, Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
}

impl From<StructuredBuild> for BuildDefinition {
    fn from(raw: StructuredBuild) -> Self {
        Self {
            context: raw.context,
            buildfile: raw.buildfile,
            args: raw.args,
            tags: raw.tags,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// スカラーならコンテキストパス（数値・真偽値も文字列として扱う）、マップなら完全記法。
// マップのエラーはフォーマット側のエラーをそのまま返す。
impl<'de> Deserialize<'de> for BuildDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BuildDefinitionVisitor)
    }
}

struct BuildDefinitionVisitor;

impl<'de> Visitor<'de> for BuildDefinitionVisitor {
    type Value = BuildDefinition;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a build context path or a build definition mapping")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BuildDefinition::from_context(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BuildDefinition::from_context(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BuildDefinition::from_context(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BuildDefinition::from_context(value.to_string()))
    }

    // `{:?}` は 1.0 を "1.0" のまま残す
    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BuildDefinition::from_context(format!("{:?}", value)))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let raw = StructuredBuild::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(raw.into())
    }
}
