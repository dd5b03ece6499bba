//! KDLパーサー
//!
//! イメージ定義のKDL記法をパースします。

mod build;
mod image;

pub use build::parse_build;
pub use image::parse_image;

use crate::error::{DecodeError, Result};
use crate::model::ImageOptions;
use kdl::KdlDocument;
use std::fs;
use std::path::Path;
use tracing::debug;

/// KDLファイルをパースしてイメージ定義の一覧を生成
pub fn parse_kdl_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImageOptions>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DecodeError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_kdl_string(&content)
}

/// KDL文字列をパース
///
/// 途中でエラーが発生した場合、部分的な結果は返さない。
pub fn parse_kdl_string(content: &str) -> Result<Vec<ImageOptions>> {
    let doc: KdlDocument = content.parse()?;

    let mut images = Vec::new();

    for node in doc.nodes() {
        match node.name().value() {
            "image" => {
                let image = parse_image(node)?;
                debug!(
                    image = %image.name,
                    build = image.build.is_some(),
                    "Parsed image definition"
                );
                images.push(image);
            }
            _ => {
                // 不明なノードはスキップ
            }
        }
    }

    Ok(images)
}
