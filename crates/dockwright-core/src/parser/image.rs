//! imageノードのパース

use super::build::{first_argument, parse_build};
use crate::error::{DecodeError, Result};
use crate::model::ImageOptions;
use kdl::KdlNode;

/// image ノードをパース
///
/// ```kdl
/// image "myapp:latest" {
///     build "./app"
/// }
/// ```
pub fn parse_image(node: &KdlNode) -> Result<ImageOptions> {
    let name = first_argument(node)
        .and_then(|v| v.as_string())
        .ok_or_else(|| DecodeError::InvalidConfig("image requires a name".to_string()))?;

    let mut image = ImageOptions::new(name);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            if child.name().value() == "build" {
                image.build = Some(parse_build(child)?);
            }
        }
    }

    Ok(image)
}
