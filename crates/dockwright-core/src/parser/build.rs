//! buildノードのパース

use crate::error::{DecodeError, Result};
use crate::model::BuildDefinition;
use kdl::{KdlDocument, KdlNode, KdlValue};
use std::path::PathBuf;

/// build ノードをパース
///
/// 短縮記法: `build "./app"`
///
/// ブロック記法:
/// ```kdl
/// build {
///     context "./app"
///     buildfile "Dockerfile.dev"
///     args {
///         VERSION "1.0"
///         DEBUG #null
///     }
///     tags "v1" "v2"
/// }
/// ```
pub fn parse_build(node: &KdlNode) -> Result<BuildDefinition> {
    match (node.children(), first_argument(node)) {
        (Some(_), Some(_)) => Err(DecodeError::InvalidConfig(
            "build には引数とブロックを同時に指定できません".to_string(),
        )),
        (Some(children), None) => parse_build_block(children),
        (None, Some(value)) => {
            let context =
                scalar_string(value).ok_or_else(|| DecodeError::MissingValue("build".to_string()))?;
            Ok(BuildDefinition::from_context(context))
        }
        (None, None) => Err(DecodeError::MissingValue("build".to_string())),
    }
}

/// buildブロックをパース（ブロック記法用）
fn parse_build_block(doc: &KdlDocument) -> Result<BuildDefinition> {
    let mut build = BuildDefinition::default();

    for node in doc.nodes() {
        match node.name().value() {
            "context" => {
                build.context = PathBuf::from(string_argument(node, "build.context")?);
            }
            "buildfile" => {
                build.buildfile = PathBuf::from(string_argument(node, "build.buildfile")?);
            }
            "args" => {
                if let Some(args) = node.children() {
                    for arg_node in args.nodes() {
                        let key = arg_node.name().value().to_string();
                        if arg_node.entries().iter().any(|e| e.name().is_some()) {
                            return Err(DecodeError::InvalidConfig(format!(
                                "build.args.{} にはプロパティではなく値を指定してください",
                                key
                            )));
                        }
                        let value = match first_argument(arg_node) {
                            None | Some(KdlValue::Null) => None,
                            Some(value) => Some(
                                value
                                    .as_string()
                                    .ok_or_else(|| {
                                        DecodeError::type_mismatch(
                                            format!("build.args.{}", key),
                                            "string or #null",
                                            value,
                                        )
                                    })?
                                    .to_string(),
                            ),
                        };
                        build.args.insert(key, value);
                    }
                }
            }
            "tags" => {
                for value in arguments(node) {
                    let tag = value
                        .as_string()
                        .ok_or_else(|| DecodeError::type_mismatch("build.tags", "string", value))?;
                    build.tags.push(tag.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(build)
}

/// 名前なしエントリ（引数）の値
pub(crate) fn arguments(node: &KdlNode) -> impl Iterator<Item = &KdlValue> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .map(|e| e.value())
}

/// スカラー値を文字列として取得（`#null` は `None`）
fn scalar_string(value: &KdlValue) -> Option<String> {
    match value {
        KdlValue::String(s) => Some(s.clone()),
        KdlValue::Integer(i) => Some(i.to_string()),
        KdlValue::Float(f) => Some(format!("{:?}", f)),
        KdlValue::Bool(b) => Some(b.to_string()),
        KdlValue::Null => None,
    }
}

pub(crate) fn first_argument(node: &KdlNode) -> Option<&KdlValue> {
    arguments(node).next()
}

fn string_argument(node: &KdlNode, field: &str) -> Result<String> {
    let value = first_argument(node).ok_or_else(|| DecodeError::MissingValue(field.to_string()))?;
    value
        .as_string()
        .map(|s| s.to_string())
        .ok_or_else(|| DecodeError::type_mismatch(field, "string", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_node(kdl: &str) -> KdlNode {
        let doc: KdlDocument = kdl.parse().unwrap();
        doc.nodes().first().unwrap().clone()
    }

    #[test]
    fn test_parse_build_short_form() {
        let node = first_node(r#"build "./app""#);
        let build = parse_build(&node).unwrap();

        assert_eq!(build, BuildDefinition::from_context("./app"));
    }

    #[test]
    fn test_parse_build_block() {
        let node = first_node(
            r#"
            build {
                context "./app"
                buildfile "Dockerfile.dev"
                tags "v1" "v2"
            }
        "#,
        );
        let build = parse_build(&node).unwrap();

        assert_eq!(build.context, PathBuf::from("./app"));
        assert_eq!(build.buildfile, PathBuf::from("Dockerfile.dev"));
        assert!(build.args.is_empty());
        assert_eq!(build.tags, vec!["v1".to_string(), "v2".to_string()]);
    }

    #[test]
    fn test_parse_build_args() {
        let node = first_node(
            r#"
            build {
                args {
                    VERSION "1.0"
                    EMPTY ""
                    DEBUG #null
                    FLAG
                }
            }
        "#,
        );
        let build = parse_build(&node).unwrap();

        assert_eq!(build.args.len(), 4);
        assert_eq!(build.args["VERSION"], Some("1.0".to_string()));
        assert_eq!(build.args["EMPTY"], Some(String::new()));
        assert_eq!(build.args["DEBUG"], None);
        assert_eq!(build.args["FLAG"], None);
    }

    #[test]
    fn test_parse_build_tag_type_mismatch() {
        let node = first_node(
            r#"
            build {
                context "."
                tags "v1" 2
            }
        "#,
        );
        let err = parse_build(&node).unwrap_err();

        match err {
            DecodeError::TypeMismatch { field, found, .. } => {
                assert_eq!(field, "build.tags");
                assert_eq!(found, "2");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_build_short_form_non_string_scalar() {
        let cases = [("build 2024", "2024"), ("build 1.5", "1.5"), ("build #true", "true")];

        for (kdl, expected) in cases {
            let build = parse_build(&first_node(kdl)).unwrap();
            assert_eq!(build, BuildDefinition::from_context(expected), "kdl {:?}", kdl);
        }
    }

    #[test]
    fn test_parse_build_short_form_null() {
        let node = first_node("build #null");
        assert!(matches!(
            parse_build(&node),
            Err(DecodeError::MissingValue(_))
        ));
    }

    #[test]
    fn test_parse_build_args_property_rejected() {
        let node = first_node(
            r#"
            build {
                args {
                    VERSION value="1"
                }
            }
        "#,
        );
        match parse_build(&node) {
            Err(DecodeError::InvalidConfig(message)) => {
                assert!(message.contains("build.args.VERSION"), "{}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_build_empty_node() {
        let node = first_node("build");
        assert!(matches!(
            parse_build(&node),
            Err(DecodeError::MissingValue(_))
        ));
    }

    #[test]
    fn test_parse_build_argument_and_block() {
        let node = first_node(
            r#"
            build "./app" {
                tags "v1"
            }
        "#,
        );
        assert!(matches!(
            parse_build(&node),
            Err(DecodeError::InvalidConfig(_))
        ));
    }
}
