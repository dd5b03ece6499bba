//! Dockwright コア
//!
//! コンテナイメージのビルド定義と、コンテナランタイムとの間の型付き契約を提供します。
//!
//! - ビルド定義のデコード（短縮記法 / 完全記法、YAML・JSON・KDL）
//! - 作業ディレクトリとイメージ名によるビルド定義の解決
//! - コンテナ操作のオプション・結果型とランタイムトレイト

pub mod error;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod runtime;

pub use error::{DecodeError, Result};
pub use model::*;
pub use parser::{parse_build, parse_image, parse_kdl_file, parse_kdl_string};
pub use resolver::{BuildResolver, normalize_path, resolve_build};
pub use runtime::ContainerRuntime;
