//! モデル定義
//!
//! ビルド定義、イメージ取得オプション、コンテナ操作の語彙を定義します。

mod build;
mod container;
mod image;

// Re-exports
pub use build::*;
pub use container::*;
pub use image::*;
