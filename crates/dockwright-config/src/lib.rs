//! Dockwright 設定
//!
//! マニフェストファイルの発見と読み込みを行います。
//! デコードエラーはファイルパスと位置情報付きで報告されます。

pub mod discovery;
pub mod error;
pub mod manifest;

pub use discovery::*;
pub use error::*;
pub use manifest::*;
