//! コンテナ操作のオプションと結果

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// 端末リサイズ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeOptions {
    pub height: u32,
    pub width: u32,
}

/// コンテナ一覧の取得条件
#[derive(Debug, Clone, Default)]
pub struct ContainerListOptions {
    pub search_name: String,
}

/// コンテナ一覧の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerListResult {
    pub id: String,
    pub names: Vec<String>,
    pub status: String,
}

/// コンテナ作成オプション
#[derive(Debug, Clone, Default)]
pub struct ContainerCreateOptions {
    pub container_name: String,
    pub image: String,
    pub cmd: Vec<String>,
    pub working_dir: String,
    /// ホストパス → コンテナパス
    pub mounts: HashMap<String, String>,
    pub extra_hosts: Vec<String>,
    pub auto_remove: bool,
    pub open_stdin: bool,
    pub stdin_once: bool,
    pub attach_stdin: bool,
    pub attach_stdout: bool,
    pub attach_stderr: bool,
    pub tty: bool,
    /// `KEY=VALUE` 形式
    pub env: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContainerStartOptions {}

#[derive(Debug, Clone, Default)]
pub struct ContainerWaitOptions {
    pub condition: WaitCondition,
}

/// コンテナ待機条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaitCondition {
    /// 実行中でなくなるまで待機（デフォルト）
    #[default]
    NotRunning,
    /// 次回起動後の終了まで待機
    NextExit,
    /// 削除されるまで待機
    Removed,
}

impl WaitCondition {
    /// 文字列からパース
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "not-running" | "not_running" => Some(Self::NotRunning),
            "next-exit" | "next_exit" => Some(Self::NextExit),
            "removed" => Some(Self::Removed),
            _ => None,
        }
    }

    /// Docker APIで使用する文字列に変換
    pub fn as_docker_str(&self) -> &'static str {
        match self {
            Self::NotRunning => "not-running",
            Self::NextExit => "next-exit",
            Self::Removed => "removed",
        }
    }
}

/// コンテナ待機の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerWaitResponse {
    pub status_code: i64,
    pub error: Option<String>,
}

/// 実行中コンテナへのアタッチオプション
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerAttachOptions {
    pub attach_stdin: bool,
    pub attach_stdout: bool,
    pub attach_stderr: bool,
    pub tty: bool,
}

/// コンテナ停止オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerStopOptions {
    /// `None` の場合はランタイムのデフォルト
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct ContainerRemoveOptions {}
