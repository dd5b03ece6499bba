use crate::model::{
    ContainerCreateOptions, ContainerListOptions, ContainerListResult, ContainerRemoveOptions,
    ContainerStartOptions, ContainerStopOptions, ContainerWaitOptions, ContainerWaitResponse,
    ImageOptions, ImageStatusResponse, ResizeOptions,
};
use anyhow::Result;

/// コンテナランタイムのトレイト
///
/// 受け取る `ImageOptions` のビルド定義は解決済み（`ImageOptions::resolved`）であること。
/// pullするかビルドするかの判断はランタイム側で行う。
#[allow(async_fn_in_trait)]
pub trait ContainerRuntime {
    async fn image_ensure(&self, image: &ImageOptions) -> Result<ImageStatusResponse>;
    async fn container_list(
        &self,
        opts: &ContainerListOptions,
    ) -> Result<Vec<ContainerListResult>>;
    /// 作成したコンテナのIDを返す
    async fn container_create(&self, opts: &ContainerCreateOptions) -> Result<String>;
    async fn container_start(&self, id: &str, opts: &ContainerStartOptions) -> Result<()>;
    async fn container_wait(
        &self,
        id: &str,
        opts: &ContainerWaitOptions,
    ) -> Result<ContainerWaitResponse>;
    async fn container_resize(&self, id: &str, opts: &ResizeOptions) -> Result<()>;
    async fn container_stop(&self, id: &str, opts: &ContainerStopOptions) -> Result<()>;
    async fn container_remove(&self, id: &str, opts: &ContainerRemoveOptions) -> Result<()>;
}
