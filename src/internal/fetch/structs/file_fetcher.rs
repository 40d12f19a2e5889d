//! 文件下载器
//!
//! 本模块实现远程文件的下载，自动在单流与分段并发两种模式间选择。
//!
//! ## 功能特性
//!
//! - **能力探测**：下载前先发 HEAD 请求确认资源大小与 Range 支持情况
//! - **分段并发下载**：大小已知且服务器支持 Range 时，把文件切成 2～8 个
//!   连续区间并发拉取，结束后按序拼接落盘
//! - **单流下载**：默认路径与回退路径，整文件流式下载
//! - **自动回退**：探测失败或分段尝试中任意 worker 失败时，从第 0 字节
//!   重新发起一次单流下载，每次下载至多回退一次
//! - **响应式进度**：通过 `progress()` / `status()` 获取可监听的进度与阶段
//! - **钩子机制**：支持在下载各阶段插入自定义逻辑（开始前、每块数据、
//!   进度更新、完成后）
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use model_fetch::fetch::FileFetcher;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 下载到指定目录（文件名由响应头或 URL 推导）
//! let path = FileFetcher::new("https://example.com/models/vosk-model-cn.zip")?
//!     .save_to("Model/stt")
//!     .send()
//!     .await?;
//!
//! // 带终端进度条
//! let path = FileFetcher::new("https://example.com/big.bin")?
//!     .with_progress_bar()
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## 模式选择
//!
//! - 探测结果 `supports_ranges && total_size > 0` 时走分段并发，worker 数为
//!   `clamp(可用并行度, 2, 8)`，一个 worker 负责一个固定区间，无动态再分配
//! - 其余情况（不支持 Range、大小未知、探测本身失败）直接走单流
//! - 目标文件只会被一个任务写入：单流的读写循环，或分段成功后的按序拼接
//!
//! ## 内部实现说明
//!
//! - `ranged` 子模块：分段尝试的完整实现，含 worker、进度聚合与内部错误
//! - `single_stream` 子模块：单流流式下载实现

pub(crate) mod ranged;
pub(crate) mod single_stream;

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use url::Url;

use crate::internal::http::structs::fetch_client::FetchClient;
use crate::internal::probe::functions::probe_metadata::probe_metadata;
use crate::internal::probe::structs::resource_metadata::ResourceMetadata;
use crate::internal::resolve::functions::resolve_file_name::resolve_file_name;
use crate::internal::resolve::functions::resolve_save_path::resolve_save_path;
use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::fetch_config::FetchConfig;
use super::fetch_error::FetchError;
use super::fetch_hooks_container::FetchHooksContainer;
use super::fetch_progress::FetchProgress;
use super::fetch_status::FetchStatus;
use super::hook_adapters::{
    AfterCompleteHookAdapter, BeforeStartHookAdapter, OnProgressHookAdapter,
};
use super::progress_bar_hook::ProgressBarHook;
use super::range_parts::RangeParts;
use super::range_plan::{detect_worker_count, plan_ranges};
use super::save_target::SaveTarget;
use ranged::progress_aggregator::spawn_progress_aggregator;
use ranged::{RunRangedAttemptParams, run_ranged_attempt};
use single_stream::{RunSingleStreamParams, run_single_stream};

/// 文件下载器
///
/// 拥有响应式属性：`progress()` 返回累计进度，`status()` 返回当前阶段。
/// 链式配置后调用 [`FileFetcher::send`] 执行下载，成功返回落盘路径。
pub struct FileFetcher {
    client: FetchClient,
    config: FetchConfig,
    hooks: FetchHooksContainer,
    progress_state: UnlockReactiveProperty<FetchProgress>,
    status_state: UnlockReactiveProperty<FetchStatus>,
}

impl FileFetcher {
    /// 创建下载器；URL 在此即解析，不合法立刻报错。
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url)?;

        Ok(Self {
            client: FetchClient::new()?,
            config: FetchConfig::new(url),
            hooks: Default::default(),
            progress_state: UnlockReactiveProperty::new(
                FetchProgress::default(),
            ),
            status_state: UnlockReactiveProperty::new(FetchStatus::Idle),
        })
    }

    /// 设置保存位置：文件路径或已存在的目录。传空路径视同未设置。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        self.config.save_path = if p.as_os_str().is_empty() {
            None
        } else {
            Some(p.to_path_buf())
        };
        self
    }

    /// 设置单流下载的写入缓冲大小（字节），默认 8192。
    pub fn chunk_size(mut self, n: usize) -> Self {
        self.config.chunk_size = n.max(1);
        self
    }

    /// 挂接终端进度条（字节数、速率、剩余时间估计）。
    pub fn with_progress_bar(mut self) -> Self {
        self.hooks.add(ProgressBarHook::new());
        self
    }

    /// 注册「开始前」钩子；闭包返回 `Err(HookAbort)` 会中止本次下载。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<
                Output = Result<
                    (),
                    crate::internal::fetch::traits::hook::HookAbort,
                >,
            > + Send
            + 'static,
    {
        self.hooks.add(BeforeStartHookAdapter(f));
        self
    }

    /// 注册「进度」钩子；参数为累计已下载字节数、总大小（可能未知为 `None`）。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.hooks.add(OnProgressHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子；下载成功结束后调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(AfterCompleteHookAdapter(f));
        self
    }

    /// 添加完整钩子，在下载各阶段插入逻辑；可多次调用，按注册顺序执行。
    pub fn with_hook(
        mut self,
        hook: impl crate::internal::fetch::traits::hook::FetchHook + 'static,
    ) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 内置的下载进度状态；返回可共享句柄，`.watch()` 后 `changed().await`
    /// 监听进度。
    pub fn progress(&self) -> UnlockReactiveProperty<FetchProgress> {
        self.progress_state.clone()
    }

    /// 当前下载阶段；同样返回可共享、可监听的句柄。
    pub fn status(&self) -> UnlockReactiveProperty<FetchStatus> {
        self.status_state.clone()
    }

    /// 执行下载。
    ///
    /// 先探测资源能力决定策略；分段尝试失败时从头回退单流（至多一次），
    /// 文件系统错误在两条路径上都直接终止。成功返回落盘路径。
    pub async fn send(mut self) -> Result<PathBuf, FetchError> {
        if let Err(abort) = self.hooks.run_before_start().await {
            let _ = self.status_state.update(FetchStatus::Failed);
            return Err(abort.into());
        }

        let _ = self.status_state.update(FetchStatus::Probing);

        let meta = match probe_metadata(&self.client, &self.config.url).await
        {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!("能力探测失败，直接按单流下载: {e}");
                None
            }
        };

        let result = match meta {
            Some(meta) if meta.rangeable() => {
                self.send_ranged_with_fallback(meta).await
            }
            Some(meta) => {
                // 不支持 Range 或大小未知：路径仍按探测头解析，之后走单流
                let file_name = resolve_file_name(&self.config.url, &meta);
                match resolve_save_path(
                    &file_name,
                    self.config.save_path.as_deref(),
                )
                .await
                {
                    Ok(path) => {
                        let _ = self
                            .status_state
                            .update(FetchStatus::SingleStream);
                        self.run_single_stream_attempt(
                            SaveTarget::Resolved(path),
                        )
                        .await
                    }
                    Err(e) => Err(e),
                }
            }
            None => {
                let _ =
                    self.status_state.update(FetchStatus::SingleStream);
                self.run_single_stream_attempt(SaveTarget::Unresolved(
                    self.config.save_path.clone(),
                ))
                .await
            }
        };

        match result {
            Ok(path) => {
                self.hooks.run_after_complete().await;
                let _ = self.status_state.update(FetchStatus::Done);
                info!("下载完成: {}", path.display());
                Ok(path)
            }
            Err(e) => {
                let _ = self.status_state.update(FetchStatus::Failed);
                Err(e)
            }
        }
    }

    /// 分段并发尝试；任何失败都转化为一次从零开始的单流重下。
    async fn send_ranged_with_fallback(
        &mut self,
        meta: ResourceMetadata,
    ) -> Result<PathBuf, FetchError> {
        let total_size = meta.total_size;

        // 路径在两种策略动手前解析一次，之后共用
        let file_name = resolve_file_name(&self.config.url, &meta);
        let path =
            resolve_save_path(&file_name, self.config.save_path.as_deref())
                .await?;

        let workers = detect_worker_count();
        let plan = plan_ranges(total_size, workers);
        info!(
            "启用分段并发下载: {} 字节，{} 个 worker",
            total_size,
            plan.len()
        );

        let _ = self.status_state.update(FetchStatus::Ranged);

        let hooks = std::mem::take(&mut self.hooks);
        let (chunk_queue, chunk_consumer) = QueueReactiveProperty::new();
        let aggregator = spawn_progress_aggregator(
            total_size,
            hooks,
            self.progress_state.clone(),
            chunk_consumer,
        );

        let attempt = run_ranged_attempt(RunRangedAttemptParams {
            client: &self.client.client,
            url: self.config.url.as_str(),
            plan,
            chunk_queue,
        })
        .await;

        // 聚合任务在队列关闭后结束，取回钩子容器
        self.hooks = aggregator.await.unwrap_or_default();

        match attempt {
            Ok(parts) => {
                write_parts(&path, parts).await?;
                Ok(path)
            }
            Err(e) => {
                warn!("并发下载失败，回退到单流重新下载: {e}");
                let _ =
                    self.status_state.update(FetchStatus::SingleStream);
                let _ = self.progress_state.update(FetchProgress {
                    bytes_done: 0,
                    total: Some(total_size),
                });
                self.run_single_stream_attempt(SaveTarget::Resolved(path))
                    .await
            }
        }
    }

    async fn run_single_stream_attempt(
        &mut self,
        target: SaveTarget,
    ) -> Result<PathBuf, FetchError> {
        run_single_stream(RunSingleStreamParams {
            client: &self.client.client,
            url: &self.config.url,
            target,
            chunk_size: self.config.chunk_size,
            hooks: &mut self.hooks,
            progress: &self.progress_state,
        })
        .await
    }
}

/// 按 worker 序号把各段依次写入目标文件（单任务一遍写完）。
async fn write_parts(
    path: &Path,
    parts: RangeParts,
) -> Result<(), FetchError> {
    let mut file =
        File::create(path)
            .await
            .map_err(|e| FetchError::CreateFile {
                path: path.to_path_buf(),
                source: e,
            })?;

    for part in parts.into_ordered() {
        file.write_all(&part.data)
            .await
            .map_err(|e| FetchError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    file.flush().await.map_err(|e| FetchError::FlushFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
