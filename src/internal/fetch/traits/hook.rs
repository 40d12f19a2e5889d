//! 下载相关 trait：钩子接口，即进度上报与各阶段插入点。
//!
//! 下载器由 [`crate::fetch::FileFetcher`] 构建并执行；进度条、日志等
//! 观察者都通过本接口挂接，互不感知。

use async_trait::async_trait;

/// 钩子执行时请求中止下载时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort;

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("下载被钩子中止")
    }
}

impl std::error::Error for HookAbort {}

/// 下载流程钩子：在「开始前 / 每块数据 / 进度 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_progress_hook` /
///   `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
///
/// 分段并发下载时，钩子统一由进度聚合任务按块到达顺序驱动，
/// 实现方无须考虑并发调用。
#[async_trait]
pub trait FetchHook: Send + Sync {
    /// 下载开始前调用（如：校验路径、准备界面）。返回 `Err` 则中止本次下载。
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 每收到一段数据时调用。`chunk` 为本段字节。
    fn on_chunk(&mut self, _chunk: &[u8]) {}

    /// 进度更新（累计已下载字节、总大小，总大小未知时为 `None`）。
    fn on_progress(&mut self, _bytes_done: u64, _total: Option<u64>) {}

    /// 下载成功结束后调用（收尾、清理等）。
    async fn after_complete(&mut self) {}
}
