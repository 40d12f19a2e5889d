//! 分段并发下载：单任务消费各 worker 的数据块消息，统一累计进度并驱动钩子。

use bytes::Bytes;
use tokio::task::JoinHandle;

use crate::internal::fetch::structs::fetch_hooks_container::FetchHooksContainer;
use crate::internal::fetch::structs::fetch_progress::FetchProgress;
use crate::internal::states::queue_reactive::QueueReactiveConsumer;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

/// 启动进度聚合任务：独占钩子容器与进度状态，按消息到达顺序累计字节数。
///
/// worker 之间不共享任何计数器，也不持有锁；队列关闭（全部 worker 退出）
/// 后任务结束，把钩子容器归还给下载器做收尾或回退。
pub(crate) fn spawn_progress_aggregator(
    total: u64,
    mut hooks: FetchHooksContainer,
    progress: UnlockReactiveProperty<FetchProgress>,
    mut chunk_queue: QueueReactiveConsumer<Bytes>,
) -> JoinHandle<FetchHooksContainer> {
    tokio::spawn(async move {
        let mut bytes_done: u64 = 0;
        let _ = progress.update(FetchProgress {
            bytes_done: 0,
            total: Some(total),
        });

        while let Some(chunk) = chunk_queue.recv().await {
            bytes_done += chunk.len() as u64;
            let _ = progress.update(FetchProgress {
                bytes_done,
                total: Some(total),
            });
            hooks.run_on_chunk(&chunk);
            hooks.run_on_progress(bytes_done, Some(total));
        }

        hooks
    })
}
