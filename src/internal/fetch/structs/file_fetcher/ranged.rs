//! 分段并发下载：一段一个 worker，各自缓存本段字节，进度经消息队列聚合。

pub(crate) mod error;
pub(crate) mod fetch_one_range;
pub(crate) mod progress_aggregator;

use bytes::Bytes;
use reqwest::Client;

use crate::internal::fetch::structs::range_parts::RangeParts;
use crate::internal::fetch::structs::range_plan::RangeSpec;
use crate::internal::states::queue_reactive::QueueReactiveProperty;

use error::RangedError;
use fetch_one_range::fetch_one_range;

/// 发起分段尝试时的参数（形参超过 3 个，用 struct 承载）。
pub(crate) struct RunRangedAttemptParams<'a> {
    pub client: &'a Client,
    pub url: &'a str,
    pub plan: Vec<RangeSpec>,
    /// 数据块消息队列的生产者端，克隆给每个 worker
    pub chunk_queue: QueueReactiveProperty<Bytes>,
}

/// 按分段计划 spawn 全部 worker 并等待它们全部结束。
///
/// 任何一个 worker 失败即判定整次尝试失败（仍会等其余 worker 跑完再返回），
/// 此时不产生任何落盘字节；全部成功时返回按序号归位的各段数据，
/// 落盘由调用方一次性完成。
pub(crate) async fn run_ranged_attempt(
    params: RunRangedAttemptParams<'_>,
) -> Result<RangeParts, RangedError> {
    let mut handles = Vec::with_capacity(params.plan.len());

    for spec in params.plan {
        let client = params.client.clone();
        let url = params.url.to_string();
        let queue = params.chunk_queue.clone();
        handles.push(tokio::spawn(async move {
            fetch_one_range(&client, &url, spec, &queue).await
        }));
    }

    // 释放本函数持有的生产者端；全部 worker 退出后队列关闭，聚合任务随之收尾
    drop(params.chunk_queue);

    let mut parts = RangeParts::with_capacity(handles.len());
    let mut first_err: Option<RangedError> = None;

    for handle in handles {
        match handle.await {
            Ok(Ok(part)) => parts.push(part),
            Ok(Err(e)) => {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
            Err(join_err) => {
                if first_err.is_none() {
                    first_err = Some(RangedError::TaskJoin(join_err));
                }
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(parts),
    }
}
