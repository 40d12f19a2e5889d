//! 分段并发下载：单个 worker 拉取并缓存自己负责的字节区间。

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::header::RANGE;
use reqwest::{Client, StatusCode};

use crate::internal::fetch::structs::range_parts::RangePart;
use crate::internal::fetch::structs::range_plan::RangeSpec;
use crate::internal::states::queue_reactive::QueueReactiveProperty;

use super::error::RangedError;

/// 拉取单个字节区间：携带 Range 头发起 GET，流式累积到本 worker 的
/// 私有缓冲（绝不直接写目标文件），每块数据同步推给进度聚合队列。
///
/// 服务器未返回 206（如忽略 Range 头直接回 200 全量）或实际字节数与
/// 区间长度不符时按失败处理，避免错位数据进入最终文件。
pub(crate) async fn fetch_one_range(
    client: &Client,
    url: &str,
    spec: RangeSpec,
    chunk_queue: &QueueReactiveProperty<Bytes>,
) -> Result<RangePart, RangedError> {
    let resp = client
        .get(url)
        .header(RANGE, spec.header_value())
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::PARTIAL_CONTENT {
        return Err(RangedError::NotPartial(status));
    }

    let mut data = Vec::with_capacity(spec.byte_len() as usize);
    let mut stream = resp.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        data.extend_from_slice(&chunk);
        // 聚合任务提前退出时发送失败，进度丢失不影响数据正确性
        let _ = chunk_queue.send(chunk);
    }

    if data.len() as u64 != spec.byte_len() {
        return Err(RangedError::LengthMismatch {
            index: spec.index,
            expected: spec.byte_len(),
            actual: data.len() as u64,
        });
    }

    Ok(RangePart {
        index: spec.index,
        data,
    })
}
