//! 分段并发尝试的内部错误；总是被下载器捕获并转化为一次单流回退，
//! 不会直接返回给调用方。

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum RangedError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器未按分段响应（期待 206，实际 {0}）")]
    NotPartial(reqwest::StatusCode),

    #[error("第 {index} 段长度不符：期待 {expected} 字节，实际 {actual} 字节")]
    LengthMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },

    #[error("分段任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
