//! 下载相关错误类型（对外）。
//!
//! 只有真正不可恢复的情况才会以本类型返回给调用方：
//! 回退后仍失败的网络错误、最终的文件系统错误、钩子主动中止。
//! 分段并发尝试内部的失败见
//! [`RangedError`](super::file_fetcher::ranged::error::RangedError)，
//! 它总是被下载器吸收并转化为一次单流回退，不会直接浮出。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::fetch::traits::hook::HookAbort;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回错误状态: {0}")]
    Status(reqwest::StatusCode),

    #[error("URL 不合法: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("创建目录失败 {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("创建文件失败 {}: {}", .path.display(), .source)]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入文件失败 {}: {}", .path.display(), .source)]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("刷新文件失败 {}: {}", .path.display(), .source)]
    FlushFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 钩子在 before_start 中返回错误，中止下载。
    #[error("{0}")]
    HookAbort(#[from] HookAbort),
}
