use std::path::PathBuf;

use url::Url;

/// 单流下载的默认写入缓冲大小（字节）。
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// 本次下载的配置，`send()` 之后不再变化。
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: Url,
    /// 保存位置：文件路径或已存在的目录；不设置时落在当前工作目录。
    pub save_path: Option<PathBuf>,
    /// 单流下载的写入缓冲大小（字节）。
    pub chunk_size: usize,
}

impl FetchConfig {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            url,
            save_path: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
