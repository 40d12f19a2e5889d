//! 单流下载：整文件 GET，固定大小缓冲流式写入并更新进度。

use std::path::PathBuf;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

use crate::internal::fetch::structs::fetch_error::FetchError;
use crate::internal::fetch::structs::fetch_hooks_container::FetchHooksContainer;
use crate::internal::fetch::structs::fetch_progress::FetchProgress;
use crate::internal::fetch::structs::save_target::SaveTarget;
use crate::internal::probe::structs::resource_metadata::ResourceMetadata;
use crate::internal::resolve::functions::resolve_file_name::resolve_file_name;
use crate::internal::resolve::functions::resolve_save_path::resolve_save_path;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

/// 单流下载的参数（形参超过 3 个，用 struct 承载）。
pub(crate) struct RunSingleStreamParams<'a> {
    pub client: &'a Client,
    pub url: &'a Url,
    pub target: SaveTarget,
    /// 写入缓冲大小（字节）
    pub chunk_size: usize,
    pub hooks: &'a mut FetchHooksContainer,
    pub progress: &'a UnlockReactiveProperty<FetchProgress>,
}

/// 单流下载：整文件 GET，经 `chunk_size` 大小的缓冲写入目标文件，
/// 逐块推进进度与钩子，成功时返回落盘路径。
///
/// 中途失败时已写入的部分文件**保留在磁盘上**，不做清理，便于使用者
/// 检查残留内容；调用方不要假定失败后目标路径不存在。
pub(crate) async fn run_single_stream(
    params: RunSingleStreamParams<'_>,
) -> Result<PathBuf, FetchError> {
    let resp = params.client.get(params.url.as_str()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let meta = ResourceMetadata::from_headers(resp.headers());
    let path = match params.target {
        SaveTarget::Resolved(path) => path,
        SaveTarget::Unresolved(dest) => {
            let file_name = resolve_file_name(params.url, &meta);
            resolve_save_path(&file_name, dest.as_deref()).await?
        }
    };

    let total = (meta.total_size > 0).then_some(meta.total_size);
    let _ = params.progress.update(FetchProgress {
        bytes_done: 0,
        total,
    });

    let file =
        File::create(&path)
            .await
            .map_err(|e| FetchError::CreateFile {
                path: path.clone(),
                source: e,
            })?;
    let mut writer = BufWriter::with_capacity(params.chunk_size.max(1), file);

    let mut stream = resp.bytes_stream();
    let mut bytes_done: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        let len = chunk.len() as u64;
        bytes_done += len;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| FetchError::WriteFile {
                path: path.clone(),
                source: e,
            })?;

        params.hooks.run_on_chunk(&chunk);
        params.hooks.run_on_progress(bytes_done, total);
        let _ = params.progress.update(FetchProgress { bytes_done, total });
    }

    writer.flush().await.map_err(|e| FetchError::FlushFile {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
