use std::path::{Path, PathBuf};

use crate::internal::fetch::structs::fetch_error::FetchError;
use crate::internal::fetch::structs::file_fetcher::FileFetcher;

/// 下载单个文件并在终端显示进度条，成功后打印落盘路径。
///
/// `save_path` 为空时落在当前工作目录，文件名由响应头或 URL 推导；
/// 指向已存在目录时文件名追加其后；否则原样作为目标文件路径。
/// 需要更细配置（写入缓冲大小、自定义钩子、进度监听）时直接使用
/// [`FileFetcher`]。
///
/// example:
/// ```rust,no_run
/// use model_fetch::fetch_file;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let path = fetch_file(
///     "https://alphacephei.com/vosk/models/vosk-model-small-cn-0.22.zip",
///     Some("Model/stt/".as_ref()),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_file(
    url: &str,
    save_path: Option<&Path>,
) -> Result<PathBuf, FetchError> {
    let mut fetcher = FileFetcher::new(url)?.with_progress_bar();
    if let Some(p) = save_path {
        fetcher = fetcher.save_to(p);
    }

    let path = fetcher.send().await?;
    println!("✓ 下载完成: {}", path.display());
    Ok(path)
}
