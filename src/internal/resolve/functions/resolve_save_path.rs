use std::path::{Path, PathBuf};

use tokio::fs;

use crate::internal::fetch::structs::fetch_error::FetchError;

/// 由文件名与可选的用户目标位置确定最终落盘路径：
/// - 未指定目标：文件名本身（相对当前工作目录）；
/// - 目标是已存在的目录：目录下追加文件名；
/// - 其他情况：目标路径原样使用。
///
/// 父目录不存在时会创建（重复创建不视为错误）。
pub async fn resolve_save_path(
    file_name: &str,
    dest: Option<&Path>,
) -> Result<PathBuf, FetchError> {
    let path = match dest {
        None => PathBuf::from(file_name),
        Some(d) if d.is_dir() => d.join(file_name),
        Some(d) => d.to_path_buf(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                FetchError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;
        }
    }

    Ok(path)
}
