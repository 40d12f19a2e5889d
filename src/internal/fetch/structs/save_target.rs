use std::path::PathBuf;

/// 单流下载的落盘目标。
///
/// 能力探测成功时路径已在下载前解析完毕；探测失败的回退路径上，
/// 文件名要等整文件响应头到达后才能确定。
#[derive(Debug, Clone)]
pub(crate) enum SaveTarget {
    /// 路径已解析完毕，直接写入。
    Resolved(PathBuf),
    /// 待整文件响应头到达后再解析；内为用户指定的保存位置（可空）。
    Unresolved(Option<PathBuf>),
}
