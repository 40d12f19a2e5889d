use serde::{Deserialize, Serialize};

/// 下载进度：响应式状态，记录累计已下载字节数与总大小。
///
/// 单流下载由读流循环更新；分段并发下载由进度聚合任务统一更新，
/// 各 worker 不直接触碰本状态。随下载尝试创建，回退重试时清零，
/// 不做任何持久化。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchProgress {
    /// 已下载的字节数
    pub bytes_done: u64,
    /// 资源总大小（字节），未知时为 `None`
    pub total: Option<u64>,
}

impl FetchProgress {
    /// 进度百分比（0～100）；总大小为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done as f64 / t as f64) * 100.0)
            .unwrap_or(f64::NAN)
    }
}
