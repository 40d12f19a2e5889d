//! 分段计划：把资源切成连续、不重叠、恰好覆盖全文件的字节区间。

/// 并发 worker 数下限。
pub const MIN_WORKERS: usize = 2;

/// 并发 worker 数上限。
pub const MAX_WORKERS: usize = 8;

/// 单个 worker 负责的字节区间，`end` 为**含**上界。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    /// worker 序号（0..N-1），最终拼接按此序号排序
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

impl RangeSpec {
    /// 区间字节数（区间两端均含，至少为 1）。
    pub fn byte_len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// 生成 Range 请求头的值：`bytes=start-end`（两端均含）。
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// 根据可用并行度确定 worker 数：clamp(并行度, 2, 8)。
pub fn detect_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(MIN_WORKERS)
        .clamp(MIN_WORKERS, MAX_WORKERS)
}

/// 把 `[0, total_size-1]` 均分为至多 `workers` 段。
///
/// 每段长度为整除结果，余数全部并入最后一段，保证覆盖字节数精确等于
/// `total_size`。文件字节数少于 worker 数时退化为每字节一段。
///
/// # Panics
///
/// `total_size == 0` 时无区间可分，调用方须先走单流路径。
pub fn plan_ranges(total_size: u64, workers: usize) -> Vec<RangeSpec> {
    assert!(total_size > 0, "分段计划要求已知且非零的文件大小");

    let workers = (workers as u64).min(total_size).max(1) as usize;
    let span = total_size / workers as u64;

    (0..workers)
        .map(|index| {
            let start = index as u64 * span;
            let end = if index == workers - 1 {
                total_size - 1
            } else {
                start + span - 1
            };
            RangeSpec { index, start, end }
        })
        .collect()
}
