//! 分段并发下载得到的各段字节：按 worker 序号归位，最终一次性拼接落盘。

/// 单个 worker 的下载结果：worker 序号及其负责区间的完整字节。
#[derive(Debug, Clone)]
pub struct RangePart {
    /// 所属 worker 序号（即分段计划中的 index）
    pub index: usize,
    /// 该段的数据
    pub data: Vec<u8>,
}

/// 全部 worker 的下载结果集合。
///
/// 各段只由其所属 worker 写入一次，全部 worker 结束后才读取；
/// 按 `index` 升序拼接即还原资源原始字节序，与各 worker 的完成先后无关。
#[derive(Debug, Clone, Default)]
pub struct RangeParts {
    parts: Vec<RangePart>,
}

impl RangeParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            parts: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, part: RangePart) {
        self.parts.push(part);
    }

    /// 总字节数。
    pub fn total_len(&self) -> u64 {
        self.parts.iter().map(|p| p.data.len() as u64).sum()
    }

    /// 按 worker 序号升序返回各段，供逐段写入目标文件。
    pub fn into_ordered(mut self) -> Vec<RangePart> {
        self.parts.sort_by_key(|p| p.index);
        self.parts
    }

    /// 按序拼接成完整字节。会整体复制一份，主要供测试与小文件使用。
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_len() as usize);
        for part in self.into_ordered() {
            out.extend_from_slice(&part.data);
        }
        out
    }
}
