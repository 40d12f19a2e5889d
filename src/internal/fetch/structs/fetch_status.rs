/// 下载阶段（由下载器内部推进，外部只读监听）。
///
/// 一次下载内阶段只会前进，不会回到已离开的阶段；
/// `Ranged` 失败后转入 `SingleStream` 至多发生一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// 尚未开始
    Idle,
    /// 正在探测资源能力（HEAD）
    Probing,
    /// 分段并发下载中
    Ranged,
    /// 单流下载中（默认路径或回退路径）
    SingleStream,
    /// 成功结束
    Done,
    /// 失败结束
    Failed,
}
