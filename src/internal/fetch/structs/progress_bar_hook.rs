use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};

use crate::internal::fetch::traits::hook::FetchHook;

/// 终端进度条钩子：已传输字节 / 总大小、速率与剩余时间估计。
///
/// 总大小在能力探测或首个响应到达前未知，钩子在第一次拿到
/// `total` 时补设长度；回退单流重下时进度会回落到 0 重新推进。
pub struct ProgressBarHook {
    bar: ProgressBar,
}

impl ProgressBarHook {
    pub fn new() -> Self {
        let bar = ProgressBar::no_length();
        bar.set_style(
            ProgressStyle::with_template(
                "{bar:40.cyan/blue} {bytes}/{total_bytes} {bytes_per_sec} 已用 {elapsed} 剩余 {eta}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl Default for ProgressBarHook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchHook for ProgressBarHook {
    fn on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        if let Some(t) = total {
            if self.bar.length() != Some(t) {
                self.bar.set_length(t);
            }
        }
        self.bar.set_position(bytes_done);
    }

    async fn after_complete(&mut self) {
        self.bar.finish();
    }
}
