use crate::internal::fetch::traits::hook::{FetchHook, HookAbort};

/// 钩子容器：注册的多个钩子按添加顺序依次执行。
///
/// 单流下载时由读流循环直接驱动；分段并发下载时整个容器移交给
/// 进度聚合任务，聚合结束后归还。
#[derive(Default)]
pub struct FetchHooksContainer {
    hooks: Vec<Box<dyn FetchHook>>,
}

impl FetchHooksContainer {
    /// 添加一个下载钩子；支持多次调用以注册多个钩子。
    pub fn add(&mut self, hook: impl FetchHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub async fn run_before_start(&mut self) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start().await?;
        }
        Ok(())
    }

    pub fn run_on_chunk(&mut self, chunk: &[u8]) {
        for h in self.hooks.iter_mut() {
            h.on_chunk(chunk);
        }
    }

    pub fn run_on_progress(
        &mut self,
        bytes_done: u64,
        total: Option<u64>,
    ) {
        for h in self.hooks.iter_mut() {
            h.on_progress(bytes_done, total);
        }
    }

    pub async fn run_after_complete(&mut self) {
        for h in self.hooks.iter_mut() {
            h.after_complete().await;
        }
    }
}
