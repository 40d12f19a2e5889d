pub mod fetch_config;
pub mod fetch_error;
pub mod fetch_hooks_container;
pub mod fetch_progress;
pub mod fetch_status;
pub mod file_fetcher;
pub mod hook_adapters;
pub mod progress_bar_hook;
pub mod range_parts;
pub mod range_plan;
pub mod save_target;

// 重导出公共类型
pub use fetch_config::{DEFAULT_CHUNK_SIZE, FetchConfig};
pub use fetch_error::FetchError;
pub use fetch_hooks_container::FetchHooksContainer;
pub use fetch_progress::FetchProgress;
pub use fetch_status::FetchStatus;
pub use file_fetcher::FileFetcher;
pub use progress_bar_hook::ProgressBarHook;
pub use range_parts::{RangePart, RangeParts};
pub use range_plan::{
    MAX_WORKERS, MIN_WORKERS, RangeSpec, detect_worker_count, plan_ranges,
};
