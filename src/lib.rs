/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::fetch_file::*;

pub mod fetch {
    use crate::internal;
    // 下载器：配置、进度、状态、错误与构建器
    pub use internal::fetch::structs::*;
    // 钩子 trait（进度上报接口）
    pub use internal::fetch::traits::hook::*;
}

pub mod metadata {
    use crate::internal;
    pub use internal::probe::structs::resource_metadata::*;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}
