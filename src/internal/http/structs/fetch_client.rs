use reqwest::Client;

use crate::internal::fetch::structs::fetch_error::FetchError;

/// 所有请求统一携带的标识 UA。
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// HTTP 客户端结构体
///
/// 该结构体定位
/// - 统一持有 reqwest::Client（内部是 Arc，可随意 clone）
/// - 保证探测请求、整文件请求与各分段请求携带同一组标识头
#[derive(Debug, Clone)]
pub struct FetchClient {
    pub client: Client,
}

impl FetchClient {
    /// 创建新的客户端；默认头只有固定 UA，分段请求的 Range 头由调用方按段添加。
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .http1_only()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { client })
    }
}
