use url::Url;

use crate::internal::fetch::structs::fetch_error::FetchError;
use crate::internal::http::structs::fetch_client::FetchClient;

use super::super::structs::resource_metadata::ResourceMetadata;

/// 能力探测：向目标 URL 发送 HEAD 请求，只读响应头、不传输正文，
/// 返回资源大小与 Range 支持情况。
///
/// 失败（连接、TLS、非 2xx 状态）不在本函数内重试，由调用方决定降级：
/// 探测失败只意味着失去分段并发的机会，不应终止整个下载。
pub async fn probe_metadata(
    client: &FetchClient,
    url: &Url,
) -> Result<ResourceMetadata, FetchError> {
    let resp = client.client.head(url.as_str()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(ResourceMetadata::from_headers(resp.headers()))
}
