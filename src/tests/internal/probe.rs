//! 能力探测测试：HEAD 元信息解析、Range 标记的大小写与非法值、探测失败。

use crate::internal::fetch::structs::fetch_error::FetchError;
use crate::internal::http::structs::fetch_client::FetchClient;
use crate::internal::probe::functions::probe_metadata::probe_metadata;
use crate::tests::{MockServerConfig, spawn_mock_server, synthetic_body};

async fn probe(config: MockServerConfig) -> Result<crate::metadata::ResourceMetadata, FetchError> {
    let server = spawn_mock_server(config).await;
    let client = FetchClient::new().unwrap();
    let url = url::Url::parse(&server.url()).unwrap();
    probe_metadata(&client, &url).await
}

#[tokio::test]
async fn probe_reads_size_ranges_and_filename() {
    let meta = probe(MockServerConfig {
        content_disposition: Some(
            "attachment; filename=\"vosk-model-small-cn-0.22.zip\""
                .to_string(),
        ),
        content_type: Some("application/zip; charset=binary".to_string()),
        last_modified: Some("Wed, 21 Oct 2015 07:28:00 GMT".to_string()),
        ..MockServerConfig::with_body(synthetic_body(2048, 7))
    })
    .await
    .unwrap();

    assert_eq!(meta.total_size, 2048);
    assert!(meta.supports_ranges);
    assert!(meta.rangeable());
    assert_eq!(
        meta.suggested_filename.as_deref(),
        Some("vosk-model-small-cn-0.22.zip"),
        "文件名应去除包裹引号"
    );
    assert_eq!(meta.content_type.as_deref(), Some("application/zip"));
    assert!(meta.last_modified.is_some());
}

#[tokio::test]
async fn accept_ranges_marker_is_case_insensitive() {
    let meta = probe(MockServerConfig {
        accept_ranges: Some("BYTES".to_string()),
        ..MockServerConfig::with_body(vec![1, 2, 3])
    })
    .await
    .unwrap();

    assert!(meta.supports_ranges);
}

#[tokio::test]
async fn non_bytes_marker_means_unsupported() {
    let meta = probe(MockServerConfig {
        accept_ranges: Some("none".to_string()),
        ..MockServerConfig::with_body(vec![1, 2, 3])
    })
    .await
    .unwrap();
    assert!(!meta.supports_ranges);

    let meta = probe(MockServerConfig {
        accept_ranges: None,
        ..MockServerConfig::with_body(vec![1, 2, 3])
    })
    .await
    .unwrap();
    assert!(!meta.supports_ranges, "缺失 Accept-Ranges 应视为不支持");
}

#[tokio::test]
async fn missing_content_length_means_unknown_size() {
    let meta = probe(MockServerConfig {
        omit_content_length: true,
        ..MockServerConfig::with_body(synthetic_body(512, 3))
    })
    .await
    .unwrap();

    assert_eq!(meta.total_size, 0);
    assert!(!meta.rangeable(), "大小未知时不满足分段前置条件");
}

#[tokio::test]
async fn failed_head_request_surfaces_status_error() {
    let result = probe(MockServerConfig {
        head_status: 500,
        ..MockServerConfig::with_body(vec![1, 2, 3])
    })
    .await;

    match result {
        Err(FetchError::Status(code)) => assert_eq!(code.as_u16(), 500),
        other => panic!("预期 Status 错误，得到 {other:?}"),
    }
}
