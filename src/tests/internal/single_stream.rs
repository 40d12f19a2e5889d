//! 单流下载测试：内容正确性、进度推进、失败时的残留文件行为、
//! 探测失败后的文件名解析。

use std::sync::{Arc, Mutex};

use crate::fetch::{FetchError, FetchStatus, FileFetcher};
use crate::tests::{MockServerConfig, spawn_mock_server, synthetic_body};

#[tokio::test]
async fn downloads_whole_file_without_range_support() {
    let body = synthetic_body(200_000, 11);
    let server = spawn_mock_server(MockServerConfig {
        accept_ranges: None,
        ..MockServerConfig::with_body(body.clone())
    })
    .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = FileFetcher::new(&server.url())
        .unwrap()
        .save_to(dir.path());
    let status = fetcher.status();

    let path = fetcher.send().await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), body);
    assert_eq!(path.file_name().unwrap(), "model.zip");
    assert_eq!(server.plain_gets.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(
        server.range_request_count(),
        0,
        "不支持 Range 时不应发出任何分段请求"
    );
    assert_eq!(status.get_current(), Some(FetchStatus::Done));
}

#[tokio::test]
async fn progress_reaches_total_exactly() {
    let total = 64 * 1024;
    let body = synthetic_body(total, 13);
    let server = spawn_mock_server(MockServerConfig {
        accept_ranges: None,
        ..MockServerConfig::with_body(body)
    })
    .await;

    let samples: Arc<Mutex<Vec<(u64, Option<u64>)>>> =
        Arc::new(Mutex::new(Vec::new()));
    let samples_c = Arc::clone(&samples);

    let dir = tempfile::tempdir().unwrap();
    FileFetcher::new(&server.url())
        .unwrap()
        .save_to(dir.path())
        .with_on_progress_hook(move |done, total| {
            samples_c.lock().unwrap().push((done, total));
        })
        .send()
        .await
        .unwrap();

    let samples = samples.lock().unwrap();
    assert!(!samples.is_empty(), "进度钩子至少应被调用一次");

    let mut prev = 0u64;
    for &(done, _) in samples.iter() {
        assert!(done >= prev, "进度应单调递增");
        prev = done;
    }

    let (last_done, last_total) = *samples.last().unwrap();
    assert_eq!(last_done, total as u64, "最终进度应精确到达总大小");
    assert_eq!(last_total, Some(total as u64));
}

#[tokio::test]
async fn failed_get_surfaces_status_error() {
    let server = spawn_mock_server(MockServerConfig {
        accept_ranges: None,
        get_status: 404,
        ..MockServerConfig::with_body(synthetic_body(1024, 17))
    })
    .await;

    let dir = tempfile::tempdir().unwrap();
    let result = FileFetcher::new(&server.url())
        .unwrap()
        .save_to(dir.path())
        .send()
        .await;

    match result {
        Err(FetchError::Status(code)) => assert_eq!(code.as_u16(), 404),
        other => panic!("预期 Status 错误，得到 {other:?}"),
    }
}

/// 传输中断后目标路径上保留已写入的部分内容，下载器不做清理。
#[tokio::test]
async fn interrupted_stream_leaves_partial_file_in_place() {
    let total = 200_000;
    let body = synthetic_body(total, 19);
    let server = spawn_mock_server(MockServerConfig {
        accept_ranges: None,
        truncate_plain_get_at: Some(100_000),
        ..MockServerConfig::with_body(body)
    })
    .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("partial.zip");
    let result = FileFetcher::new(&server.url())
        .unwrap()
        .save_to(&dest)
        .send()
        .await;

    assert!(result.is_err(), "中断的传输应报错");
    assert!(dest.exists(), "部分文件应保留在磁盘上");

    let written = std::fs::metadata(&dest).unwrap().len();
    assert!(
        written < total as u64,
        "残留文件应小于完整大小: {written} vs {total}"
    );
}

/// 探测失败时文件名要等整文件响应头到达后再解析。
#[tokio::test]
async fn filename_resolves_from_get_headers_when_probe_fails() {
    let body = synthetic_body(4096, 23);
    let server = spawn_mock_server(MockServerConfig {
        head_status: 500,
        content_disposition: Some(
            "attachment; filename=\"named_by_server.bin\"".to_string(),
        ),
        ..MockServerConfig::with_body(body.clone())
    })
    .await;

    let dir = tempfile::tempdir().unwrap();
    let path = FileFetcher::new(&server.url())
        .unwrap()
        .save_to(dir.path())
        .send()
        .await
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "named_by_server.bin");
    assert_eq!(std::fs::read(&path).unwrap(), body);
    assert_eq!(
        server.range_request_count(),
        0,
        "探测失败后只应走单流"
    );
}
