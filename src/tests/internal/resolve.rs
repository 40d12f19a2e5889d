//! 名称与路径解析测试：文件名推导优先级、目标位置的三种形态、父目录创建。

use std::path::PathBuf;

use url::Url;

use crate::internal::probe::structs::resource_metadata::ResourceMetadata;
use crate::internal::resolve::functions::resolve_file_name::resolve_file_name;
use crate::internal::resolve::functions::resolve_save_path::resolve_save_path;

fn meta_with(
    filename: Option<&str>,
    content_type: Option<&str>,
) -> ResourceMetadata {
    ResourceMetadata {
        total_size: 0,
        supports_ranges: false,
        suggested_filename: filename.map(|s| s.to_string()),
        content_type: content_type.map(|s| s.to_string()),
        last_modified: None,
    }
}

#[test]
fn disposition_filename_wins_over_url_path() {
    let url = Url::parse("https://example.com/files/from_url.zip").unwrap();
    let meta = meta_with(Some("from_header.zip"), None);
    assert_eq!(resolve_file_name(&url, &meta), "from_header.zip");
}

#[test]
fn url_path_is_used_when_no_header_filename() {
    let url =
        Url::parse("https://example.com/models/vosk-model-cn.zip?v=1")
            .unwrap();
    let meta = meta_with(None, None);
    assert_eq!(resolve_file_name(&url, &meta), "vosk-model-cn.zip");
}

#[test]
fn url_path_is_percent_decoded() {
    let url =
        Url::parse("https://example.com/files/my%20model.zip").unwrap();
    let meta = meta_with(None, None);
    assert_eq!(resolve_file_name(&url, &meta), "my model.zip");
}

#[test]
fn known_mime_synthesizes_extension() {
    let url = Url::parse("https://example.com/").unwrap();
    let meta = meta_with(None, Some("application/zip"));
    assert_eq!(resolve_file_name(&url, &meta), "downloaded_file.zip");
}

#[test]
fn unknown_mime_falls_back_to_bin() {
    let url = Url::parse("https://example.com/").unwrap();

    let meta = meta_with(None, Some("application/x-mystery"));
    assert_eq!(resolve_file_name(&url, &meta), "downloaded_file.bin");

    let meta = meta_with(None, None);
    assert_eq!(resolve_file_name(&url, &meta), "downloaded_file.bin");
}

#[tokio::test]
async fn no_destination_uses_bare_file_name() {
    let path = resolve_save_path("a.zip", None).await.unwrap();
    assert_eq!(path, PathBuf::from("a.zip"));
}

#[tokio::test]
async fn existing_directory_gets_file_name_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = resolve_save_path("a.zip", Some(dir.path()))
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("a.zip"));
}

#[tokio::test]
async fn concrete_path_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("renamed.bin");
    let path = resolve_save_path("a.zip", Some(&dest)).await.unwrap();
    assert_eq!(path, dest);
}

#[tokio::test]
async fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested/deeper/target.zip");
    let path = resolve_save_path("a.zip", Some(&dest)).await.unwrap();

    assert_eq!(path, dest);
    assert!(
        dir.path().join("nested/deeper").is_dir(),
        "父目录应已创建"
    );

    // 再解析一次，重复创建目录不应报错
    let again = resolve_save_path("a.zip", Some(&dest)).await.unwrap();
    assert_eq!(again, dest);
}
