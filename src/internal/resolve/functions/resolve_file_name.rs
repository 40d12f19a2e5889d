use percent_encoding::percent_decode_str;
use url::Url;

use crate::internal::probe::structs::resource_metadata::ResourceMetadata;

/// 推导文件名，优先级从高到低：
/// 1. 响应头 Content-Disposition 的 filename 属性；
/// 2. URL 路径的最后一段（百分号解码后非空）；
/// 3. 按 Content-Type 合成 `downloaded_file<ext>`，未知类型用 `.bin`。
pub fn resolve_file_name(url: &Url, meta: &ResourceMetadata) -> String {
    if let Some(name) = &meta.suggested_filename {
        return name.clone();
    }

    if let Some(name) = file_name_from_url(url) {
        return name;
    }

    format!(
        "downloaded_file{}",
        extension_for_mime(meta.content_type.as_deref())
    )
}

/// 取 URL 路径最后一个非空段并做百分号解码；根路径返回 None。
fn file_name_from_url(url: &Url) -> Option<String> {
    let last = url
        .path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()?;
    let decoded = percent_decode_str(last).decode_utf8_lossy().to_string();
    if decoded.is_empty() || decoded == "/" {
        None
    } else {
        Some(decoded)
    }
}

/// 常见 MIME 类型对应的扩展名；覆盖模型分发常用的归档与文本类型，
/// 其余一律 `.bin`。
fn extension_for_mime(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("application/zip") => ".zip",
        Some("application/gzip") | Some("application/x-gzip") => ".gz",
        Some("application/x-tar") => ".tar",
        Some("application/json") => ".json",
        Some("application/pdf") => ".pdf",
        Some("text/plain") => ".txt",
        Some("text/html") => ".html",
        Some("audio/wav") | Some("audio/x-wav") => ".wav",
        Some("audio/mpeg") => ".mp3",
        _ => ".bin",
    }
}
