use chrono::{DateTime, FixedOffset};
use reqwest::header::{
    ACCEPT_RANGES, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE,
    HeaderMap, LAST_MODIFIED,
};
use serde::{Deserialize, Serialize};

/// 远程资源的元信息，由能力探测（HEAD）或整文件响应头解析得到，解析后只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub total_size: u64,            // 资源总大小（字节），0 表示未知
    pub supports_ranges: bool,      // 服务器是否接受字节 Range 请求
    pub suggested_filename: Option<String>, // Content-Disposition 携带的文件名（已去引号）
    pub content_type: Option<String>,       // MIME 类型（不含参数部分）
    pub last_modified: Option<DateTime<FixedOffset>>, // 原始修改时间
}

impl ResourceMetadata {
    /// 从响应头解析元信息。
    ///
    /// - `Content-Length` 缺失或不可解析时按 0（未知）处理；
    /// - `Accept-Ranges` 与字面量 `bytes` 做不区分大小写比较，
    ///   其他值（包括缺失、`none`）一律视为不支持；
    /// - `Content-Disposition` 的 filename 属性去除两侧单双引号。
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let total_size = headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let supports_ranges = headers
            .get(ACCEPT_RANGES)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().eq_ignore_ascii_case("bytes"))
            .unwrap_or(false);

        let suggested_filename = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_filename);

        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or("").trim().to_string())
            .filter(|v| !v.is_empty());

        let last_modified = headers
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| DateTime::parse_from_rfc2822(v).ok());

        Self {
            total_size,
            supports_ranges,
            suggested_filename,
            content_type,
            last_modified,
        }
    }

    /// 是否满足分段并发下载的前置条件（支持 Range 且大小已知）。
    pub fn rangeable(&self) -> bool {
        self.supports_ranges && self.total_size > 0
    }
}

/// 从 Content-Disposition 值中取 filename 属性；没有或为空时返回 None。
fn disposition_filename(value: &str) -> Option<String> {
    let idx = value.find("filename=")?;
    let raw = value[idx + "filename=".len()..].trim();
    let raw = raw.split(';').next().unwrap_or(raw).trim();
    let name = raw
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string();
    if name.is_empty() { None } else { Some(name) }
}
