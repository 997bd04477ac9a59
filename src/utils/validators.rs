// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// 目标 URL 的格式：协议前缀后不允许出现空白或双引号
pub static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(ftp|http|https)://[^\s"]+$"#).expect("URL pattern must compile")
});

/// 验证错误类型
///
/// 调用方输入有误，对外映射为 400
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 缺少 URL
    #[error("URL is required.")]
    MissingUrl,
    /// URL 格式无效
    #[error("Invalid URL format.")]
    InvalidUrl,
    /// 请求体无效
    #[error("{0}")]
    InvalidBody(String),
    /// 路径中的记录 ID 无效
    #[error("Invalid record id: {0}")]
    InvalidId(String),
}

/// 检查 URL 是否符合 `协议://...` 的简单格式
///
/// # 参数
///
/// * `url` - URL字符串
///
/// # 返回值
///
/// 格式合法返回 true
pub fn is_valid_url_shape(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// `validator` 自定义校验函数
pub fn validate_url_shape(url: &str) -> Result<(), validator::ValidationError> {
    if is_valid_url_shape(url) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url_format")
            .with_message(Cow::Borrowed("Invalid URL format.")))
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let codes: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| e.code.to_string())
            .collect();

        if codes.iter().any(|c| c == "required" || c == "length") {
            ValidationError::MissingUrl
        } else {
            ValidationError::InvalidUrl
        }
    }
}
