// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validators::validate_url_shape;

/// 网站分析请求数据传输对象
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
pub struct AnalyzeRequestDto {
    /// 要分析的网页URL
    #[validate(
        required(message = "URL is required."),
        length(min = 1, message = "URL is required."),
        custom(function = "validate_url_shape")
    )]
    pub url: Option<String>,
}

impl AnalyzeRequestDto {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}
