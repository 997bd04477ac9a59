// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::website::WebsiteFields;
use crate::utils::validators::ValidationError;

/// 网站记录更新请求
///
/// 两个字段都会被整体覆盖，不支持部分更新
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct UpdateWebsiteRequestDto {
    pub brand_name: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<UpdateWebsiteRequestDto> for WebsiteFields {
    type Error = ValidationError;

    fn try_from(dto: UpdateWebsiteRequestDto) -> Result<Self, Self::Error> {
        match (dto.brand_name, dto.description) {
            (Some(brand_name), Some(description)) => Ok(WebsiteFields::new(brand_name, description)),
            _ => Err(ValidationError::InvalidBody(
                "brand_name and description are required.".to_string(),
            )),
        }
    }
}
