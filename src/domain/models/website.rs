// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 提取失败时使用的占位值
pub const NOT_FOUND: &str = "Not found";

/// 网站分析记录
///
/// 表示一条已持久化的网站分析结果。`id` 和 `timestamp` 只由存储层分配，
/// 创建后不可修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    /// 记录唯一标识符，由数据库自增生成
    pub id: i32,
    /// 品牌名称（页面标题或 og:site_name）
    pub brand_name: String,
    /// 网站描述（原始抓取文本或 AI 改写后的文本）
    pub description: String,
    /// 创建时间
    pub timestamp: DateTime<Utc>,
}

/// 待写入的网站字段
///
/// 创建和更新记录时调用方唯一能提供的内容。构造时空白值会被替换成
/// [`NOT_FOUND`]，保证落库的记录字段永不为空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteFields {
    pub brand_name: String,
    pub description: String,
}

impl WebsiteFields {
    /// 创建新的字段集合
    ///
    /// # 参数
    ///
    /// * `brand_name` - 品牌名称
    /// * `description` - 描述
    pub fn new(brand_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            brand_name: or_not_found(brand_name.into()),
            description: or_not_found(description.into()),
        }
    }
}

/// 空白字符串替换为占位值
pub fn or_not_found(value: String) -> String {
    if value.trim().is_empty() {
        NOT_FOUND.to_string()
    } else {
        value
    }
}

/// 判断值是否为占位值
pub fn is_not_found(value: &str) -> bool {
    value == NOT_FOUND
}
