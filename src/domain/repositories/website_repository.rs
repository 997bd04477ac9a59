// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{Website, WebsiteFields};
use async_trait::async_trait;
use sea_orm::DbErr;
use std::time::Duration;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found.")]
    NotFound,
    /// 数据库调用超时
    #[error("Database call timed out after {0:?}")]
    Timeout(Duration),
}

/// 网站记录仓库特质
///
/// 定义网站记录的数据访问接口，`id` 和 `timestamp` 由实现方分配
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// 创建记录并返回完整的存储行
    async fn create(&self, fields: &WebsiteFields) -> Result<Website, RepositoryError>;
    /// 根据ID查找记录
    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError>;
    /// 按时间倒序列出全部记录
    async fn list_newest_first(&self) -> Result<Vec<Website>, RepositoryError>;
    /// 覆盖记录的两个字段，不存在时返回 `NotFound`
    async fn update(&self, id: i32, fields: &WebsiteFields) -> Result<Website, RepositoryError>;
    /// 删除记录并返回删除前的值，不存在时返回 `NotFound`
    async fn delete(&self, id: i32) -> Result<Website, RepositoryError>;
}
