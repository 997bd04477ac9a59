// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::domain::models::website::{Website, WebsiteFields};
use crate::domain::repositories::website_repository::{RepositoryError, WebsiteRepository};

/// 网站记录服务
///
/// 对已存储记录的列表、更新和删除操作
pub struct WebsiteService {
    repo: Arc<dyn WebsiteRepository>,
}

impl WebsiteService {
    pub fn new(repo: Arc<dyn WebsiteRepository>) -> Self {
        Self { repo }
    }

    /// 列出全部记录，最新的在前
    pub async fn list(&self) -> Result<Vec<Website>, RepositoryError> {
        self.repo.list_newest_first().await
    }

    /// 覆盖记录的品牌名称和描述
    ///
    /// # 错误
    /// * `RepositoryError::NotFound` - 记录不存在
    pub async fn update(&self, id: i32, fields: WebsiteFields) -> Result<Website, RepositoryError> {
        let website = self.repo.update(id, &fields).await?;
        info!("Updated website record {}", id);
        Ok(website)
    }

    /// 删除记录并返回删除前的值
    ///
    /// # 错误
    /// * `RepositoryError::NotFound` - 记录不存在
    pub async fn delete(&self, id: i32) -> Result<Website, RepositoryError> {
        let website = self.repo.delete(id).await?;
        info!("Deleted website record {}", id);
        Ok(website)
    }
}
