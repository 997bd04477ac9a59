// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{Website, WebsiteFields};
use crate::domain::repositories::website_repository::{RepositoryError, WebsiteRepository};
use crate::infrastructure::database::entities::website;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// 网站记录仓库实现
///
/// 持有启动时创建的数据库连接，所有调用都受 `statement_timeout` 约束
#[derive(Clone)]
pub struct WebsiteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
    /// 单次数据库调用的最长等待时间
    statement_timeout: Duration,
}

impl WebsiteRepositoryImpl {
    /// 创建新的网站记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    /// * `statement_timeout` - 单次数据库调用的超时时间
    pub fn new(db: Arc<DatabaseConnection>, statement_timeout: Duration) -> Self {
        Self {
            db,
            statement_timeout,
        }
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.statement_timeout, fut).await {
            Ok(result) => result.map_err(RepositoryError::from),
            Err(_) => Err(RepositoryError::Timeout(self.statement_timeout)),
        }
    }

    async fn find_model(&self, id: i32) -> Result<Option<website::Model>, RepositoryError> {
        self.bounded(website::Entity::find_by_id(id).one(self.db.as_ref()))
            .await
    }
}

#[async_trait]
impl WebsiteRepository for WebsiteRepositoryImpl {
    async fn create(&self, fields: &WebsiteFields) -> Result<Website, RepositoryError> {
        let model = website::ActiveModel {
            id: NotSet,
            brand_name: Set(fields.brand_name.clone()),
            description: Set(fields.description.clone()),
            timestamp: Set(Utc::now().into()),
        };

        let inserted = self.bounded(model.insert(self.db.as_ref())).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn list_newest_first(&self) -> Result<Vec<Website>, RepositoryError> {
        let models = self
            .bounded(
                website::Entity::find()
                    .order_by_desc(website::Column::Timestamp)
                    .order_by_desc(website::Column::Id)
                    .all(self.db.as_ref()),
            )
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, fields: &WebsiteFields) -> Result<Website, RepositoryError> {
        let existing = self.find_model(id).await?.ok_or(RepositoryError::NotFound)?;

        let mut model: website::ActiveModel = existing.into();
        model.brand_name = Set(fields.brand_name.clone());
        model.description = Set(fields.description.clone());

        match self.bounded(model.update(self.db.as_ref())).await {
            Ok(updated) => Ok(updated.into()),
            Err(RepositoryError::Database(DbErr::RecordNotUpdated)) => {
                Err(RepositoryError::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: i32) -> Result<Website, RepositoryError> {
        let existing = self.find_model(id).await?.ok_or(RepositoryError::NotFound)?;

        let result = self
            .bounded(website::Entity::delete_by_id(id).exec(self.db.as_ref()))
            .await?;

        // Removed concurrently between the lookup and the delete
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(existing.into())
    }
}

impl From<website::Model> for Website {
    fn from(model: website::Model) -> Self {
        Self {
            id: model.id,
            brand_name: model.brand_name,
            description: model.description,
            timestamp: model.timestamp.with_timezone(&Utc),
        }
    }
}
