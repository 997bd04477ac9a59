// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    application::dto::analyze_request::AnalyzeRequestDto,
    domain::{
        models::website::{Website, WebsiteFields},
        repositories::website_repository::{RepositoryError, WebsiteRepository},
        services::{
            extraction_service::ExtractionService,
            llm_service::{enhance_description, LLMServiceTrait},
        },
    },
    engines::traits::{EngineError, ScrapeRequest, ScraperEngine},
    utils::validators::ValidationError,
};

/// 默认抓取超时
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Website analysis timed out. The server did not respond in time.")]
    Timeout(#[source] EngineError),
    #[error("Failed to fetch website: {0}")]
    Fetch(#[source] EngineError),
    #[error("Failed to store website record: {0}")]
    Repository(#[from] RepositoryError),
}

impl AnalysisError {
    fn reason(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation",
            AnalysisError::Timeout(_) => "timeout",
            AnalysisError::Fetch(_) => "fetch",
            AnalysisError::Repository(_) => "store",
        }
    }
}

/// 网站分析用例
///
/// 校验 → 抓取并提取 → 尽力增强描述 → 持久化。只有抓取和提取都成功后才写库，
/// 失败的请求不会留下任何记录。
pub struct AnalyzeWebsiteUseCase {
    engine: Arc<dyn ScraperEngine>,
    llm: Arc<dyn LLMServiceTrait>,
    repo: Arc<dyn WebsiteRepository>,
    fetch_timeout: Duration,
}

impl AnalyzeWebsiteUseCase {
    pub fn new(
        engine: Arc<dyn ScraperEngine>,
        llm: Arc<dyn LLMServiceTrait>,
        repo: Arc<dyn WebsiteRepository>,
    ) -> Self {
        Self {
            engine,
            llm,
            repo,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub async fn execute(&self, dto: AnalyzeRequestDto) -> Result<Website, AnalysisError> {
        let result = self.run(dto).await;

        match &result {
            Ok(website) => {
                metrics::counter!("website_analyses_total").increment(1);
                info!("Stored website analysis {} ({})", website.id, website.brand_name);
            }
            Err(e) => {
                metrics::counter!("website_analyses_failed_total", "reason" => e.reason())
                    .increment(1);
            }
        }

        result
    }

    async fn run(&self, dto: AnalyzeRequestDto) -> Result<Website, AnalysisError> {
        dto.validate().map_err(ValidationError::from)?;
        let url = dto.url.ok_or(ValidationError::MissingUrl)?;

        info!("Analyzing website {} with engine {}", url, self.engine.name());

        let request = ScrapeRequest::new(url.clone(), self.fetch_timeout);
        let response = self.engine.scrape(&request).await.map_err(|e| {
            warn!("Fetching {} failed: {}", url, e);
            if e.is_timeout() {
                AnalysisError::Timeout(e)
            } else {
                AnalysisError::Fetch(e)
            }
        })?;

        metrics::histogram!("website_fetch_duration_seconds")
            .record(response.response_time_ms as f64 / 1000.0);

        let summary = ExtractionService::extract(&response.content);
        let description = enhance_description(self.llm.as_ref(), summary.description)
            .await
            .into_description();

        let fields = WebsiteFields::new(summary.brand_name, description);
        Ok(self.repo.create(&fields).await?)
    }
}
