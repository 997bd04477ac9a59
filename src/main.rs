// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sitelens::application::use_cases::analyze_website_use_case::AnalyzeWebsiteUseCase;
use sitelens::config::settings::Settings;
use sitelens::domain::services::llm_service::{LLMService, LLMServiceTrait};
use sitelens::domain::services::website_service::WebsiteService;
use sitelens::engines::reqwest_engine::ReqwestEngine;
use sitelens::infrastructure::database::connection;
use sitelens::infrastructure::observability::metrics::init_metrics;
use sitelens::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use sitelens::presentation::routes;
use sitelens::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务。
/// 配置缺失或数据库连接失败时直接返回错误，进程以非零状态退出。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting sitelens...");

    // 2. Load configuration
    let settings = Settings::new().inspect_err(|e| error!("Invalid configuration: {}", e))?;
    info!("Configuration loaded");

    // 3. Initialize metrics
    let metrics_handle = if settings.metrics.enabled {
        Some(init_metrics()?)
    } else {
        None
    };

    // 4. Connect to database, fail fast
    let db = connection::create_pool(&settings.database)
        .await
        .inspect_err(|e| error!("Error connecting to the database: {}", e))?;
    let db = Arc::new(db);
    info!(
        "Connected to PostgreSQL at {}:{}",
        settings.database.host, settings.database.port
    );

    Migrator::up(db.as_ref(), None).await?;
    info!("Database schema ready");

    // 5. Initialize components
    let repo = Arc::new(WebsiteRepositoryImpl::new(
        db.clone(),
        settings.database.statement_timeout(),
    ));
    let engine = Arc::new(ReqwestEngine::new(&settings.fetch.user_agent)?);
    let llm = Arc::new(LLMService::new(&settings.llm));
    if !llm.is_configured() {
        warn!("No LLM API key configured, description enhancement is disabled");
    }

    let analyze = Arc::new(
        AnalyzeWebsiteUseCase::new(engine, llm, repo.clone())
            .with_fetch_timeout(settings.fetch.timeout()),
    );
    let websites = Arc::new(WebsiteService::new(repo));

    // 6. Start HTTP server
    let app = routes::app(analyze, websites, metrics_handle);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
