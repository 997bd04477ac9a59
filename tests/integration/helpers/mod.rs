// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{response::Html, routing::get, Router};
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sitelens::application::use_cases::analyze_website_use_case::AnalyzeWebsiteUseCase;
use sitelens::domain::services::llm_service::LLMService;
use sitelens::domain::services::website_service::WebsiteService;
use sitelens::engines::reqwest_engine::ReqwestEngine;
use sitelens::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use sitelens::presentation::routes;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const ACME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Acme Rockets</title>
  <meta name="description" content="Acme builds reusable rockets for small payloads.">
</head>
<body><p>Ignored paragraph</p></body>
</html>"#;

pub const BARE_PAGE: &str = "<html><body><div>Nothing to see</div></body></html>";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<WebsiteRepositoryImpl>,
    pub site_url: String,
}

/// 创建已执行迁移的内存数据库
///
/// 内存 SQLite 每个连接都是独立的库，连接池必须固定为一个连接
pub async fn test_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

/// 启动本地测试站点，返回基础URL
///
/// - `/acme`：标题和 meta 描述齐全
/// - `/bare`：没有任何可提取内容
/// - `/slow`：2 秒后才响应
/// - `/broken`：返回 500
pub async fn start_site_server() -> String {
    let app = Router::new()
        .route("/acme", get(|| async { Html(ACME_PAGE) }))
        .route("/bare", get(|| async { Html(BARE_PAGE) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Html(ACME_PAGE)
            }),
        )
        .route(
            "/broken",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// 未配置 LLM 的服务
pub fn disabled_llm() -> LLMService {
    LLMService::new(&sitelens::config::settings::LlmSettings {
        api_key: None,
        model: "gemini-test".to_string(),
        api_base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        temperature: 0.7,
        max_output_tokens: 100,
    })
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(disabled_llm(), Duration::from_secs(5)).await
}

/// 使用指定的 LLM 服务和抓取超时创建测试应用
pub async fn create_test_app_with(llm: LLMService, fetch_timeout: Duration) -> TestApp {
    let db = test_db().await;
    let repo = Arc::new(WebsiteRepositoryImpl::new(db, Duration::from_secs(5)));
    let engine = Arc::new(ReqwestEngine::new("sitelens-test").unwrap());

    let analyze = Arc::new(
        AnalyzeWebsiteUseCase::new(engine, Arc::new(llm), repo.clone())
            .with_fetch_timeout(fetch_timeout),
    );
    let websites = Arc::new(WebsiteService::new(repo.clone()));

    let server = TestServer::new(routes::app(analyze, websites, None)).unwrap();
    let site_url = start_site_server().await;

    TestApp {
        server,
        repo,
        site_url,
    }
}
