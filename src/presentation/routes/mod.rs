// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::analyze_website_use_case::AnalyzeWebsiteUseCase;
use crate::domain::services::website_service::WebsiteService;
use crate::presentation::handlers::{metrics_handler, website_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回未注入依赖的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/version", get(version));

    let website_routes = Router::new()
        .route(
            "/api/analyze",
            get(website_handler::list_websites).post(website_handler::analyze_website),
        )
        .route(
            "/api/analyze/",
            get(website_handler::list_websites).post(website_handler::analyze_website),
        )
        .route(
            "/api/analyze/{id}",
            put(website_handler::update_website).delete(website_handler::delete_website),
        );

    Router::new().merge(public_routes).merge(website_routes)
}

/// 创建注入了依赖的完整应用
///
/// # 参数
///
/// * `analyze` - 网站分析用例
/// * `websites` - 网站记录服务
/// * `metrics` - Prometheus 句柄，为 `None` 时不暴露 `/metrics`
pub fn app(
    analyze: Arc<AnalyzeWebsiteUseCase>,
    websites: Arc<WebsiteService>,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let mut router = routes();

    if let Some(handle) = metrics {
        router = router
            .route("/metrics", get(metrics_handler::metrics))
            .layer(Extension(handle));
    }

    router
        .layer(Extension(analyze))
        .layer(Extension(websites))
        .layer(TraceLayer::new_for_http())
}

/// 欢迎信息
pub async fn welcome() -> &'static str {
    "Welcome to the sitelens website analysis API!"
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
