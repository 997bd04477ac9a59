// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// 初始化指标系统
///
/// 安装全局 Prometheus recorder 并注册应用指标，返回的句柄由 `/metrics` 渲染
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        "website_analyses_total",
        "Total number of website analyses stored"
    );
    describe_counter!(
        "website_analyses_failed_total",
        "Total number of website analyses that failed, by reason"
    );
    describe_counter!(
        "description_enhancements_total",
        "Description enhancement attempts, by outcome"
    );
    describe_histogram!(
        "website_fetch_duration_seconds",
        Unit::Seconds,
        "Duration of successful page fetches in seconds"
    );

    Ok(handle)
}
