// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、数据库、页面抓取、LLM 增强和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
    /// LLM 描述增强配置
    pub llm: LlmSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
///
/// `host`、`user`、`password`、`name` 没有默认值，缺失时启动失败
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库主机
    pub host: String,
    /// 数据库端口
    pub port: u16,
    /// 用户名
    pub user: String,
    /// 密码
    pub password: String,
    /// 数据库名
    pub name: String,
    /// TLS 模式 (disable, prefer, require ...)
    pub ssl_mode: Option<String>,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout_secs: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout_secs: Option<u64>,
    /// 单条语句的最长等待时间（秒）
    pub statement_timeout_secs: u64,
}

impl DatabaseSettings {
    /// 构造 Postgres 连接 URL
    ///
    /// 用户名和密码会做百分号编码，设置了 `ssl_mode` 时追加 `sslmode` 参数
    pub fn connection_url(&self) -> String {
        let mut url = format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        );

        if let Some(mode) = self.ssl_mode.as_deref().filter(|m| !m.trim().is_empty()) {
            url.push_str("?sslmode=");
            url.push_str(mode.trim());
        }

        url
    }

    /// 语句超时
    pub fn statement_timeout(&self) -> Duration {
        Duration::from_secs(self.statement_timeout_secs)
    }
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// LLM 配置设置
///
/// 未配置 `api_key`（或为空白）时描述增强被静默关闭
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// 生成服务 API 密钥
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API 基础 URL
    pub api_base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 采样温度
    pub temperature: f32,
    /// 最大输出 token 数
    pub max_output_tokens: u32,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 指标
    pub enabled: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `SITELENS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败（例如缺少数据库配置）
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SITELENS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 带默认值的配置构建器
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB settings, a single shared connection
            .set_default("database.port", 5432)?
            .set_default("database.max_connections", 1)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout_secs", 10)?
            .set_default("database.idle_timeout_secs", 300)?
            .set_default("database.statement_timeout_secs", 10)?
            // Default fetch settings
            .set_default("fetch.timeout_secs", 5)?
            .set_default(
                "fetch.user_agent",
                "Mozilla/5.0 (compatible; sitelens/0.1)",
            )?
            // Default LLM settings
            .set_default("llm.model", "gemini-2.5-flash-preview-05-20")?
            .set_default(
                "llm.api_base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("llm.timeout_secs", 15)?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.max_output_tokens", 100)?
            // Default metrics settings
            .set_default("metrics.enabled", true)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
