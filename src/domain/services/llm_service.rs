// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::settings::LlmSettings;
use crate::domain::models::website::is_not_found;

/// LLM 调用错误
#[derive(Error, Debug)]
pub enum LlmError {
    /// 未配置 API 密钥
    #[error("LLM API key not configured")]
    NotConfigured,
    /// 请求发送或读取失败
    #[error("Failed to call LLM API: {0}")]
    Request(#[source] reqwest::Error),
    /// 请求超时
    #[error("LLM API timed out after {0:?}")]
    Timeout(Duration),
    /// 服务返回非 2xx
    #[error("LLM API returned error: {status} - {body}")]
    Api { status: u16, body: String },
    /// 响应结构不符合预期
    #[error("Invalid response format from LLM API: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    /// 是否配置了可用的 API 密钥
    fn is_configured(&self) -> bool;

    /// 改写网站描述
    async fn rewrite_description(&self, description: &str) -> Result<String, LlmError>;
}

/// LLM服务 - 通过 Gemini `generateContent` 接口改写网站描述
///
/// # 配置
///
/// 由 [`LlmSettings`] 提供：
/// - `api_key` - API密钥，缺失或为空白时服务视为未配置
/// - `model` - 模型名称
/// - `api_base_url` - API基础URL
/// - `timeout_secs` - 单次请求超时
pub struct LLMService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    timeout: Duration,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl LLMService {
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: settings
                .api_key
                .as_ref()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(settings.timeout_secs),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
        }
    }

    pub fn new_with_config(api_key: String, model: String, api_base_url: String) -> Self {
        Self::new(&LlmSettings {
            api_key: Some(api_key),
            model,
            api_base_url,
            timeout_secs: 15,
            temperature: 0.7,
            max_output_tokens: 100,
        })
    }

    /// 覆盖请求超时
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }
}

/// 构造描述改写提示词
pub fn build_prompt(description: &str) -> String {
    format!(
        "Rewrite and enhance the following website description to be more concise, engaging, \
        and suitable for a short summary. Keep it under 150 characters if possible.\n\
        Original description: \"{}\"",
        description
    )
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// 调用生成接口改写描述
    ///
    /// # 错误
    /// * 未配置 API 密钥
    /// * 网络错误、超时或非 2xx 响应
    /// * 响应中没有候选文本，或文本为空
    async fn rewrite_description(&self, description: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::NotConfigured)?;

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": build_prompt(description) }]
                }
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens
            }
        });

        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                LlmError::Timeout(self.timeout)
            } else {
                LlmError::Request(e)
            }
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(map_err)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("no candidate text".to_string()))?;

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty candidate text".to_string()));
        }

        Ok(text)
    }
}

/// 描述未被改写的原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// 描述是占位值
    Sentinel,
    /// 未配置 API 密钥
    Disabled,
    /// 调用失败，附带错误信息
    Failed(String),
}

/// 描述增强的结果
///
/// 增强是尽力而为的，失败不会以错误的形式离开这里
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementOutcome {
    /// 改写后的描述
    Enhanced(String),
    /// 保持原描述
    Unchanged {
        description: String,
        reason: SkipReason,
    },
}

impl EnhancementOutcome {
    /// 最终使用的描述
    pub fn into_description(self) -> String {
        match self {
            EnhancementOutcome::Enhanced(text) => text,
            EnhancementOutcome::Unchanged { description, .. } => description,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EnhancementOutcome::Enhanced(_) => "enhanced",
            EnhancementOutcome::Unchanged { reason, .. } => match reason {
                SkipReason::Sentinel => "skipped_sentinel",
                SkipReason::Disabled => "disabled",
                SkipReason::Failed(_) => "failed",
            },
        }
    }
}

/// 尝试改写描述
///
/// 描述为占位值或服务未配置时直接返回原值；调用失败时记录警告并返回原值
pub async fn enhance_description(
    llm: &dyn LLMServiceTrait,
    description: String,
) -> EnhancementOutcome {
    let outcome = if is_not_found(&description) {
        EnhancementOutcome::Unchanged {
            description,
            reason: SkipReason::Sentinel,
        }
    } else if !llm.is_configured() {
        EnhancementOutcome::Unchanged {
            description,
            reason: SkipReason::Disabled,
        }
    } else {
        match llm.rewrite_description(&description).await {
            Ok(text) => {
                debug!("Description enhanced by AI: {}", text);
                EnhancementOutcome::Enhanced(text)
            }
            Err(e) => {
                warn!("Error enhancing description with AI, keeping original: {}", e);
                EnhancementOutcome::Unchanged {
                    description,
                    reason: SkipReason::Failed(e.to_string()),
                }
            }
        }
    };

    metrics::counter!("description_enhancements_total", "outcome" => outcome.label())
        .increment(1);
    outcome
}
