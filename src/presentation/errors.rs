// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::use_cases::analyze_website_use_case::AnalysisError;
use crate::domain::repositories::website_repository::RepositoryError;
use crate::utils::validators::ValidationError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 状态码由错误链中的具体类型决定；500 时返回处理器附加的 context 信息，
/// 不暴露内部细节。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 对外状态码和错误信息
    pub fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(err) = self.0.downcast_ref::<ValidationError>() {
            return (StatusCode::BAD_REQUEST, err.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<AnalysisError>() {
            match err {
                AnalysisError::Validation(v) => return (StatusCode::BAD_REQUEST, v.to_string()),
                AnalysisError::Timeout(_) => return (StatusCode::GATEWAY_TIMEOUT, err.to_string()),
                _ => {}
            }
        }

        if let Some(RepositoryError::NotFound) = self.0.downcast_ref::<RepositoryError>() {
            return (StatusCode::NOT_FOUND, RepositoryError::NotFound.to_string());
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        if status.is_server_error() {
            error!("{}: {:#}", status, self.0);
        } else {
            warn!("{}: {:#}", status, self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
