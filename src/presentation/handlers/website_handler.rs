// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Context;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Json, Path,
    },
    http::StatusCode,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            analyze_request::AnalyzeRequestDto, update_website_request::UpdateWebsiteRequestDto,
            website_response::ApiResponse,
        },
        use_cases::analyze_website_use_case::AnalyzeWebsiteUseCase,
    },
    domain::{
        models::website::{Website, WebsiteFields},
        services::website_service::WebsiteService,
    },
    presentation::errors::AppError,
    utils::validators::ValidationError,
};

fn record_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ValidationError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ValidationError::InvalidId(rejection.body_text()))
}

/// GET /api/analyze/
pub async fn list_websites(
    Extension(service): Extension<Arc<WebsiteService>>,
) -> Result<Json<ApiResponse<Vec<Website>>>, AppError> {
    let websites = service
        .list()
        .await
        .context("Failed to retrieve website records.")?;

    Ok(Json(ApiResponse::new(
        "Successfully retrieved all website records.",
        websites,
    )))
}

/// POST /api/analyze/
pub async fn analyze_website(
    Extension(use_case): Extension<Arc<AnalyzeWebsiteUseCase>>,
    payload: Result<Json<AnalyzeRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Website>>), AppError> {
    let Json(dto) = payload.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;

    let website = use_case
        .execute(dto)
        .await
        .context("Failed to analyze website due to an internal server error.")?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Website analysis successful and data stored.",
            website,
        )),
    ))
}

/// PUT /api/analyze/{id}
pub async fn update_website(
    Extension(service): Extension<Arc<WebsiteService>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateWebsiteRequestDto>, JsonRejection>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let id = record_id(id)?;
    let Json(dto) = payload.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;
    let fields = WebsiteFields::try_from(dto)?;

    let website = service
        .update(id, fields)
        .await
        .context("Failed to update website record.")?;

    Ok(Json(ApiResponse::new(
        "Website record updated successfully.",
        website,
    )))
}

/// DELETE /api/analyze/{id}
pub async fn delete_website(
    Extension(service): Extension<Arc<WebsiteService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<Website>>, AppError> {
    let id = record_id(id)?;

    let website = service
        .delete(id)
        .await
        .context("Failed to delete website record.")?;

    Ok(Json(ApiResponse::new(
        "Website record deleted successfully.",
        website,
    )))
}
