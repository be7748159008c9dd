// HTTP request handlers
use crate::infrastructure::http_response::{HttpResponse, success, success_empty};
use crate::presentation::api_error::{ApiError, ApiResult};
use crate::presentation::app_state::AppState;
use crate::presentation::dto::{DateQuery, ScaleParam, ScaleView, ScalesView};
use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn ping() -> HttpResponse<()> {
    success_empty("Pong")
}

/// Record a new day's readings
pub async fn create_scale(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScaleParam>, JsonRejection>,
) -> ApiResult<HttpResponse<()>> {
    const FAILED: &str = "Failed create scale";
    let Json(param) = payload.map_err(ApiError::rejected(FAILED))?;

    state
        .scale_service
        .create(&param.date, param.min, param.max)
        .await
        .map_err(ApiError::scale(FAILED))?;

    Ok(success_empty("Success create scale"))
}

/// List every record with the averages
pub async fn list_scales(State(state): State<Arc<AppState>>) -> HttpResponse<ScalesView> {
    let summary = state.scale_service.get_all().await;
    success(
        "Success get scales",
        ScalesView::from_summary(&summary, state.reference_offset),
    )
}

/// Records for a single date; an unknown date yields an empty list
pub async fn get_scale(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<HttpResponse<Vec<ScaleView>>> {
    const FAILED: &str = "Failed get scale";
    let Query(query) = query.map_err(ApiError::rejected(FAILED))?;

    let records = state
        .scale_service
        .get_by_date(&query.date)
        .await
        .map_err(ApiError::scale(FAILED))?;

    Ok(success(
        "Success get scale",
        ScaleView::from_records(&records, state.reference_offset),
    ))
}

pub async fn update_scale(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScaleParam>, JsonRejection>,
) -> ApiResult<HttpResponse<()>> {
    const FAILED: &str = "Failed update scale";
    let Json(param) = payload.map_err(ApiError::rejected(FAILED))?;

    state
        .scale_service
        .update(&param.date, param.min, param.max)
        .await
        .map_err(ApiError::scale(FAILED))?;

    Ok(success_empty("Success update scale"))
}

pub async fn delete_scale(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<HttpResponse<()>> {
    const FAILED: &str = "Failed delete scale";
    let Query(query) = query.map_err(ApiError::rejected(FAILED))?;

    state
        .scale_service
        .delete(&query.date)
        .await
        .map_err(ApiError::scale(FAILED))?;

    Ok(success_empty("Success delete scale"))
}
