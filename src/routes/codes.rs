//! Code listing routes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::code::GameCodeView;
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::codes::{self as code_service, CodeFilters};
use crate::AppState;

/// GET /api/codes: list codes with filters, search, sorting, and pagination.
///
/// Malformed query parameters are answered with a `VALIDATION_ERROR` envelope.
pub async fn list(
    State(state): State<AppState>,
    pagination: Result<Query<Pagination>, QueryRejection>,
    filters: Result<Query<CodeFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<PagedResult<GameCodeView>>>, AppError> {
    let Query(pagination) = pagination?;
    let Query(filters) = filters?;
    let result = code_service::list(&state.db, &filters, &pagination).await?;
    Ok(ApiResponse::success(result))
}
