use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, table::TableDto},
    server::{error::AppError, service::table::TableService, state::AppState},
};

/// Tag for grouping table endpoints in OpenAPI documentation
pub static TABLE_TAG: &str = "table";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TableFilterParams {
    /// Substring of the table number, matched as text
    pub table_number: Option<String>,
}

/// List physical tables.
///
/// # Returns
/// - `200 OK` - Tables ordered by number
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tables",
    tag = TABLE_TAG,
    params(TableFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved tables", body = Vec<TableDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    params: Result<Query<TableFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let tables = TableService::new(&state.db)
        .list(params.table_number.as_deref())
        .await?;

    let tables: Vec<TableDto> = tables.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tables)))
}
