use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        table_session::{OpenTableSessionDto, TableSessionDto},
    },
    server::{error::AppError, service::table_session::TableSessionService, state::AppState},
};

/// Tag for grouping table session endpoints in OpenAPI documentation
pub static TABLE_SESSION_TAG: &str = "table-session";

/// Open a session on a table.
///
/// # Returns
/// - `201 Created` - Session opened, empty body
/// - `400 Bad Request` - Table not found, table already open, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/tables-sessions",
    tag = TABLE_SESSION_TAG,
    request_body = OpenTableSessionDto,
    responses(
        (status = 201, description = "Successfully opened table session"),
        (status = 400, description = "Table not found or already open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_table_session(
    State(state): State<AppState>,
    payload: Result<Json<OpenTableSessionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    TableSessionService::new(&state.db)
        .open(payload.table_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// List all table sessions.
///
/// Open sessions come first, closed sessions follow in the order they were closed.
///
/// # Returns
/// - `200 OK` - List of sessions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tables-sessions",
    tag = TABLE_SESSION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved table sessions", body = Vec<TableSessionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_sessions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = TableSessionService::new(&state.db).list().await?;

    let sessions: Vec<TableSessionDto> = sessions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(sessions)))
}

/// Close a table session.
///
/// # Returns
/// - `200 OK` - Session closed, empty body
/// - `400 Bad Request` - Session not found, already closed, or non-numeric ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/tables-sessions/{id}",
    tag = TABLE_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Table session ID")
    ),
    responses(
        (status = 200, description = "Successfully closed table session"),
        (status = 400, description = "Session not found or already closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_table_session(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    TableSessionService::new(&state.db).close(id).await?;

    Ok(StatusCode::OK)
}
