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
        order::{CreateOrderDto, OrderLineDto, OrderSummaryDto},
    },
    server::{
        error::AppError, model::order::CreateOrderParams, service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order in an open table session.
///
/// The product's current price is stored on the order.
///
/// # Returns
/// - `201 Created` - Order placed, empty body
/// - `400 Bad Request` - Non-positive quantity, session or product not found, session
///   closed, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order"),
        (status = 400, description = "Invalid order or session closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateOrderParams::try_from_dto(payload)?;

    OrderService::new(&state.db).create(params).await?;

    Ok(StatusCode::CREATED)
}

/// List the orders of a table session.
///
/// # Returns
/// - `200 OK` - Order lines, newest first, each with its product name and line total
/// - `400 Bad Request` - Non-numeric session ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/orders/table-session/{table_session_id}",
    tag = ORDER_TAG,
    params(
        ("table_session_id" = i32, Path, description = "Table session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderLineDto>),
        (status = 400, description = "Non-numeric session ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_orders(
    State(state): State<AppState>,
    table_session_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(table_session_id) = table_session_id?;

    let lines = OrderService::new(&state.db)
        .list_by_session(table_session_id)
        .await?;

    let lines: Vec<OrderLineDto> = lines.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lines)))
}

/// Get the amount owed and items ordered in a table session.
///
/// # Returns
/// - `200 OK` - `{ total, quantity }`, both zero when nothing was ordered
/// - `400 Bad Request` - Non-numeric session ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/orders/table-session/{table_session_id}/total",
    tag = ORDER_TAG,
    params(
        ("table_session_id" = i32, Path, description = "Table session ID")
    ),
    responses(
        (status = 200, description = "Successfully computed session total", body = OrderSummaryDto),
        (status = 400, description = "Non-numeric session ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_summary(
    State(state): State<AppState>,
    table_session_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(table_session_id) = table_session_id?;

    let summary = OrderService::new(&state.db)
        .summary(table_session_id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
