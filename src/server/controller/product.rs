use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        error::AppError,
        model::product::{CreateProductParams, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilterParams {
    /// Case-sensitive substring of the product name
    pub name: Option<String>,
}

/// List catalog products.
///
/// Returns every product ordered by name. When `name` is given and not empty, only
/// products whose name contains it are returned.
///
/// # Returns
/// - `200 OK` - List of products
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(ProductFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    params: Result<Query<ProductFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let service = ProductService::new(&state.db);

    let products = service.list(params.name.as_deref()).await?;

    let products: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(products)))
}

/// Create a catalog product.
///
/// # Arguments
/// - `payload` - Product name (at least 3 characters after trimming) and price (> 0)
///
/// # Returns
/// - `201 Created` - Product created, empty body
/// - `400 Bad Request` - Invalid name or price, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product"),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateProductParams::try_from_dto(payload)?;

    ProductService::new(&state.db).create(params).await?;

    Ok(StatusCode::CREATED)
}

/// Update a catalog product.
///
/// Replaces name and price of an existing product. Orders already placed keep the
/// price they were placed with.
///
/// # Returns
/// - `200 OK` - Product updated, empty body
/// - `400 Bad Request` - Invalid data, non-numeric ID, or product not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Successfully updated product"),
        (status = 400, description = "Invalid product data or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateProductParams::try_from_dto(id, payload)?;

    ProductService::new(&state.db).update(params).await?;

    Ok(StatusCode::OK)
}

/// Delete a catalog product.
///
/// # Returns
/// - `200 OK` - Product deleted, empty body
/// - `400 Bad Request` - Non-numeric ID or product not found
/// - `500 Internal Server Error` - Database error, including products referenced by orders
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted product"),
        (status = 400, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    ProductService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
