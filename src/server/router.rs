use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        order::{create_order, get_session_orders, get_session_summary},
        product::{create_product, delete_product, get_products, update_product},
        table::get_tables,
        table_session::{close_table_session, get_table_sessions, open_table_session},
    },
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/tables", get(get_tables))
        .route(
            "/tables-sessions",
            get(get_table_sessions).post(open_table_session),
        )
        .route("/tables-sessions/{id}", put(close_table_session))
        .route("/orders", post(create_order))
        .route(
            "/orders/table-session/{table_session_id}",
            get(get_session_orders),
        )
        .route(
            "/orders/table-session/{table_session_id}/total",
            get(get_session_summary),
        )
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
