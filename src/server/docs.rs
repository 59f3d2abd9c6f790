use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderLineDto, OrderSummaryDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        table::TableDto,
        table_session::{OpenTableSessionDto, TableSessionDto},
    },
    server::controller::{
        order::{self, ORDER_TAG},
        product::{self, PRODUCT_TAG},
        table::{self, TABLE_TAG},
        table_session::{self, TABLE_SESSION_TAG},
    },
};

/// OpenAPI document served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant Orders API"),
    paths(
        product::get_products,
        product::create_product,
        product::update_product,
        product::delete_product,
        table::get_tables,
        table_session::open_table_session,
        table_session::get_table_sessions,
        table_session::close_table_session,
        order::create_order,
        order::get_session_orders,
        order::get_session_summary,
    ),
    components(schemas(
        ErrorDto,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
        TableDto,
        TableSessionDto,
        OpenTableSessionDto,
        CreateOrderDto,
        OrderLineDto,
        OrderSummaryDto,
    )),
    tags(
        (name = PRODUCT_TAG, description = "Product catalog"),
        (name = TABLE_TAG, description = "Physical tables"),
        (name = TABLE_SESSION_TAG, description = "Opening and closing tables"),
        (name = ORDER_TAG, description = "Orders placed during a table session"),
    )
)]
pub struct ApiDoc;
