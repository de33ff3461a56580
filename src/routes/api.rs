//! Product and order resource routes, plus the OpenAPI document describing them.

use crate::dto::{CreateOrderRequest, CreateProductRequest, OrderDto, ProductDto};
use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{order, product};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::list,
        product::read,
        product::create,
        product::delete,
        order::list,
        order::read,
        order::create,
    ),
    components(schemas(
        ProductDto,
        OrderDto,
        CreateProductRequest,
        CreateOrderRequest,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "product", description = "Product catalogue"),
        (name = "orders", description = "Orders placed against products")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes under `/api`: `/product[/:id]` and `/orders[/:id]`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/product", get(product::list).post(product::create))
        .route("/product/:id", get(product::read).delete(product::delete))
        .route("/orders", get(order::list).post(order::create))
        .route("/orders/:id", get(order::read))
        .with_state(state)
}

pub fn openapi_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
