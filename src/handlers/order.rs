//! Order handlers: list, read, create.

use crate::dto::{CreateOrderRequest, OrderDto};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses((status = 200, description = "All orders with their products", body = [OrderDto]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderDto>>, AppError> {
    let orders = state.orders.list_all().await?;
    Ok(Json(orders.iter().map(OrderDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 404, description = "No such order", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderDto>, AppError> {
    let Path(id) = path?;
    let order = state.orders.find_by_id(id).await?;
    Ok(Json(OrderDto::from(&order)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "The created order", body = OrderDto),
        (status = 404, description = "Referenced product does not exist", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderDto>, AppError> {
    let Json(body) = body?;
    let order = state
        .orders
        .create(&body.customer_name, body.quantity, body.product_id)
        .await?;
    Ok(Json(OrderDto::from(&order)))
}
