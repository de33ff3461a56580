//! Product handlers: list, read, create, delete.

use crate::dto::{CreateProductRequest, ProductDto};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/product",
    tag = "product",
    responses((status = 200, description = "All products", body = [ProductDto]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, AppError> {
    let products = state.products.list_all().await?;
    Ok(Json(products.iter().map(ProductDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "No such product", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductDto>, AppError> {
    let Path(id) = path?;
    let product = state.products.find_by_id(id).await?;
    Ok(Json(ProductDto::from(&product)))
}

#[utoipa::path(
    post,
    path = "/api/product",
    tag = "product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "The created product", body = ProductDto),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Json<ProductDto>, AppError> {
    let Json(body) = body?;
    let product = state.products.create(&body.name, body.price).await?;
    Ok(Json(ProductDto::from(&product)))
}

#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 409, description = "Product is referenced by orders", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
