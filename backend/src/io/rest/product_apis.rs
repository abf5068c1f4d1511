//! # REST API for Product Management
//!
//! Endpoints for creating, retrieving, updating, and deleting catalog
//! products.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::ProductMapper;
use crate::AppState;
use shared::{CreateProductRequest, MessageResponse, Product, UpdateProductRequest};

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    info!("POST /products - request: {:?}", request);

    let product = state.product_service.create_product(request).await?;

    Ok((StatusCode::CREATED, Json(ProductMapper::to_dto(product))))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    info!("GET /products/{}", product_id);

    let product = state.product_service.get_product(product_id).await?;

    Ok(Json(ProductMapper::to_dto(product)))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    info!("GET /products");

    let products = state.product_service.list_products().await?;

    Ok(Json(ProductMapper::to_product_list_dto(products)))
}

/// Update a product's name and price
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    ApiJson(request): ApiJson<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    info!("PUT /products/{} - request: {:?}", product_id, request);

    let product = state
        .product_service
        .update_product(product_id, request)
        .await?;

    Ok(Json(ProductMapper::to_dto(product)))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /products/{}", product_id);

    state.product_service.delete_product(product_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "successfully deleted product {}",
        product_id
    ))))
}
