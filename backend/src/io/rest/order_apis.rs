//! # REST API for Order Management
//!
//! Endpoints for placing orders, listing a user's orders, and managing the
//! products inside an order.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::{OrderMapper, ProductMapper};
use crate::AppState;
use shared::{CreateOrderRequest, MessageResponse, Order, Product};

/// Place a new order
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    info!("POST /orders - request: {:?}", request);

    let order = state.order_service.create_order(request).await?;

    Ok((StatusCode::CREATED, Json(OrderMapper::to_dto(order))))
}

/// List all orders placed by one user
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Order>>, ApiError> {
    info!("GET /orders/user/{}", user_id);

    let orders = state.order_service.list_orders_for_user(user_id).await?;

    Ok(Json(OrderMapper::to_order_list_dto(orders)))
}

/// List the products contained in an order
pub async fn list_order_products(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<Product>>, ApiError> {
    info!("GET /orders/{}/products", order_id);

    let products = state.order_service.list_order_products(order_id).await?;

    Ok(Json(ProductMapper::to_product_list_dto(products)))
}

/// Add a product to an order; re-adding the same product is a no-op
pub async fn add_product_to_order(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("POST /orders/{}/add_products/{}", order_id, product_id);

    let added = state
        .order_service
        .add_product_to_order(order_id, product_id)
        .await?;

    let message = if added {
        "Product added!"
    } else {
        "Product already in order"
    };

    Ok(Json(MessageResponse::new(message)))
}

/// Remove a product from an order
pub async fn remove_product_from_order(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /orders/{}/remove_product/{}", order_id, product_id);

    state
        .order_service
        .remove_product_from_order(order_id, product_id)
        .await?;

    Ok(Json(MessageResponse::new("Product removed from order")))
}
