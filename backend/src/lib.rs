//! # Store Backend
//!
//! Contains all logic for the e-commerce store backend.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic and rules for users, orders, and products
//! - **Storage**: Data persistence mechanisms (SQLite)
//! - **IO**: REST interface layer that exposes functionality to clients
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     |
//! Domain Layer (Business logic, services)
//!     |
//! Storage Layer (Database, persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with proper CORS configuration
//! - Coordinate between domain logic and data persistence

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{OrderService, ProductService, UserService};
use crate::io::rest::{order_apis, product_apis, user_apis};
use crate::storage::DbConnection;

/// Route table logged at startup
pub const ROUTES: [&str; 15] = [
    "POST   /users",
    "GET    /users",
    "GET    /users/:user_id",
    "PUT    /users/:user_id",
    "DELETE /users/:user_id",
    "POST   /orders",
    "GET    /orders/user/:user_id",
    "GET    /orders/:order_id/products",
    "POST   /orders/:order_id/add_products/:product_id",
    "DELETE /orders/:order_id/remove_product/:product_id",
    "GET    /products",
    "POST   /products",
    "GET    /products/:product_id",
    "PUT    /products/:product_id",
    "DELETE /products/:product_id",
];

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub order_service: OrderService,
    pub product_service: ProductService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(database_url: &str) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(database_url).await?;

    info!("Setting up domain services");
    let user_service = UserService::new(db.clone());
    let order_service = OrderService::new(db.clone());
    let product_service = ProductService::new(db);

    info!("Setting up application state");
    let app_state = AppState {
        user_service,
        order_service,
        product_service,
    };

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow browser clients to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    Router::new()
        .route(
            "/users",
            get(user_apis::list_users).post(user_apis::create_user),
        )
        .route(
            "/users/:user_id",
            get(user_apis::get_user)
                .put(user_apis::update_user)
                .delete(user_apis::delete_user),
        )
        .route("/orders", post(order_apis::create_order))
        .route("/orders/user/:user_id", get(order_apis::list_user_orders))
        .route(
            "/orders/:order_id/products",
            get(order_apis::list_order_products),
        )
        .route(
            "/orders/:order_id/add_products/:product_id",
            post(order_apis::add_product_to_order),
        )
        .route(
            "/orders/:order_id/remove_product/:product_id",
            delete(order_apis::remove_product_from_order),
        )
        .route(
            "/products",
            get(product_apis::list_products).post(product_apis::create_product),
        )
        .route(
            "/products/:product_id",
            get(product_apis::get_product)
                .put(product_apis::update_product)
                .delete(product_apis::delete_product),
        )
        .layer(cors)
        .with_state(app_state)
}
