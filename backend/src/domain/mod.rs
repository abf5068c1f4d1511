//! # Domain Module
//!
//! Contains all business logic for the store backend.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how users, orders, and products are modeled and managed. It
//! operates independently of any HTTP framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **user_service**: User account CRUD and email uniqueness policy
//! - **order_service**: Order placement and the order/product association
//! - **product_service**: Product catalog CRUD
//! - **models**: Domain entities shared by the services
//! - **error**: The error type services hand to the REST layer
//!
//! ## Business Rules
//!
//! - Every order belongs to exactly one existing user
//! - A product appears in an order at most once; re-adding is a no-op
//! - User email addresses are unique across the system
//! - Deleting a user removes that user's orders and their product links
//! - Input validation happens here, before anything touches storage

pub mod error;
pub mod models;
pub mod order_service;
pub mod product_service;
pub mod user_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
pub use user_service::UserService;
