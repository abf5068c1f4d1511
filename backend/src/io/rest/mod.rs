//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the store backend.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: RESTful HTTP interfaces for users, orders, and products
//! - **Error Handling**: Converting domain errors to proper HTTP responses
//! - **Serialization**: JSON request/response handling
//! - **Domain Separation**: Pure translation layer without business logic

// Module declarations
pub mod error;
pub mod extract;
pub mod mappers;
pub mod order_apis;
pub mod product_apis;
pub mod user_apis;
