//! # SQLite Storage Module
//!
//! SQLite-based storage for the store backend.
//!
//! ## Components
//!
//! - **db.rs** - Database connection management and schema setup
//! - **repositories/** - Repository implementations for each entity

pub mod db;
pub mod repositories;

// Re-export the main types for external use
pub use db::DbConnection;
pub use repositories::{OrderRepository, ProductRepository, UserRepository};
