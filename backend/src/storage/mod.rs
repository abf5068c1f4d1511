//! # Storage Module
//!
//! Handles all data persistence operations for the store backend.
//!
//! This module abstracts away the specific storage implementation details and
//! provides a consistent interface for persisting and retrieving data. The
//! implementation can be swapped out (SQLite, PostgreSQL, etc.) without
//! affecting the domain logic or REST layers.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Saving users, orders, and products to disk
//! - **Data Retrieval**: Loading stored records back into memory
//! - **Connection Management**: Handling database connections and lifecycle
//! - **Referential Integrity**: Enforcing the user/order/product relationships
//!   at the schema level
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database accessed through SQLx
//! - **Test Mode**: Uniquely-named in-memory databases for isolated tests

pub mod sqlite;

pub use sqlite::DbConnection;
