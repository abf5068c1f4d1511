//! Repository implementations backed by SQLite.
//!
//! Each repository owns the SQL for one entity and hands back domain models.
//! Business rules (validation, uniqueness policy, existence checks) live in
//! the domain services; the repositories only touch rows.

pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
