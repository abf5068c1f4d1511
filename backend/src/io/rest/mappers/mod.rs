//! Mappers between domain models and the shared wire DTOs.

pub mod order_mapper;
pub mod product_mapper;
pub mod user_mapper;

pub use order_mapper::OrderMapper;
pub use product_mapper::ProductMapper;
pub use user_mapper::UserMapper;
