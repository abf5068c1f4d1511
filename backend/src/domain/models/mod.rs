//! Domain entities used by the services.
//!
//! These are the in-memory shapes the business logic works with. The wire
//! representations live in the `shared` crate and are produced by the REST
//! mappers.

pub mod order;
pub mod product;
pub mod user;
