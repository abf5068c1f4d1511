use chrono::{DateTime, Utc};

/// An order placed by a user.
///
/// Timestamps are held in UTC; the REST layer renders them as RFC 3339
/// strings. The products in an order live in the association table and are
/// fetched separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub user_id: i64,
}
