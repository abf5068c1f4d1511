use serde::{Deserialize, Serialize};

/// A registered user of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Postal address; empty string when the user never provided one
    pub address: String,
    /// Unique across all users
    pub email: String,
}

/// A single order placed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Timestamp the order was placed (RFC 3339)
    pub order_date: String,
    /// Owning user; set at creation and immutable afterwards
    pub user_id: i64,
}

/// A product that can appear in any number of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    /// Non-negative; defaults to 0.0 when omitted at creation
    pub price: f64,
}

/// Payload for `POST /users`.
///
/// All fields are optional at the serde level so that missing ones surface
/// as field-keyed validation errors instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Optional; stored as the empty string when omitted
    pub address: Option<String>,
}

/// Payload for `PUT /users/:user_id`.
///
/// Both fields are required by validation; the address is deliberately not
/// updatable through this endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Must reference an existing user
    pub user_id: Option<i64>,
    /// ISO-8601 timestamp, e.g. "2025-06-14T10:00:00Z"
    pub order_date: Option<String>,
}

/// Payload for `POST /products`. The wire field `name` is accepted as an
/// alias for `product_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(alias = "name")]
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

/// Payload for `PUT /products/:product_id`. Both fields are required by
/// validation; `name` is accepted as an alias for `product_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(alias = "name")]
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

/// Generic `{"message": ...}` body used for deletion confirmations,
/// order/product association results, and error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_through_json() {
        let user = User {
            id: 7,
            name: "Ada Lovelace".to_string(),
            address: "12 Analytical Way".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }

    #[test]
    fn product_round_trips_through_json() {
        let product = Product {
            id: 1,
            product_name: "Widget".to_string(),
            price: 9.99,
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"product_name\":\"Widget\""));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn create_product_request_accepts_name_alias() {
        let request: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();

        assert_eq!(request.product_name.as_deref(), Some("Widget"));
        assert_eq!(request.price, Some(9.99));
    }

    #[test]
    fn update_product_request_accepts_name_alias() {
        let request: UpdateProductRequest =
            serde_json::from_str(r#"{"name":"Deluxe Widget","price":14.99}"#).unwrap();

        assert_eq!(request.product_name.as_deref(), Some("Deluxe Widget"));
        assert_eq!(request.price, Some(14.99));
    }

    #[test]
    fn missing_request_fields_deserialize_as_none() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert!(request.email.is_none());
        assert!(request.address.is_none());
    }
}
