use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{info, warn};

use crate::domain::error::{DomainError, FieldErrors};
use crate::domain::models::order::Order;
use crate::domain::models::product::Product;
use crate::storage::sqlite::repositories::{OrderRepository, ProductRepository, UserRepository};
use crate::storage::sqlite::DbConnection;
use shared::CreateOrderRequest;

/// Service for placing orders and managing their product contents
#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    users: UserRepository,
    products: ProductRepository,
}

impl OrderService {
    /// Create a new OrderService
    pub fn new(db: DbConnection) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            users: UserRepository::new(db.clone()),
            products: ProductRepository::new(db),
        }
    }

    /// Place a new order for a user
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        info!("Creating order: user_id={:?}", request.user_id);

        // Validate the request
        let (user_id, order_date) = self.validate_create_request(&request)?;

        // The owner must exist before the order can reference it
        if self.users.get_user(user_id).await?.is_none() {
            warn!("User not found: {}", user_id);
            return Err(DomainError::not_found("User", user_id));
        }

        let order = self.orders.create_order(user_id, order_date).await?;

        info!("Created order: {} for user: {}", order.id, order.user_id);

        Ok(order)
    }

    /// List all orders placed by one user
    pub async fn list_orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        info!("Listing orders for user: {}", user_id);

        if self.users.get_user(user_id).await?.is_none() {
            warn!("User not found: {}", user_id);
            return Err(DomainError::not_found("User", user_id));
        }

        let orders = self.orders.list_orders_for_user(user_id).await?;

        info!("Found {} orders for user: {}", orders.len(), user_id);

        Ok(orders)
    }

    /// List the products contained in an order
    pub async fn list_order_products(&self, order_id: i64) -> Result<Vec<Product>, DomainError> {
        info!("Listing products for order: {}", order_id);

        if self.orders.get_order(order_id).await?.is_none() {
            warn!("Order not found: {}", order_id);
            return Err(DomainError::not_found("Order", order_id));
        }

        let products = self.orders.list_products(order_id).await?;

        info!("Found {} products in order: {}", products.len(), order_id);

        Ok(products)
    }

    /// Add a product to an order.
    ///
    /// Returns `true` when the product was newly added and `false` when it
    /// was already in the order; re-adding never duplicates the link.
    pub async fn add_product_to_order(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<bool, DomainError> {
        info!("Adding product {} to order {}", product_id, order_id);

        self.require_order(order_id).await?;
        self.require_product(product_id).await?;

        if self.orders.contains_product(order_id, product_id).await? {
            info!("Product {} already in order {}", product_id, order_id);
            return Ok(false);
        }

        self.orders.add_product(order_id, product_id).await?;

        info!("Added product {} to order {}", product_id, order_id);

        Ok(true)
    }

    /// Remove a product from an order
    pub async fn remove_product_from_order(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<(), DomainError> {
        info!("Removing product {} from order {}", product_id, order_id);

        self.require_order(order_id).await?;
        self.require_product(product_id).await?;

        let removed = self.orders.remove_product(order_id, product_id).await?;
        if !removed {
            warn!("Product {} not in order {}", product_id, order_id);
            return Err(DomainError::NotAssociated(
                "Product not in this order".to_string(),
            ));
        }

        info!("Removed product {} from order {}", product_id, order_id);

        Ok(())
    }

    async fn require_order(&self, order_id: i64) -> Result<(), DomainError> {
        if self.orders.get_order(order_id).await?.is_none() {
            warn!("Order not found: {}", order_id);
            return Err(DomainError::not_found("Order", order_id));
        }
        Ok(())
    }

    async fn require_product(&self, product_id: i64) -> Result<(), DomainError> {
        if self.products.get_product(product_id).await?.is_none() {
            warn!("Product not found: {}", product_id);
            return Err(DomainError::not_found("Product", product_id));
        }
        Ok(())
    }

    /// Validate create order request
    fn validate_create_request(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<(i64, DateTime<Utc>), DomainError> {
        let mut errors = FieldErrors::new();

        let user_id = match request.user_id {
            Some(user_id) => user_id,
            None => {
                errors.add("user_id", "Missing data for required field.");
                0
            }
        };

        let order_date = match request.order_date.as_deref() {
            Some(value) => match Self::parse_order_date(value) {
                Some(parsed) => parsed,
                None => {
                    errors.add("order_date", "Not a valid datetime.");
                    Utc::now()
                }
            },
            None => {
                errors.add("order_date", "Missing data for required field.");
                Utc::now()
            }
        };

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok((user_id, order_date))
    }

    /// Parse an order date, taking bare timestamps as UTC
    fn parse_order_date(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Some(parsed.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
            .map(|naive| naive.and_utc())
            .ok()
    }
}
