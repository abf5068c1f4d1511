use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::order::Order;
use crate::domain::models::product::Product;
use crate::storage::sqlite::db::DbConnection;

/// Repository for order operations, including the order/product association
#[derive(Clone)]
pub struct OrderRepository {
    db: DbConnection,
}

impl OrderRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new order and return it with its assigned id
    pub async fn create_order(&self, user_id: i64, order_date: DateTime<Utc>) -> Result<Order> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (order_date, user_id)
            VALUES (?, ?)
            "#,
        )
        .bind(order_date.to_rfc3339())
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(Order {
            id: result.last_insert_rowid(),
            order_date,
            user_id,
        })
    }

    /// Get an order by ID
    pub async fn get_order(&self, order_id: i64) -> Result<Option<Order>> {
        let row = sqlx::query(
            r#"
            SELECT id, order_date, user_id
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(order_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::order_from_row(&r)?)),
            None => Ok(None),
        }
    }

    /// List all orders placed by one user, oldest first
    pub async fn list_orders_for_user(&self, user_id: i64) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_date, user_id
            FROM orders
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::order_from_row).collect()
    }

    /// Check whether a product is already part of an order
    pub async fn contains_product(&self, order_id: i64, product_id: i64) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT 1 FROM order_product
            WHERE order_id = ? AND product_id = ?
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }

    /// Link a product to an order
    pub async fn add_product(&self, order_id: i64, product_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO order_product (order_id, product_id)
            VALUES (?, ?)
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Unlink a product from an order; reports whether a link existed
    pub async fn remove_product(&self, order_id: i64, product_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM order_product
            WHERE order_id = ? AND product_id = ?
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List the products linked to an order
    pub async fn list_products(&self, order_id: i64) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.product_name, p.price
            FROM products p
            INNER JOIN order_product op ON op.product_id = p.id
            WHERE op.order_id = ?
            ORDER BY p.id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(self.db.pool())
        .await?;

        let products = rows
            .iter()
            .map(|row| Product {
                id: row.get("id"),
                product_name: row.get("product_name"),
                price: row.get("price"),
            })
            .collect();

        Ok(products)
    }

    fn order_from_row(row: &SqliteRow) -> Result<Order> {
        let raw_date: String = row.get("order_date");
        let order_date = DateTime::parse_from_rfc3339(&raw_date)
            .with_context(|| format!("Invalid order_date in storage: {}", raw_date))?
            .with_timezone(&Utc);

        Ok(Order {
            id: row.get("id"),
            order_date,
            user_id: row.get("user_id"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::repositories::product_repository::ProductRepository;
    use crate::storage::sqlite::repositories::user_repository::UserRepository;
    use chrono::TimeZone;

    async fn setup_test() -> (OrderRepository, UserRepository, ProductRepository) {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        (
            OrderRepository::new(db.clone()),
            UserRepository::new(db.clone()),
            ProductRepository::new(db),
        )
    }

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 14, 10, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_order_round_trips_date() {
        let (orders, users, _) = setup_test().await;
        let user = users
            .create_user("Alice", "alice@example.com", "")
            .await
            .expect("Failed to create user");

        let created = orders
            .create_order(user.id, sample_date())
            .await
            .expect("Failed to create order");

        let fetched = orders
            .get_order(created.id)
            .await
            .expect("Failed to get order")
            .expect("Order should exist");

        assert_eq!(fetched, created);
        assert_eq!(fetched.order_date, sample_date());
        assert_eq!(fetched.user_id, user.id);
    }

    #[tokio::test]
    async fn test_list_orders_for_user_filters_by_owner() {
        let (orders, users, _) = setup_test().await;
        let alice = users
            .create_user("Alice", "alice@example.com", "")
            .await
            .expect("Failed to create user");
        let bob = users
            .create_user("Bob", "bob@example.com", "")
            .await
            .expect("Failed to create user");

        orders
            .create_order(alice.id, sample_date())
            .await
            .expect("Failed to create order");
        orders
            .create_order(alice.id, sample_date())
            .await
            .expect("Failed to create order");
        orders
            .create_order(bob.id, sample_date())
            .await
            .expect("Failed to create order");

        let alices = orders
            .list_orders_for_user(alice.id)
            .await
            .expect("Failed to list orders");
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|order| order.user_id == alice.id));

        let bobs = orders
            .list_orders_for_user(bob.id)
            .await
            .expect("Failed to list orders");
        assert_eq!(bobs.len(), 1);
    }

    #[tokio::test]
    async fn test_add_contains_and_remove_product() {
        let (orders, users, products) = setup_test().await;
        let user = users
            .create_user("Alice", "alice@example.com", "")
            .await
            .expect("Failed to create user");
        let order = orders
            .create_order(user.id, sample_date())
            .await
            .expect("Failed to create order");
        let product = products
            .create_product("Widget", 9.99)
            .await
            .expect("Failed to create product");

        assert!(!orders
            .contains_product(order.id, product.id)
            .await
            .expect("Query should succeed"));

        orders
            .add_product(order.id, product.id)
            .await
            .expect("Failed to add product");

        assert!(orders
            .contains_product(order.id, product.id)
            .await
            .expect("Query should succeed"));

        assert!(orders
            .remove_product(order.id, product.id)
            .await
            .expect("Remove should succeed"));
        assert!(!orders
            .remove_product(order.id, product.id)
            .await
            .expect("Remove should succeed"));
    }

    #[tokio::test]
    async fn test_list_products_returns_linked_products_only() {
        let (orders, users, products) = setup_test().await;
        let user = users
            .create_user("Alice", "alice@example.com", "")
            .await
            .expect("Failed to create user");
        let order = orders
            .create_order(user.id, sample_date())
            .await
            .expect("Failed to create order");
        let widget = products
            .create_product("Widget", 9.99)
            .await
            .expect("Failed to create product");
        products
            .create_product("Gadget", 19.99)
            .await
            .expect("Failed to create product");

        orders
            .add_product(order.id, widget.id)
            .await
            .expect("Failed to add product");

        let linked = orders
            .list_products(order.id)
            .await
            .expect("Failed to list products");
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].product_name, "Widget");
    }
}
