use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

/// DbConnection manages the SQLite pool and schema setup
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // SQLite only enforces foreign keys when the pragma is set on each
        // connection, so it has to go through the pool options.
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Create users table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL DEFAULT '',
                email TEXT NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create orders table; every order belongs to exactly one user
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_date TEXT NOT NULL,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create products table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                price REAL NOT NULL DEFAULT 0.0
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create the order/product association table. The composite primary
        // key keeps the association a set: a product appears in an order at
        // most once.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS order_product (
                order_id INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
                product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
                PRIMARY KEY (order_id, product_id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for looking up a user's orders
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_orders_user_id
            ON orders(user_id);
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for product name lookups
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_products_name
            ON products(product_name);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Access the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_allows_basic_inserts() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        sqlx::query("INSERT INTO users (name, address, email) VALUES (?, ?, ?)")
            .bind("Alice")
            .bind("1 Main St")
            .bind("alice@example.com")
            .execute(db.pool())
            .await
            .expect("Failed to insert user");

        let row = sqlx::query("SELECT id, name FROM users WHERE email = ?")
            .bind("alice@example.com")
            .fetch_one(db.pool())
            .await
            .expect("Failed to fetch user");

        assert_eq!(row.get::<i64, _>("id"), 1);
        assert_eq!(row.get::<String, _>("name"), "Alice");
    }

    #[tokio::test]
    async fn test_setup_schema_is_idempotent() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        // Running schema setup again must not fail or drop data
        sqlx::query("INSERT INTO users (name, email) VALUES ('Bob', 'bob@example.com')")
            .execute(db.pool())
            .await
            .expect("Failed to insert user");

        DbConnection::setup_schema(db.pool())
            .await
            .expect("Schema setup should be repeatable");

        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count users");
        assert_eq!(row.get::<i64, _>("count"), 1);
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        let result = sqlx::query("INSERT INTO orders (order_date, user_id) VALUES (?, ?)")
            .bind("2025-06-14T10:00:00+00:00")
            .bind(999_i64)
            .execute(db.pool())
            .await;

        assert!(result.is_err(), "Order insert without a user should fail");
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_enforced() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        sqlx::query("INSERT INTO users (name, email) VALUES ('Alice', 'same@example.com')")
            .execute(db.pool())
            .await
            .expect("Failed to insert first user");

        let result = sqlx::query("INSERT INTO users (name, email) VALUES ('Bob', 'same@example.com')")
            .execute(db.pool())
            .await;

        assert!(result.is_err(), "Duplicate email should be rejected");
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_orders_and_links() {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        sqlx::query("INSERT INTO users (name, email) VALUES ('Alice', 'alice@example.com')")
            .execute(db.pool())
            .await
            .expect("Failed to insert user");
        sqlx::query("INSERT INTO orders (order_date, user_id) VALUES ('2025-06-14T10:00:00+00:00', 1)")
            .execute(db.pool())
            .await
            .expect("Failed to insert order");
        sqlx::query("INSERT INTO products (product_name, price) VALUES ('Widget', 9.99)")
            .execute(db.pool())
            .await
            .expect("Failed to insert product");
        sqlx::query("INSERT INTO order_product (order_id, product_id) VALUES (1, 1)")
            .execute(db.pool())
            .await
            .expect("Failed to link product");

        sqlx::query("DELETE FROM users WHERE id = 1")
            .execute(db.pool())
            .await
            .expect("Failed to delete user");

        let orders = sqlx::query("SELECT COUNT(*) as count FROM orders")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count orders");
        let links = sqlx::query("SELECT COUNT(*) as count FROM order_product")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count links");
        let products = sqlx::query("SELECT COUNT(*) as count FROM products")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count products");

        assert_eq!(orders.get::<i64, _>("count"), 0, "Orders should cascade");
        assert_eq!(links.get::<i64, _>("count"), 0, "Links should cascade");
        assert_eq!(products.get::<i64, _>("count"), 1, "Products must survive");
    }
}
