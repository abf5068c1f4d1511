use anyhow::Result;
use sqlx::Row;

use crate::domain::models::product::Product;
use crate::storage::sqlite::db::DbConnection;

/// Repository for product catalog operations
#[derive(Clone)]
pub struct ProductRepository {
    db: DbConnection,
}

impl ProductRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new product and return it with its assigned id
    pub async fn create_product(&self, product_name: &str, price: f64) -> Result<Product> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (product_name, price)
            VALUES (?, ?)
            "#,
        )
        .bind(product_name)
        .bind(price)
        .execute(self.db.pool())
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            product_name: product_name.to_string(),
            price,
        })
    }

    /// Get a product by ID
    pub async fn get_product(&self, product_id: i64) -> Result<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, product_name, price
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(product_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Product {
                id: r.get("id"),
                product_name: r.get("product_name"),
                price: r.get("price"),
            })),
            None => Ok(None),
        }
    }

    /// List all products ordered by id
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, product_name, price
            FROM products
            ORDER BY id ASC
            "#,
        )
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

    /// Update a product's name and price
    pub async fn update_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET product_name = ?, price = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.product_name)
        .bind(product.price)
        .bind(product.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a product; any order links go with it
    pub async fn delete_product(&self, product_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE id = ?
            "#,
        )
        .bind(product_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
