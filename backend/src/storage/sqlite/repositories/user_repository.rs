use anyhow::Result;
use sqlx::Row;

use crate::domain::models::user::User;
use crate::storage::sqlite::db::DbConnection;

/// Repository for user operations
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new user and return it with its assigned id
    pub async fn create_user(&self, name: &str, email: &str, address: &str) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, address, email)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(email)
        .execute(self.db.pool())
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            address: address.to_string(),
            email: email.to_string(),
        })
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, address, email
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.get("id"),
                name: r.get("name"),
                address: r.get("address"),
                email: r.get("email"),
            })),
            None => Ok(None),
        }
    }

    /// Look up a user by email address
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, address, email
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.get("id"),
                name: r.get("name"),
                address: r.get("address"),
                email: r.get("email"),
            })),
            None => Ok(None),
        }
    }

    /// List all users ordered by id
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, address, email
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let users = rows
            .iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                address: row.get("address"),
                email: row.get("email"),
            })
            .collect();

        Ok(users)
    }

    /// Update a user's name and email
    pub async fn update_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a user; orders and their product links go with it
    pub async fn delete_user(&self, user_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE id = ?
            "#,
        )
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
