// ABOUTME: User management database operations
// ABOUTME: Handles user registration storage and lookups by id or email

use super::Database;
use crate::constants::error_messages;
use crate::errors::AppError;
use crate::models::User;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Error as SqlxError, Row};
use uuid::Uuid;

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Store a new user
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] with `ResourceAlreadyExists` if the email is
    /// taken, or a database error
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        let email = User::normalize_email(&user.email);

        let result = sqlx::query(
            r"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user.id),
            Err(SqlxError::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::already_exists(error_messages::EMAIL_ALREADY_REGISTERED).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Get a user by email (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(User::normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// List all users, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            "SELECT id, name, email, password_hash, created_at FROM users ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Convert a database row to a User struct
    fn row_to_user(row: &SqliteRow) -> Result<User> {
        let id: String = row.get("id");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(User {
            id: Uuid::parse_str(&id)?,
            name: row.get("name"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at,
        })
    }
}
