// ABOUTME: SQLite storage for users and health risk assessments
// ABOUTME: Owns the connection pool and runs schema migrations at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Database Management
//!
//! `Database` wraps a `SQLite` pool. Each domain adds its own `impl Database`
//! block (`users`, `assessments`) with its migration and queries.

mod assessments;
mod users;

use crate::constants::timeouts::DATABASE_TIMEOUT_SECS;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tokio::fs;
use tracing::info;

/// Maximum pooled connections for file databases
const MAX_CONNECTIONS: u32 = 5;

/// Database manager for user and assessment storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// `sqlite::memory:` gives a private in-memory database backed by a single
    /// connection, so every query sees the migrated schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the file cannot be created, or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let is_memory = database_url.contains(":memory:");

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {database_url}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        if !is_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(DATABASE_TIMEOUT_SECS))
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let db = Self { pool };
        db.migrate().await?;

        info!(
            database = if is_memory { "in-memory" } else { database_url },
            "Database ready"
        );
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_assessments().await?;
        Ok(())
    }
}
