// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources, user and questionnaire helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `healthcare_portal`

use anyhow::Result;
use healthcare_portal::{
    auth::hash_password,
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    models::{ExerciseLevel, Gender, HealthMetrics, SmokingStatus, User},
    resources::ServerResources,
    RiskEngine,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Password used for every test user
pub const TEST_PASSWORD: &str = "correct-horse";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Server configuration suitable for tests: in-memory database, cheap bcrypt
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.database.url = DatabaseUrl::Memory;
    config.auth.jwt_secret = "integration-test-secret".to_owned();
    config.auth.bcrypt_cost = 4;
    config
}

/// Fully wired resources over a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::from_config(
        database,
        RiskEngine::new(),
        test_config(),
    )))
}

/// Store a user whose password is [`TEST_PASSWORD`]
pub async fn create_test_user(database: &Database, name: &str, email: &str) -> Result<User> {
    let password_hash = hash_password(TEST_PASSWORD.to_owned(), 4).await?;
    let user = User::new(name.to_owned(), email.to_owned(), password_hash);
    database.create_user(&user).await?;
    Ok(user)
}

/// Issue a session token for a user
pub fn token_for(resources: &ServerResources, user: &User) -> Result<String> {
    Ok(resources.auth_manager.generate_token(user)?.token)
}

/// A questionnaire that triggers no rule (score 0, BMI 24.2)
pub fn healthy_metrics() -> HealthMetrics {
    HealthMetrics {
        age: 30,
        gender: Gender::Female,
        height: 170,
        weight: 70,
        blood_pressure: "120/80".to_owned(),
        blood_sugar: 90,
        cholesterol: 180,
        heart_rate: 70,
        smoking: SmokingStatus::None,
        exercise: ExerciseLevel::Regular,
        medical_history: String::new(),
        medications: String::new(),
    }
}

/// A questionnaire that triggers one band of every rule (score 225, BMI 35.2)
pub fn high_risk_metrics() -> HealthMetrics {
    HealthMetrics {
        age: 65,
        gender: Gender::Male,
        height: 160,
        weight: 90,
        blood_pressure: "145/95".to_owned(),
        blood_sugar: 130,
        cholesterol: 250,
        heart_rate: 105,
        smoking: SmokingStatus::Current,
        exercise: ExerciseLevel::None,
        medical_history: "Hypertension".to_owned(),
        medications: "Lisinopril".to_owned(),
    }
}
