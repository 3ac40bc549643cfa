// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles the database, token manager, risk engine and configuration

//! Server resources shared across route handlers

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use healthcare_intelligence::RiskEngine;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Built once at startup and shared behind an `Arc`, so handlers never
/// recreate pools, keys or the rule table per request.
#[derive(Clone)]
pub struct ServerResources {
    /// User and assessment storage
    pub database: Arc<Database>,
    /// Session token issuer and validator
    pub auth_manager: Arc<AuthManager>,
    /// Risk scoring engine
    pub risk_engine: Arc<RiskEngine>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        risk_engine: RiskEngine,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            risk_engine: Arc::new(risk_engine),
            config,
        }
    }

    /// Build resources from configuration, deriving the token manager from it
    #[must_use]
    pub fn from_config(database: Database, risk_engine: RiskEngine, config: ServerConfig) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        );
        Self::new(database, auth_manager, risk_engine, Arc::new(config))
    }
}
