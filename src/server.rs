// ABOUTME: HTTP server bootstrap for the healthcare portal
// ABOUTME: Assembles the router and middleware stack and serves it until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # HTTP Server
//!
//! `HealthcareServer` merges every domain router, wraps it in the request-id,
//! tracing, CORS, timeout and body-limit layers, and serves it on
//! `HOST:port` until Ctrl-C or SIGTERM.

use crate::constants::limits::MAX_REQUEST_SIZE;
use crate::middleware::{setup_cors, trace_layer, RequestIdGenerator, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{AssessmentRoutes, AuthRoutes, HealthRoutes, RiskRoutes, UserRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::HeaderName;
use std::future::pending;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};

/// Healthcare portal HTTP server
pub struct HealthcareServer {
    resources: Arc<ServerResources>,
}

impl HealthcareServer {
    /// Create a new server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router with all middleware applied
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
        let timeout = Duration::from_secs(resources.config.request_timeout_secs);

        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(AuthRoutes::routes(Arc::clone(resources)))
            .merge(UserRoutes::routes(Arc::clone(resources)))
            .merge(RiskRoutes::routes(Arc::clone(resources)))
            .merge(AssessmentRoutes::routes(Arc::clone(resources)))
            // Later layers wrap earlier ones: request ids are set first, then traced
            .layer(RequestBodyLimitLayer::new(MAX_REQUEST_SIZE))
            .layer(TimeoutLayer::new(timeout))
            .layer(setup_cors(&resources.config))
            .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
            .layer(trace_layer())
            .layer(SetRequestIdLayer::new(request_id_header, RequestIdGenerator))
    }

    /// Serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = format!("{}:{port}", self.resources.config.host);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!("HTTP server listening on http://{addr}");
        info!("{}", self.resources.config.summary());

        let router = Self::router(&self.resources);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
