// ABOUTME: HTTP middleware for the portal router
// ABOUTME: CORS policy, request ids and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

/// CORS configuration
pub mod cors;
/// Request id generation and per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{trace_layer, RequestIdGenerator, REQUEST_ID_HEADER};
