// ABOUTME: Unified error handling re-exported from healthcare-core
// ABOUTME: AppError, ErrorCode and the JSON error envelope used by every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

pub use healthcare_core::errors::*;
