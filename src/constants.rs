// ABOUTME: System-wide constants and configuration defaults for the healthcare portal
// ABOUTME: Re-exports the shared constants from healthcare-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Constants Module

pub use healthcare_core::constants::*;
