// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Greenroom conferencing front-door server.
//!
//! This crate provides the HTTP surface of the slice: stored-file
//! retrieval, the sign-in normalization endpoint, and a health check.

pub mod api;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use greenroom_server_config::ServerConfig;
