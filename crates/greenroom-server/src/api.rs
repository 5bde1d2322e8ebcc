// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use greenroom_server_config::ServerConfig;
use greenroom_server_db::{BlobRepository, RoleRepository};
use greenroom_server_lookup::{LookupClient, LookupConfig as LookupClientConfig};

use crate::routes;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
	pub blobs: BlobRepository,
	pub roles: RoleRepository,
	/// Directory lookup client, present only when enabled in config.
	pub lookup: Option<Arc<LookupClient>>,
}

/// Build application state from a database pool and resolved config.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	let lookup = config.lookup.enabled.then(|| {
		Arc::new(LookupClient::new(LookupClientConfig {
			base_url: config.lookup.base_url.clone(),
			connect_timeout: Duration::from_secs(config.lookup.connect_timeout_secs),
			read_timeout: Duration::from_secs(config.lookup.read_timeout_secs),
		}))
	});

	AppState {
		blobs: BlobRepository::new(pool.clone()),
		roles: RoleRepository::new(pool),
		lookup,
	}
}

/// Assemble the HTTP router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/files/{key}", get(routes::files::retrieve))
		.route("/auth/callback", post(routes::sessions::auth_callback))
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		)
		.with_state(state)
}
