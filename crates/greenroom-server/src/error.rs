// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use greenroom_server_db::DbError;
use greenroom_server_lookup::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("not found: {0}")]
	NotFound(String),

	#[error("bad request: {0}")]
	BadRequest(String),

	/// Transport failure or unparseable 200 from the directory. A non-200
	/// directory status is not an error and never reaches this type.
	#[error("directory lookup failed: {0}")]
	Lookup(#[from] LookupError),

	#[error(transparent)]
	Database(#[from] DbError),

	#[error("internal error: {0}")]
	Internal(String),
}

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub code: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, code) = match &self {
			ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
			ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
			ServerError::Lookup(_) => (StatusCode::BAD_GATEWAY, "lookup_failed"),
			ServerError::Database(_) | ServerError::Internal(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
			}
		};

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		(
			status,
			Json(ErrorResponse {
				code: code.to_string(),
				message: self.to_string(),
			}),
		)
			.into_response()
	}
}
