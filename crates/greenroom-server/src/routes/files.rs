// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Stored-file retrieval HTTP handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::AppState;
use crate::error::ServerError;

/// GET /files/{key} - serve a stored file as an attachment download.
///
/// Responds with the blob's full byte content and its original filename in
/// the `Content-Disposition` header. An unknown key is a clean 404 with no
/// fallback content.
#[tracing::instrument(skip(state))]
pub async fn retrieve(
	State(state): State<AppState>,
	Path(key): Path<String>,
) -> Result<Response, ServerError> {
	let blob = state
		.blobs
		.find_by_key(&key)
		.await?
		.ok_or_else(|| ServerError::NotFound(format!("no stored file matches key {key}")))?;

	tracing::debug!(filename = %blob.filename, bytes = blob.content.len(), "serving stored file");

	Ok((
		[
			(
				header::CONTENT_TYPE,
				"application/octet-stream".to_string(),
			),
			(
				header::CONTENT_DISPOSITION,
				attachment_disposition(&blob.filename),
			),
		],
		blob.content,
	)
		.into_response())
}

/// Quote a filename for a `Content-Disposition: attachment` header.
///
/// Control characters are dropped and double quotes replaced so the header
/// value stays well-formed whatever the stored filename contains.
fn attachment_disposition(filename: &str) -> String {
	let safe: String = filename
		.chars()
		.filter(|c| !c.is_control())
		.map(|c| if c == '"' { '\'' } else { c })
		.collect();
	format!("attachment; filename=\"{safe}\"")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{create_router, AppState};
	use axum::body::Body;
	use axum::http::{Request, StatusCode};
	use chrono::Utc;
	use greenroom_server_db::{testing, BlobRepository, RoleRepository, StoredBlob};
	use tower::ServiceExt;

	async fn test_state() -> AppState {
		let pool = testing::create_test_pool().await;
		AppState {
			blobs: BlobRepository::new(pool.clone()),
			roles: RoleRepository::new(pool),
			lookup: None,
		}
	}

	#[test]
	fn attachment_disposition_quotes_filename() {
		assert_eq!(
			attachment_disposition("slides.pdf"),
			"attachment; filename=\"slides.pdf\""
		);
		assert_eq!(
			attachment_disposition("we\"ird\nname.txt"),
			"attachment; filename=\"we'irdname.txt\""
		);
	}

	#[tokio::test]
	async fn known_key_streams_bytes_with_filename() {
		let state = test_state().await;
		state
			.blobs
			.insert(&StoredBlob {
				key: "abc123".to_string(),
				filename: "slides.pdf".to_string(),
				content: b"%PDF-1.7".to_vec(),
				created_at: Utc::now(),
			})
			.await
			.unwrap();

		let app = create_router(state);
		let response = app
			.oneshot(
				Request::builder()
					.uri("/files/abc123")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response
				.headers()
				.get(header::CONTENT_DISPOSITION)
				.unwrap(),
			"attachment; filename=\"slides.pdf\""
		);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		assert_eq!(&body[..], b"%PDF-1.7");
	}

	#[tokio::test]
	async fn unknown_key_is_404_with_no_fallback() {
		let app = create_router(test_state().await);
		let response = app
			.oneshot(
				Request::builder()
					.uri("/files/no-such-key")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
	}
}
