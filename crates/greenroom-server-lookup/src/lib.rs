// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Institutional directory lookup for Greenroom.
//!
//! After an LDAP/CRSid sign-in, the user's display name and email are
//! resolved through the university directory (people-search) API. The
//! client issues exactly one HTTPS GET per invocation with bounded
//! timeouts and hands the raw status and body back to the caller; a
//! non-200 status is an expected business outcome, not an error, and is
//! handled by [`apply_lookup`] with deterministic fallback values.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use greenroom_server_auth::{AuthPayload, User};

/// Path template under the directory host. `{uid}` is the CRSid.
const LOOKUP_PATH: &str = "/api/v1/person/crsid";

// =============================================================================
// Errors
// =============================================================================

/// Errors surfaced by the lookup client and result application.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	/// The HTTP request failed in transport (connect refused, timeout).
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// A 200 response carried a body that does not match the documented
	/// shape.
	#[error("failed to parse lookup response: {0}")]
	Parse(String),
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the directory lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
	/// Base URL of the directory API, without a trailing path.
	pub base_url: String,
	/// TCP connect timeout.
	pub connect_timeout: Duration,
	/// Socket read timeout.
	pub read_timeout: Duration,
}

impl Default for LookupConfig {
	fn default() -> Self {
		Self {
			base_url: "https://www.lookup.cam.ac.uk".to_string(),
			connect_timeout: Duration::from_secs(5),
			read_timeout: Duration::from_secs(5),
		}
	}
}

// =============================================================================
// Response types
// =============================================================================

/// Raw outcome of one lookup call.
///
/// The client does not interpret the response; status and body travel
/// together to [`apply_lookup`].
#[derive(Debug, Clone)]
pub struct LookupResponse {
	pub status: StatusCode,
	pub body: String,
}

#[derive(Debug, Deserialize)]
struct LookupEnvelope {
	result: LookupResult,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
	person: LookupPerson,
	#[serde(default)]
	attributes: Vec<LookupAttribute>,
}

#[derive(Debug, Deserialize)]
struct LookupPerson {
	#[serde(rename = "visibleName")]
	visible_name: String,
}

#[derive(Debug, Deserialize)]
struct LookupAttribute {
	value: String,
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the directory API.
#[derive(Debug, Clone)]
pub struct LookupClient {
	config: LookupConfig,
	http_client: reqwest::Client,
}

impl LookupClient {
	/// Create a new lookup client with the given configuration.
	///
	/// # Panics
	///
	/// Panics if the HTTP client cannot be built (should never happen in
	/// practice).
	pub fn new(config: LookupConfig) -> Self {
		let http_client = greenroom_common_http::builder()
			.connect_timeout(config.connect_timeout)
			.read_timeout(config.read_timeout)
			.build()
			.expect("failed to build HTTP client");

		Self {
			config,
			http_client,
		}
	}

	/// Resolve one account identifier against the directory.
	///
	/// Issues `GET {base_url}/api/v1/person/crsid/{uid}?fetch=email` with
	/// `Accept: application/json`. Returns the raw status and body without
	/// interpreting them; transport failures surface as
	/// [`LookupError::Http`].
	#[tracing::instrument(skip(self), name = "LookupClient::lookup")]
	pub async fn lookup(&self, uid: &str) -> Result<LookupResponse, LookupError> {
		let url = format!(
			"{}{}/{}?fetch=email",
			self.config.base_url.trim_end_matches('/'),
			LOOKUP_PATH,
			uid
		);

		tracing::debug!("resolving account against directory");

		let response = self
			.http_client
			.get(&url)
			.header("Accept", "application/json")
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;

		if status != StatusCode::OK {
			tracing::debug!(status = %status, "directory returned non-200, caller falls back");
		}

		Ok(LookupResponse { status, body })
	}
}

// =============================================================================
// Result application
// =============================================================================

/// Apply a lookup outcome to a user profile.
///
/// On 200 the parsed `visibleName` and the first attribute value become the
/// user's name and email; on any other status the account identifier
/// becomes the name and the email is cleared. Either way the username is
/// set from the identifier only if still unset, and the avatar image is
/// cleared (directory-backed accounts carry no avatar).
///
/// Name and email are overwritten on every pass; username is
/// first-write-wins.
pub fn apply_lookup(
	user: &mut User,
	response: &LookupResponse,
	payload: &AuthPayload,
) -> Result<(), LookupError> {
	if response.status != StatusCode::OK {
		user.name = payload.uid.clone();
		user.email = String::new();
	} else {
		let envelope: LookupEnvelope = serde_json::from_str(&response.body)
			.map_err(|e| LookupError::Parse(e.to_string()))?;

		user.name = envelope.result.person.visible_name;
		// TODO: filter by attribute scheme once the directory API contract
		// is confirmed; today we request only email and take the first
		// attribute returned.
		user.email = envelope
			.result
			.attributes
			.first()
			.map(|attribute| attribute.value.clone())
			.unwrap_or_default();
	}

	if user.username.is_none() {
		user.username = Some(payload.uid.clone());
	}
	user.image = String::new();

	Ok(())
}
