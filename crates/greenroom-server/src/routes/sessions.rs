// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sign-in callback HTTP handler.
//!
//! Takes the provider payload delivered by the upstream identity layer and
//! returns the canonical profile: per-provider field normalization, then
//! (when enabled) one directory lookup, then single-slot role resolution
//! against the roles table. Persisting the profile is owned by the
//! surrounding system, so the handler only returns it.

use axum::extract::State;
use axum::Json;

use greenroom_server_auth::{
	requested_roles, resolve_role, role_namespace, AuthPayload, Role, User,
};
use greenroom_server_lookup::apply_lookup;

use crate::api::AppState;
use crate::error::ServerError;

/// POST /auth/callback - normalize a provider payload into a user profile.
#[tracing::instrument(skip(state, payload), fields(provider = %payload.provider, uid = %payload.uid))]
pub async fn auth_callback(
	State(state): State<AppState>,
	Json(payload): Json<AuthPayload>,
) -> Result<Json<User>, ServerError> {
	if payload.uid.trim().is_empty() {
		return Err(ServerError::BadRequest("uid must not be empty".to_string()));
	}

	let mut user = User::from_payload(&payload);

	if let Some(lookup) = &state.lookup {
		let response = lookup.lookup(&payload.uid).await?;
		apply_lookup(&mut user, &response, &payload)?;
	}

	let namespace = role_namespace(&payload);
	let mut candidates = Vec::new();
	for name in requested_roles(&payload) {
		if let Some(row) = state.roles.find_by(&namespace, &name).await? {
			candidates.push(Role {
				provider: row.provider,
				name: row.name,
			});
		}
	}
	if let Some(role) = resolve_role(&user, &candidates) {
		tracing::debug!(role = %role.name, namespace = %role.provider, "assigning role");
		user.role = Some(role);
	}

	Ok(Json(user))
}
