// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Canonical user profile and role value types.
//!
//! These are value types shaped by normalization and the directory lookup.
//! User lifecycle (create/persist/delete) is owned outside this slice.

use serde::{Deserialize, Serialize};

use crate::payload::{AuthPayload, Provider};

/// A role in a provider namespace. Looked up, never created here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
	/// Role namespace (`greenroom`, or the launcher customer).
	pub provider: String,
	pub name: String,
}

/// Canonical user profile produced by sign-in normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// Display name shown in the UI. Overwritten on every
	/// normalization/lookup pass.
	pub name: String,

	/// Stable handle. First-write-wins: once set it is never replaced by a
	/// later pass.
	pub username: Option<String>,

	/// Primary email address. Overwritten on every pass.
	pub email: String,

	/// Avatar image URL. Empty when the provider supplied none.
	pub image: String,

	/// The single current role slot.
	pub role: Option<Role>,

	/// The identity provider that authenticated this user.
	pub provider: Provider,
}

impl User {
	/// Build a profile from a sign-in payload using the per-provider
	/// normalizers. The role slot starts empty; role resolution is a
	/// separate, explicit step.
	pub fn from_payload(payload: &AuthPayload) -> Self {
		let username = payload.username();
		Self {
			name: payload.display_name(),
			username: if username.is_empty() {
				None
			} else {
				Some(username)
			},
			email: payload.email(),
			image: payload.image(),
			role: None,
			provider: payload.provider,
		}
	}
}
