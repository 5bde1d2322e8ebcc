// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pure role resolution for provider-supplied role lists.
//!
//! Providers may attach a comma-separated `roles` field to the sign-in
//! payload. The caller looks each (namespace, name) pair up in the role
//! table and passes the hits here; resolution itself stays pure so that
//! persistence remains a separate, explicit step.

use crate::payload::{AuthPayload, Provider};
use crate::user::{Role, User};

/// Role namespace used for every provider except the launcher.
pub const DEFAULT_ROLE_PROVIDER: &str = "greenroom";

/// The namespace role names are looked up under.
///
/// Launcher sign-ins are scoped to their customer; everything else shares
/// the default namespace.
pub fn role_namespace(payload: &AuthPayload) -> String {
	match payload.provider {
		Provider::BnLauncher => payload.info.customer.clone().unwrap_or_default(),
		_ => DEFAULT_ROLE_PROVIDER.to_string(),
	}
}

/// Role names requested by the payload, in payload order.
///
/// Empty or missing `roles` yields an empty list.
pub fn requested_roles(payload: &AuthPayload) -> Vec<String> {
	payload
		.info
		.roles
		.as_deref()
		.map(|roles| {
			roles
				.split(',')
				.map(|name| name.trim().to_string())
				.filter(|name| !name.is_empty())
				.collect()
		})
		.unwrap_or_default()
}

/// Pick the role to occupy the user's single role slot.
///
/// `candidates` are the roles the store actually found, in request order.
/// The slot is reassigned candidate by candidate: each one is skipped only
/// if its name matches the role held at that point in the pass, so the
/// last assignment wins and a name displaced earlier in the pass can be
/// picked up again later. `None` when no candidate is ever assigned. The
/// caller persists the result.
pub fn resolve_role(user: &User, candidates: &[Role]) -> Option<Role> {
	let mut current = user.role.as_ref().map(|role| role.name.clone());
	let mut selected = None;
	for role in candidates {
		if current.as_deref() != Some(role.name.as_str()) {
			current = Some(role.name.clone());
			selected = Some(role.clone());
		}
	}
	selected
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// The resolved role, when present, is always one of the candidates;
		/// resolution only comes up empty when every candidate carries the
		/// name the user already holds.
		#[test]
		fn resolution_picks_from_candidates(
			names in proptest::collection::vec("[a-z]{1,8}", 0..6),
			held in proptest::option::of("[a-z]{1,8}"),
		) {
			let user = User {
				name: "u".to_string(),
				username: None,
				email: String::new(),
				image: String::new(),
				role: held.clone().map(|name| Role {
					provider: DEFAULT_ROLE_PROVIDER.to_string(),
					name,
				}),
				provider: Provider::Ldap,
			};
			let candidates: Vec<Role> = names
				.iter()
				.map(|name| Role {
					provider: DEFAULT_ROLE_PROVIDER.to_string(),
					name: name.clone(),
				})
				.collect();

			match resolve_role(&user, &candidates) {
				Some(role) => {
					prop_assert!(candidates.contains(&role));
					if held.is_none() {
						prop_assert_eq!(&role, candidates.last().unwrap());
					}
				}
				None => {
					prop_assert!(candidates
						.iter()
						.all(|c| Some(&c.name) == held.as_ref()));
				}
			}
		}
	}
}
