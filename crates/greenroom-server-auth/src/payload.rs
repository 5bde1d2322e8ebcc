// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity provider payloads and per-field normalization.
//!
//! Each supported provider delivers a slightly different attribute shape.
//! The normalizers here are total over [`Provider`]: missing fields map to
//! the empty string and unrecognized provider tags take the generic arms,
//! so no payload shape can panic.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Provider
// =============================================================================

/// Identity providers recognized by the sign-in flow.
///
/// Unknown provider tags deserialize to [`Provider::Other`] rather than
/// failing, and normalize through the generic arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
	/// Google OAuth.
	Google,
	/// Microsoft Office 365.
	Office365,
	/// Twitter OAuth.
	Twitter,
	/// Institutional LDAP.
	Ldap,
	/// The customer-specific conference launcher.
	BnLauncher,
	/// Any provider tag this build does not recognize.
	#[serde(other)]
	Other,
}

impl fmt::Display for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Provider::Google => write!(f, "google"),
			Provider::Office365 => write!(f, "office365"),
			Provider::Twitter => write!(f, "twitter"),
			Provider::Ldap => write!(f, "ldap"),
			Provider::BnLauncher => write!(f, "bn_launcher"),
			Provider::Other => write!(f, "other"),
		}
	}
}

// =============================================================================
// Payload types
// =============================================================================

/// Per-provider attribute block of the sign-in callback payload.
///
/// Every field is optional on the wire; consumers normalize absence to the
/// empty string where a value is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthInfo {
	pub name: Option<String>,
	pub display_name: Option<String>,
	pub email: Option<String>,
	pub nickname: Option<String>,
	pub username: Option<String>,
	pub image: Option<String>,
	/// Comma-separated role names requested by the provider.
	pub roles: Option<String>,
	/// Role namespace for launcher sign-ins.
	pub customer: Option<String>,
}

/// A sign-in callback payload as delivered by the upstream identity layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
	pub provider: Provider,
	/// The account identifier at the provider (institutional CRSid for LDAP).
	pub uid: String,
	#[serde(default)]
	pub info: AuthInfo,
}

// =============================================================================
// Per-field normalizers
// =============================================================================

impl AuthPayload {
	/// The user's display name.
	///
	/// Office 365 delivers it as `display_name`; every other provider uses
	/// the generic `name` field.
	pub fn display_name(&self) -> String {
		match self.provider {
			Provider::Office365 => field(&self.info.display_name),
			_ => field(&self.info.name),
		}
	}

	/// The user's username.
	///
	/// Google accounts derive it from the local part of the email address,
	/// launcher sign-ins carry an explicit `username`, and everything else
	/// falls back to `nickname`.
	pub fn username(&self) -> String {
		match self.provider {
			Provider::Google => field(&self.info.email)
				.split('@')
				.next()
				.unwrap_or_default()
				.to_string(),
			Provider::BnLauncher => field(&self.info.username),
			_ => field(&self.info.nickname),
		}
	}

	/// The user's email address, identical across providers.
	pub fn email(&self) -> String {
		field(&self.info.email)
	}

	/// The user's avatar image URL.
	///
	/// Twitter URLs are upgraded to https and have the `_normal` thumbnail
	/// suffix stripped. LDAP values pass through only when they carry an
	/// http(s) scheme. Everything else passes through unchanged.
	pub fn image(&self) -> String {
		let image = field(&self.info.image);
		match self.provider {
			Provider::Twitter => secure_scheme(&image).replace("_normal", ""),
			Provider::Ldap => {
				if image.starts_with("http") {
					image
				} else {
					String::new()
				}
			}
			_ => image,
		}
	}
}

fn field(value: &Option<String>) -> String {
	value.clone().unwrap_or_default()
}

fn secure_scheme(url: &str) -> String {
	match url.strip_prefix("http://") {
		Some(rest) => format!("https://{rest}"),
		None => url.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn payload(provider: Provider) -> AuthPayload {
		AuthPayload {
			provider,
			uid: "abc123".to_string(),
			info: AuthInfo {
				name: Some("Generic Name".to_string()),
				display_name: Some("Office Name".to_string()),
				email: Some("alice@example.com".to_string()),
				nickname: Some("nick".to_string()),
				username: Some("launcher_user".to_string()),
				image: Some("https://cdn.example.com/a.png".to_string()),
				roles: None,
				customer: None,
			},
		}
	}

	#[test]
	fn display_name_per_provider() {
		for provider in [
			Provider::Google,
			Provider::Twitter,
			Provider::Ldap,
			Provider::BnLauncher,
			Provider::Other,
		] {
			assert_eq!(payload(provider).display_name(), "Generic Name");
		}
		assert_eq!(payload(Provider::Office365).display_name(), "Office Name");
	}

	#[test]
	fn username_per_provider() {
		assert_eq!(payload(Provider::Google).username(), "alice");
		assert_eq!(payload(Provider::BnLauncher).username(), "launcher_user");
		for provider in [
			Provider::Office365,
			Provider::Twitter,
			Provider::Ldap,
			Provider::Other,
		] {
			assert_eq!(payload(provider).username(), "nick");
		}
	}

	#[test]
	fn email_is_provider_independent() {
		for provider in [
			Provider::Google,
			Provider::Office365,
			Provider::Twitter,
			Provider::Ldap,
			Provider::BnLauncher,
			Provider::Other,
		] {
			assert_eq!(payload(provider).email(), "alice@example.com");
		}
	}

	#[test]
	fn twitter_image_is_secured_and_unthumbnailed() {
		let mut p = payload(Provider::Twitter);
		p.info.image = Some("http://x.com/a_normal.png".to_string());
		assert_eq!(p.image(), "https://x.com/a.png");
	}

	#[test]
	fn twitter_image_already_secure_is_left_alone() {
		let mut p = payload(Provider::Twitter);
		p.info.image = Some("https://x.com/a_normal.png".to_string());
		assert_eq!(p.image(), "https://x.com/a.png");
	}

	#[test]
	fn ldap_image_requires_http_scheme() {
		let mut p = payload(Provider::Ldap);
		p.info.image = Some("ftp://x".to_string());
		assert_eq!(p.image(), "");

		p.info.image = Some("https://x".to_string());
		assert_eq!(p.image(), "https://x");

		p.info.image = Some("http://x".to_string());
		assert_eq!(p.image(), "http://x");
	}

	#[test]
	fn other_providers_pass_image_through() {
		for provider in [
			Provider::Google,
			Provider::Office365,
			Provider::BnLauncher,
			Provider::Other,
		] {
			assert_eq!(payload(provider).image(), "https://cdn.example.com/a.png");
		}
	}

	#[test]
	fn missing_fields_normalize_to_empty() {
		let p = AuthPayload {
			provider: Provider::Twitter,
			uid: "abc123".to_string(),
			info: AuthInfo::default(),
		};
		assert_eq!(p.display_name(), "");
		assert_eq!(p.username(), "");
		assert_eq!(p.email(), "");
		assert_eq!(p.image(), "");
	}

	#[test]
	fn google_username_without_at_sign_keeps_whole_value() {
		let mut p = payload(Provider::Google);
		p.info.email = Some("no-at-sign".to_string());
		assert_eq!(p.username(), "no-at-sign");
	}

	#[test]
	fn provider_wire_names_round_trip() {
		for (tag, expected) in [
			("google", Provider::Google),
			("office365", Provider::Office365),
			("twitter", Provider::Twitter),
			("ldap", Provider::Ldap),
			("bn_launcher", Provider::BnLauncher),
		] {
			let parsed: Provider = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
			assert_eq!(parsed, expected);
			assert_eq!(parsed.to_string(), tag);
		}
	}

	#[test]
	fn unknown_provider_tag_deserializes_to_other() {
		let parsed: Provider = serde_json::from_str("\"saml_megacorp\"").unwrap();
		assert_eq!(parsed, Provider::Other);
	}

	#[test]
	fn payload_deserializes_without_info_block() {
		let p: AuthPayload =
			serde_json::from_str(r#"{"provider": "ldap", "uid": "crsid1"}"#).unwrap();
		assert_eq!(p.provider, Provider::Ldap);
		assert_eq!(p.uid, "crsid1");
		assert_eq!(p.email(), "");
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	fn any_provider() -> impl Strategy<Value = Provider> {
		prop_oneof![
			Just(Provider::Google),
			Just(Provider::Office365),
			Just(Provider::Twitter),
			Just(Provider::Ldap),
			Just(Provider::BnLauncher),
			Just(Provider::Other),
		]
	}

	proptest! {
		/// Normalizers never panic, whatever the payload carries.
		#[test]
		fn normalizers_are_total(
			provider in any_provider(),
			uid in ".{0,40}",
			name in proptest::option::of(".{0,40}"),
			email in proptest::option::of(".{0,40}"),
			nickname in proptest::option::of(".{0,40}"),
			image in proptest::option::of(".{0,60}"),
		) {
			let payload = AuthPayload {
				provider,
				uid,
				info: AuthInfo {
					name,
					display_name: None,
					email,
					nickname,
					username: None,
					image,
					roles: None,
					customer: None,
				},
			};
			let _ = payload.display_name();
			let _ = payload.username();
			let _ = payload.email();
			let _ = payload.image();
		}

		/// Twitter avatar URLs never keep an insecure scheme or the
		/// thumbnail suffix.
		#[test]
		fn twitter_images_are_secure(path in "[a-z0-9/_.]{0,40}") {
			let payload = AuthPayload {
				provider: Provider::Twitter,
				uid: "u".to_string(),
				info: AuthInfo {
					image: Some(format!("http://pbs.twimg.com/{path}")),
					..AuthInfo::default()
				},
			};
			let image = payload.image();
			prop_assert!(image.starts_with("https://"));
			prop_assert!(!image.contains("_normal"));
		}

		/// Google usernames never contain the email domain.
		#[test]
		fn google_username_is_local_part(
			local in "[a-z0-9.]{1,20}",
			domain in "[a-z0-9]{1,10}\\.[a-z]{2,5}",
		) {
			let payload = AuthPayload {
				provider: Provider::Google,
				uid: "u".to_string(),
				info: AuthInfo {
					email: Some(format!("{local}@{domain}")),
					..AuthInfo::default()
				},
			};
			prop_assert_eq!(payload.username(), local);
		}
	}
}
