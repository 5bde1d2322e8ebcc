// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

use crate::sections::{
	DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer, LookupConfigLayer,
};

/// Partial server configuration produced by one source.
///
/// Sections absent from a source stay `None` and do not override earlier
/// layers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	pub http: Option<HttpConfigLayer>,
	pub database: Option<DatabaseConfigLayer>,
	pub lookup: Option<LookupConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge a higher-precedence layer into this one.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.database, other.database, DatabaseConfigLayer::merge);
		merge_section(&mut self.lookup, other.lookup, LookupConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(base), Some(other)) => merge(base, other),
		(None, Some(other)) => *base = Some(other),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merging_fills_missing_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("0.0.0.0".to_string()),
				port: None,
			}),
			..ServerConfigLayer::default()
		});

		assert_eq!(base.http.unwrap().host.as_deref(), Some("0.0.0.0"));
	}

	#[test]
	fn merging_overrides_field_by_field() {
		let mut base = ServerConfigLayer {
			lookup: Some(LookupConfigLayer {
				enabled: Some(true),
				base_url: Some("https://a.example.com".to_string()),
				connect_timeout_secs: None,
				read_timeout_secs: None,
			}),
			..ServerConfigLayer::default()
		};

		base.merge(ServerConfigLayer {
			lookup: Some(LookupConfigLayer {
				enabled: None,
				base_url: Some("https://b.example.com".to_string()),
				connect_timeout_secs: Some(2),
				read_timeout_secs: None,
			}),
			..ServerConfigLayer::default()
		});

		let lookup = base.lookup.unwrap().finalize();
		assert!(lookup.enabled);
		assert_eq!(lookup.base_url, "https://b.example.com");
		assert_eq!(lookup.connect_timeout_secs, 2);
		assert_eq!(lookup.read_timeout_secs, 5);
	}
}
