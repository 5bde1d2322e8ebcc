// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections and their partial (layer) forms.
//!
//! Each section comes in two shapes: the fully resolved config struct and
//! an all-optional layer that sources produce and merging combines. A
//! later layer's `Some` fields override an earlier layer's.

use serde::Deserialize;

// =============================================================================
// HTTP
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 8080,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	pub host: Option<String>,
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		let defaults = HttpConfig::default();
		HttpConfig {
			host: self.host.unwrap_or(defaults.host),
			port: self.port.unwrap_or(defaults.port),
		}
	}
}

// =============================================================================
// Database
// =============================================================================

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub url: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: "sqlite:./greenroom.db".to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfigLayer {
	pub url: Option<String>,
}

impl DatabaseConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.url.is_some() {
			self.url = other.url;
		}
	}

	pub fn finalize(self) -> DatabaseConfig {
		DatabaseConfig {
			url: self.url.unwrap_or_else(|| DatabaseConfig::default().url),
		}
	}
}

// =============================================================================
// Directory lookup
// =============================================================================

/// Directory (people-search) lookup settings.
#[derive(Debug, Clone)]
pub struct LookupConfig {
	/// Whether sign-in performs the directory lookup at all.
	pub enabled: bool,
	pub base_url: String,
	pub connect_timeout_secs: u64,
	pub read_timeout_secs: u64,
}

impl Default for LookupConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			base_url: "https://www.lookup.cam.ac.uk".to_string(),
			connect_timeout_secs: 5,
			read_timeout_secs: 5,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupConfigLayer {
	pub enabled: Option<bool>,
	pub base_url: Option<String>,
	pub connect_timeout_secs: Option<u64>,
	pub read_timeout_secs: Option<u64>,
}

impl LookupConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.connect_timeout_secs.is_some() {
			self.connect_timeout_secs = other.connect_timeout_secs;
		}
		if other.read_timeout_secs.is_some() {
			self.read_timeout_secs = other.read_timeout_secs;
		}
	}

	pub fn finalize(self) -> LookupConfig {
		let defaults = LookupConfig::default();
		LookupConfig {
			enabled: self.enabled.unwrap_or(defaults.enabled),
			base_url: self.base_url.unwrap_or(defaults.base_url),
			connect_timeout_secs: self
				.connect_timeout_secs
				.unwrap_or(defaults.connect_timeout_secs),
			read_timeout_secs: self.read_timeout_secs.unwrap_or(defaults.read_timeout_secs),
		}
	}
}

// =============================================================================
// Logging
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	/// Default tracing filter when `RUST_LOG` is not set.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| LoggingConfig::default().level),
		}
	}
}
