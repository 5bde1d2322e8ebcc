// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared build and version information for Greenroom.
//!
//! This crate provides a single source of truth for the version string,
//! git metadata, build timestamp, and platform information across all
//! Greenroom binaries. The effective version code is resolved exactly once
//! per process via [`version_code`] and is immutable thereafter.

use std::sync::OnceLock;

shadow_rs::shadow!(build);

/// Environment variable that overrides the computed version code.
pub const VERSION_CODE_ENV: &str = "VERSION_CODE";

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
///
/// Derived at compile time from target configuration.
pub const PLATFORM: &str = env!("GREENROOM_PLATFORM");

/// Core build information used across the server binary and headers.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub last_tag: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			last_tag: build::LAST_TAG,
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}
}

static VERSION_CODE: OnceLock<String> = OnceLock::new();

/// The effective version code for this process.
///
/// Resolution order: the `VERSION_CODE` environment variable when set and
/// non-empty, otherwise the last git tag captured at build time, otherwise
/// `{pkg_version}+{short_commit}`. Resolved on first call and memoized for
/// the life of the process.
pub fn version_code() -> &'static str {
	VERSION_CODE.get_or_init(resolve_version_code)
}

fn resolve_version_code() -> String {
	match std::env::var(VERSION_CODE_ENV) {
		Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
		_ => fallback_version(),
	}
}

/// Version string derived from build metadata alone.
pub fn fallback_version() -> String {
	let info = BuildInfo::current();
	if info.last_tag.is_empty() {
		format!("{}+{}", info.version, info.git_sha)
	} else {
		info.last_tag.to_string()
	}
}
