// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use greenroom_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard Greenroom User-Agent
/// header.
///
/// The User-Agent format is: `greenroom/{platform}/{git_sha}`
/// Example: `greenroom/linux-x86_64/abc1234`
///
/// Use this when you need to customize the client (e.g., set timeouts).
///
/// # Example
/// ```ignore
/// let client = greenroom_common_http::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Greenroom User-Agent string.
///
/// Format: `greenroom/{platform}/{git_sha}`
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!("greenroom/{}/{}", info.platform, info.git_sha)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("greenroom/"));
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[0], "greenroom");
	}

	#[test]
	fn builder_with_timeout_builds() {
		let client = builder().timeout(Duration::from_secs(5)).build();
		assert!(client.is_ok());
	}
}
