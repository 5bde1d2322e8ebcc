// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version output for the `version` subcommand.

use greenroom_common_version::{version_code, BuildInfo};

pub fn format_version_info() -> String {
	let info = BuildInfo::current();
	format!(
		"greenroom-server {}\ngit sha: {}\nbuilt: {}\nplatform: {}",
		version_code(),
		info.git_sha,
		info.build_timestamp,
		info.platform
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_info_names_the_binary() {
		let out = format_version_info();
		assert!(out.starts_with("greenroom-server "));
		assert!(out.contains("platform: "));
	}
}
