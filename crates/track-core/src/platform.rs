// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host platform descriptors included in session snapshots.

use serde::{Deserialize, Serialize};

/// What the SDK knows about the machine it runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
	pub os: String,
	pub arch: String,
	pub device_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_agent: Option<String>,
}

impl PlatformInfo {
	/// Describes the current process from compile-time target constants.
	pub fn current() -> Self {
		Self {
			os: std::env::consts::OS.to_string(),
			arch: std::env::consts::ARCH.to_string(),
			device_type: device_type_for(std::env::consts::OS).to_string(),
			user_agent: None,
		}
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}
}

fn device_type_for(os: &str) -> &'static str {
	match os {
		"ios" | "android" => "mobile",
		"linux" | "macos" | "windows" | "freebsd" | "netbsd" | "openbsd" => "desktop",
		_ => "unknown",
	}
}
