// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// SDK name reported in the User-Agent.
pub const SDK_NAME: &str = "track-sdk-rust";
/// SDK version reported in the User-Agent.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a client builder with the standard Track User-Agent.
///
/// Use this when the client needs more settings (e.g. a timeout).
///
/// # Example
/// ```ignore
/// let client = track_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard User-Agent string.
///
/// Format: `track-sdk-rust/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"{}/{} ({}-{})",
		SDK_NAME,
		SDK_VERSION,
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
