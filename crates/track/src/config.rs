// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration and environment loading.

use std::path::PathBuf;
use std::time::Duration;

use track_core::ApiKey;

use crate::error::{Result, TrackError};

/// API URL used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.track.com";

/// Path appended to the API URL for event submission.
pub const EVENTS_PATH: &str = "/api/events";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "TRACK_API_KEY";
/// Environment variable holding the API URL.
pub const ENV_API_URL: &str = "TRACK_API_URL";
/// Environment variable enabling debug logging.
pub const ENV_DEBUG: &str = "TRACK_DEBUG";

/// Configuration owned by a [`TrackClient`](crate::TrackClient).
#[derive(Debug, Clone)]
pub struct TrackConfig {
	pub api_key: ApiKey,
	pub api_url: String,
	/// Emit diagnostic logs for every send.
	pub debug: bool,
	/// Per-request timeout. `None` means the request may hang indefinitely.
	pub request_timeout: Option<Duration>,
	/// Keep an in-memory session (id and screen path history).
	pub session_tracking: bool,
}

impl TrackConfig {
	/// Creates a configuration with the default API URL and debug off.
	pub fn new(api_key: impl Into<ApiKey>) -> Self {
		Self {
			api_key: api_key.into(),
			api_url: DEFAULT_API_URL.to_string(),
			debug: false,
			request_timeout: None,
			session_tracking: true,
		}
	}

	pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = url.into();
		self
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	pub fn with_session_tracking(mut self, enabled: bool) -> Self {
		self.session_tracking = enabled;
		self
	}

	/// Full URL events are posted to.
	pub fn events_url(&self) -> String {
		format!("{}{}", self.api_url.trim_end_matches('/'), EVENTS_PATH)
	}

	/// Loads configuration from the process environment.
	///
	/// - `TRACK_API_KEY_FILE` (read from disk, wins) or `TRACK_API_KEY`
	/// - `TRACK_API_URL` (optional)
	/// - `TRACK_DEBUG` (`1`, `true`, `yes` or `on` enable it)
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let file_var = format!("{ENV_API_KEY}_FILE");
		let api_key = match lookup(&file_var) {
			Some(path) if path.is_empty() => {
				return Err(TrackError::Config(format!("{file_var} is empty")));
			}
			Some(path) => {
				let path = PathBuf::from(path);
				let content = std::fs::read_to_string(&path).map_err(|e| {
					TrackError::Config(format!("failed to read {}: {e}", path.display()))
				})?;
				content.trim_end_matches(['\r', '\n']).to_string()
			}
			None => lookup(ENV_API_KEY).ok_or_else(|| {
				TrackError::Config(format!("set either {ENV_API_KEY} or {file_var}"))
			})?,
		};

		let mut config = Self::new(api_key);
		if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.is_empty()) {
			config.api_url = url;
		}
		if let Some(flag) = lookup(ENV_DEBUG) {
			config.debug = parse_flag(&flag);
		}
		Ok(config)
	}
}

fn parse_flag(value: &str) -> bool {
	matches!(
		value.trim().to_ascii_lowercase().as_str(),
		"1" | "true" | "yes" | "on"
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| map.get(name).cloned()
	}

	#[test]
	fn new_applies_defaults() {
		let config = TrackConfig::new("key");
		assert_eq!(config.api_url, DEFAULT_API_URL);
		assert!(!config.debug);
		assert!(config.request_timeout.is_none());
		assert!(config.session_tracking);
	}

	#[test]
	fn events_url_joins_without_double_slash() {
		let config = TrackConfig::new("key").with_api_url("https://collect.example.com/");
		assert_eq!(config.events_url(), "https://collect.example.com/api/events");
	}

	#[test]
	fn from_lookup_reads_direct_values() {
		let config = TrackConfig::from_lookup(lookup_from(&[
			("TRACK_API_KEY", "k1"),
			("TRACK_API_URL", "http://localhost:9000"),
			("TRACK_DEBUG", "true"),
		]))
		.unwrap();
		assert_eq!(config.api_key.expose(), "k1");
		assert_eq!(config.api_url, "http://localhost:9000");
		assert!(config.debug);
	}

	#[test]
	fn from_lookup_requires_key() {
		let result = TrackConfig::from_lookup(lookup_from(&[]));
		assert!(matches!(result, Err(TrackError::Config(_))));
	}

	#[test]
	fn key_file_takes_precedence() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "from-file").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let config = TrackConfig::from_lookup(lookup_from(&[
			("TRACK_API_KEY", "direct"),
			("TRACK_API_KEY_FILE", path.as_str()),
		]))
		.unwrap();
		assert_eq!(config.api_key.expose(), "from-file");
	}

	#[test]
	fn key_file_line_ending_is_stripped() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "from-file\r\n").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let config =
			TrackConfig::from_lookup(lookup_from(&[("TRACK_API_KEY_FILE", path.as_str())])).unwrap();
		assert_eq!(config.api_key.expose(), "from-file");
	}

	#[test]
	fn empty_key_file_var_is_an_error() {
		let result = TrackConfig::from_lookup(lookup_from(&[("TRACK_API_KEY_FILE", "")]));
		assert!(matches!(result, Err(TrackError::Config(_))));
	}

	#[test]
	fn debug_flag_parsing() {
		assert!(parse_flag("1"));
		assert!(parse_flag("YES"));
		assert!(parse_flag(" on "));
		assert!(!parse_flag("0"));
		assert!(!parse_flag("false"));
		assert!(!parse_flag(""));
	}

	mod proptests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn events_url_has_single_separator(host in "[a-z]{1,12}", slashes in 0usize..4) {
				let url = format!("https://{host}.example.com{}", "/".repeat(slashes));
				let config = TrackConfig::new("k").with_api_url(url);
				prop_assert_eq!(
					config.events_url(),
					format!("https://{host}.example.com/api/events")
				);
			}

			#[test]
			fn unknown_flags_are_false(value in "[a-z]{2,8}") {
				prop_assume!(!matches!(value.as_str(), "true" | "yes" | "on"));
				prop_assert!(!parse_flag(&value));
			}
		}
	}
}
