// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for the SDK API key.
//!
//! The key is sent as a bearer token on every request, so it ends up close to
//! a lot of logging. `ApiKey` never prints its value through `Debug` or
//! `Display`, and zeroes its memory on drop. Call [`ApiKey::expose`] to get
//! the raw string.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder printed instead of the key.
pub const REDACTED: &str = "[REDACTED]";

/// An API key that cannot be logged by accident.
///
/// ```
/// use track_core::ApiKey;
///
/// let key = ApiKey::new("trk_live_abc");
/// assert_eq!(format!("{key}"), "[REDACTED]");
/// assert_eq!(format!("{key:?}"), "ApiKey(\"[REDACTED]\")");
/// assert_eq!(key.expose(), "trk_live_abc");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
	inner: String,
}

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self { inner: key.into() }
	}

	pub fn expose(&self) -> &str {
		&self.inner
	}

	pub fn is_blank(&self) -> bool {
		self.inner.trim().is_empty()
	}

	/// The `Authorization` header value for this key.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.inner)
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl From<String> for ApiKey {
	fn from(key: String) -> Self {
		Self::new(key)
	}
}

impl From<&str> for ApiKey {
	fn from(key: &str) -> Self {
		Self::new(key)
	}
}
