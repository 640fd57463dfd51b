// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Track client.

use thiserror::Error;
use track_core::CoreError;

use crate::identity::StorageError;

/// Track client errors.
///
/// None of these are retried by the SDK; callers decide what to do with a
/// failed send.
#[derive(Debug, Error)]
pub enum TrackError {
	/// `Track::get_instance` was called before `Track::initialize`.
	#[error("Track not initialized. Call Track::initialize() first.")]
	NotInitialized,

	/// API key is missing or blank.
	#[error("invalid API key: must not be empty")]
	InvalidApiKey,

	/// API URL is not an absolute http(s) URL.
	#[error("invalid API URL: {0}")]
	InvalidBaseUrl(String),

	/// The HTTP request could not be completed.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The collection endpoint answered with a non-2xx status.
	#[error("failed to send event: {status} - {message}")]
	ServerError { status: u16, message: String },

	/// The event was rejected before sending.
	#[error("event validation failed: {0}")]
	ValidationFailed(String),

	/// The event could not be serialized.
	#[error("serialization error: {0}")]
	SerializationError(#[from] serde_json::Error),

	/// Reading or writing the stored user id failed.
	#[error("user id storage error: {0}")]
	Storage(#[from] StorageError),

	/// Environment configuration could not be loaded.
	#[error("configuration error: {0}")]
	Config(String),
}

impl From<CoreError> for TrackError {
	fn from(err: CoreError) -> Self {
		TrackError::ValidationFailed(err.to_string())
	}
}

impl TrackError {
	/// HTTP status carried by a server rejection, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			TrackError::ServerError { status, .. } => Some(*status),
			TrackError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

/// Result type alias for Track operations.
pub type Result<T> = std::result::Result<T, TrackError>;
