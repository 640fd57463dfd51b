// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validation errors for core event types.

use thiserror::Error;

/// Errors raised while validating events before they leave the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
	/// The event has no name.
	#[error("event name must not be empty")]
	EmptyEventName,

	/// The serialized properties exceed the allowed size.
	#[error("properties exceed maximum size ({size} > {max} bytes)")]
	PropertiesTooLarge { size: usize, max: usize },

	/// The properties could not be serialized.
	#[error("properties are not serializable: {0}")]
	Unserializable(String),
}

/// Result type alias for core validation.
pub type Result<T> = std::result::Result<T, CoreError>;
