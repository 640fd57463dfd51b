// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a schema, rendering or building the SDK.
#[derive(Debug, Error)]
pub enum GeneratorError {
	#[error("I/O error at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse configuration: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("invalid configuration:\n  - {}", .0.join("\n  - "))]
	Invalid(Vec<String>),

	#[error("`{command}` failed with {status}: {stderr}")]
	BuildFailed {
		command: String,
		status: String,
		stderr: String,
	},

	#[error("failed to run `{command}`: {source}")]
	BuildSpawn {
		command: String,
		#[source]
		source: std::io::Error,
	},
}

impl GeneratorError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
