// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::path::PathBuf;

/// What an artifact is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
	Source,
	Config,
	Documentation,
}

impl fmt::Display for ArtifactKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Source => "source",
			Self::Config => "config",
			Self::Documentation => "docs",
		};
		f.pad(label)
	}
}

/// One output file, addressed relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
	pub path: PathBuf,
	pub content: String,
	pub kind: ArtifactKind,
}

impl GeneratedArtifact {
	pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: ArtifactKind) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
			kind,
		}
	}
}
