// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Writes rendered artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artifact::GeneratedArtifact;
use crate::error::{GeneratorError, Result};

/// Writes every artifact under `out_dir`, creating directories as needed.
///
/// Existing files are overwritten; nothing else in `out_dir` is touched.
/// Returns the written paths in artifact order.
pub fn emit_artifacts(out_dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
	fs::create_dir_all(out_dir).map_err(|e| GeneratorError::io(out_dir, e))?;

	let mut written = Vec::with_capacity(artifacts.len());
	for artifact in artifacts {
		let path = out_dir.join(&artifact.path);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
		}
		fs::write(&path, &artifact.content).map_err(|e| GeneratorError::io(&path, e))?;
		debug!(
			path = %path.display(),
			kind = %artifact.kind,
			bytes = artifact.content.len(),
			"wrote artifact"
		);
		written.push(path);
	}

	Ok(written)
}
