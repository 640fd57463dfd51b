// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validate, render, write and build in one call.

use std::path::PathBuf;

use tracing::info;

use crate::artifact::GeneratedArtifact;
use crate::emit::emit_artifacts;
use crate::error::Result;
use crate::pipeline::BuildRunner;
use crate::render::render_all;
use crate::schema::ClientConfig;
use crate::validate::validate;

/// Directory the package is written to when none is given.
pub const DEFAULT_OUT_DIR: &str = "generated-sdk";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
	pub out_dir: PathBuf,
	/// Write the files but do not install or build.
	pub skip_build: bool,
	/// Render only; nothing is written and nothing is built.
	pub dry_run: bool,
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			out_dir: PathBuf::from(DEFAULT_OUT_DIR),
			skip_build: false,
			dry_run: false,
		}
	}
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerationReport {
	pub out_dir: PathBuf,
	pub artifacts: Vec<GeneratedArtifact>,
	/// Empty on a dry run.
	pub written: Vec<PathBuf>,
	pub built: bool,
}

/// Generates the package described by `config`.
///
/// Validation runs before anything touches the disk. A build failure is
/// returned after the files have been written; they are left in place.
pub fn generate(
	config: &ClientConfig,
	options: &GenerateOptions,
	runner: &dyn BuildRunner,
) -> Result<GenerationReport> {
	validate(config)?;
	let artifacts = render_all(config)?;
	info!(
		client = %config.client_name,
		package = %config.package_name,
		events = config.events.len(),
		artifacts = artifacts.len(),
		"rendered SDK"
	);

	if options.dry_run {
		return Ok(GenerationReport {
			out_dir: options.out_dir.clone(),
			artifacts,
			written: Vec::new(),
			built: false,
		});
	}

	let written = emit_artifacts(&options.out_dir, &artifacts)?;

	let built = if options.skip_build {
		info!("skipping install and build");
		false
	} else {
		runner.run(&options.out_dir)?;
		true
	};

	Ok(GenerationReport {
		out_dir: options.out_dir.clone(),
		artifacts,
		written,
		built,
	})
}
