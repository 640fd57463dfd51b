// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Install and build step for the generated package.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{GeneratorError, Result};

/// Installs dependencies and compiles a generated package in place.
pub trait BuildRunner {
	fn run(&self, package_dir: &Path) -> Result<()>;
}

/// Runs `npm install` then `npm run build`, blocking until each finishes.
///
/// The first step that exits non-zero aborts the build.
#[derive(Debug, Clone)]
pub struct NpmBuildRunner {
	program: PathBuf,
}

impl NpmBuildRunner {
	pub const DEFAULT_PROGRAM: &'static str = "npm";

	const STEPS: &'static [&'static [&'static str]] = &[&["install"], &["run", "build"]];

	pub fn new() -> Self {
		Self::with_program(Self::DEFAULT_PROGRAM)
	}

	/// Uses a different executable in place of `npm`, e.g. a pinned path.
	pub fn with_program(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
		}
	}

	pub fn program(&self) -> &Path {
		&self.program
	}

	fn run_step(&self, package_dir: &Path, args: &[&str]) -> Result<()> {
		let command = format!("{} {}", self.program.display(), args.join(" "));
		info!(command = %command, dir = %package_dir.display(), "running build step");

		let output = Command::new(&self.program)
			.args(args)
			.current_dir(package_dir)
			.output()
			.map_err(|source| GeneratorError::BuildSpawn {
				command: command.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(GeneratorError::BuildFailed {
				command,
				status: output.status.to_string(),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		debug!(
			command = %command,
			stdout = %String::from_utf8_lossy(&output.stdout).trim(),
			"build step finished"
		);
		Ok(())
	}
}

impl Default for NpmBuildRunner {
	fn default() -> Self {
		Self::new()
	}
}

impl BuildRunner for NpmBuildRunner {
	fn run(&self, package_dir: &Path) -> Result<()> {
		for args in Self::STEPS {
			self.run_step(package_dir, args)?;
		}
		Ok(())
	}
}
