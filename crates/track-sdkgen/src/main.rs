// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use track_sdkgen::{generate, ClientConfig, GenerateOptions, NpmBuildRunner, DEFAULT_OUT_DIR};

/// Generate a customized TypeScript tracking SDK from a JSON event schema
#[derive(Parser, Debug)]
#[command(name = "track-sdkgen", version, about, long_about = None)]
struct Args {
	/// Path to the client configuration file
	config: Option<PathBuf>,

	/// Directory the package is written to
	#[arg(short, long, default_value = DEFAULT_OUT_DIR)]
	out_dir: PathBuf,

	/// Write the files without running npm install / npm run build
	#[arg(long)]
	skip_build: bool,

	/// npm executable used for the build step
	#[arg(long, env = "TRACK_SDKGEN_NPM", default_value = NpmBuildRunner::DEFAULT_PROGRAM)]
	npm: PathBuf,

	/// Render and list the files without writing or building anything
	#[arg(long)]
	dry_run: bool,

	/// Log level (overridden by RUST_LOG)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,
}

fn init_tracing(args: &Args) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("track_sdkgen={}", args.log_level)));

	if args.json_logs {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn run(args: &Args, config_path: &Path) -> Result<()> {
	let config = ClientConfig::load(config_path)
		.with_context(|| format!("failed to load {}", config_path.display()))?;

	let options = GenerateOptions {
		out_dir: args.out_dir.clone(),
		skip_build: args.skip_build,
		dry_run: args.dry_run,
	};
	let runner = NpmBuildRunner::with_program(&args.npm);

	let report = generate(&config, &options, &runner).context("Error generating SDK")?;

	if args.dry_run {
		for artifact in &report.artifacts {
			println!(
				"{:<6} {} ({} bytes)",
				artifact.kind,
				report.out_dir.join(&artifact.path).display(),
				artifact.content.len()
			);
		}
		return Ok(());
	}

	let out_dir = std::env::current_dir()
		.map(|cwd| cwd.join(&report.out_dir))
		.unwrap_or_else(|_| report.out_dir.clone());
	println!("SDK generated successfully in {}", out_dir.display());
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_tracing(&args);

	let Some(config_path) = args.config.as_ref() else {
		eprintln!("Please provide a path to the configuration file");
		return ExitCode::FAILURE;
	};

	match run(&args, config_path) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e:#}");
			ExitCode::FAILURE
		}
	}
}
