// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use track_sdkgen::{generate, BuildRunner, ClientConfig, GenerateOptions, GeneratorError, Result};

const ACME_CONFIG: &str = include_str!("fixtures/acme.json");
const ACME_TYPES: &str = include_str!("fixtures/acme-types.ts");

struct NoopRunner;

impl BuildRunner for NoopRunner {
	fn run(&self, _package_dir: &Path) -> Result<()> {
		Ok(())
	}
}

fn generate_into(dir: &Path) -> ClientConfig {
	let config = ClientConfig::from_json(ACME_CONFIG).unwrap();
	let options = GenerateOptions {
		out_dir: dir.to_path_buf(),
		..Default::default()
	};
	generate(&config, &options, &NoopRunner).unwrap();
	config
}

#[test]
fn test_types_match_golden_file() {
	let dir = tempfile::tempdir().unwrap();
	generate_into(dir.path());

	let types = std::fs::read_to_string(dir.path().join("src/types.ts")).unwrap();
	assert_eq!(types, ACME_TYPES);
}

#[test]
fn test_package_json_is_valid_json() {
	let dir = tempfile::tempdir().unwrap();
	generate_into(dir.path());

	let text = std::fs::read_to_string(dir.path().join("package.json")).unwrap();
	let pkg: serde_json::Value = serde_json::from_str(&text).unwrap();
	assert_eq!(pkg["name"], "@acme/track");
	assert_eq!(pkg["version"], "1.2.0");
	assert_eq!(pkg["description"], "Custom tracking SDK for Acme Shop");
}

#[test]
fn test_readme_documents_every_event() {
	let dir = tempfile::tempdir().unwrap();
	let config = generate_into(dir.path());

	let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
	for event in config.events.values() {
		assert!(readme.contains(&format!("### {}\n", event.name)));
		assert!(readme.contains(&event.description));
	}
}

#[test]
fn test_regeneration_is_byte_identical() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	generate_into(first.path());
	generate_into(second.path());

	for file in [
		"package.json",
		"tsconfig.json",
		"src/types.ts",
		"src/Track.ts",
		"src/index.ts",
		"README.md",
	] {
		let a = std::fs::read(first.path().join(file)).unwrap();
		let b = std::fs::read(second.path().join(file)).unwrap();
		assert_eq!(a, b, "{file} differs between runs");
	}
}

#[test]
fn test_overlapping_properties_are_rejected() {
	let json = ACME_CONFIG.replace(
		r#""optionalProperties": ["price"]"#,
		r#""optionalProperties": ["productId"]"#,
	);
	let config = ClientConfig::from_json(&json).unwrap();
	let dir = tempfile::tempdir().unwrap();

	let result = generate(
		&config,
		&GenerateOptions {
			out_dir: dir.path().join("sdk"),
			..Default::default()
		},
		&NoopRunner,
	);

	match result {
		Err(GeneratorError::Invalid(problems)) => {
			assert_eq!(problems.len(), 1);
			assert!(problems[0].contains("productId"));
		}
		other => panic!("expected Invalid, got {other:?}"),
	}
}
