// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Text renderers for every file of the generated package.
//!
//! Renderers are pure string builders. They assume a validated
//! [`ClientConfig`] and do not check that the emitted TypeScript compiles.

pub mod client;
pub mod manifest;
pub mod naming;
pub mod readme;
pub mod types;

use crate::artifact::{ArtifactKind, GeneratedArtifact};
use crate::error::Result;
use crate::schema::ClientConfig;

/// First line of every generated TypeScript file.
pub const GENERATED_HEADER: &str =
	"// Generated by track-sdkgen from the client configuration. Do not edit.\n";

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const TYPES_TS: &str = "src/types.ts";
pub const TRACK_TS: &str = "src/Track.ts";
pub const INDEX_TS: &str = "src/index.ts";
pub const README_MD: &str = "README.md";

/// Renders the full package, in a fixed order.
pub fn render_all(config: &ClientConfig) -> Result<Vec<GeneratedArtifact>> {
	Ok(vec![
		GeneratedArtifact::new(
			PACKAGE_JSON,
			manifest::to_text(&manifest::package_json(config))?,
			ArtifactKind::Config,
		),
		GeneratedArtifact::new(
			TSCONFIG_JSON,
			manifest::to_text(&manifest::tsconfig_json())?,
			ArtifactKind::Config,
		),
		GeneratedArtifact::new(TYPES_TS, types::render(config), ArtifactKind::Source),
		GeneratedArtifact::new(TRACK_TS, client::render_track(config), ArtifactKind::Source),
		GeneratedArtifact::new(INDEX_TS, client::render_index(), ArtifactKind::Source),
		GeneratedArtifact::new(README_MD, readme::render(config), ArtifactKind::Documentation),
	])
}
