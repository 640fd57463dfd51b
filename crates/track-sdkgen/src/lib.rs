// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Generates a customized TypeScript tracking SDK from a JSON event schema.
//!
//! The input is a [`ClientConfig`]: a client name, an npm package identity
//! and an ordered map of event keys to [`EventDefinition`]s. The output is a
//! React Native package:
//!
//! | File | Contents |
//! |------|----------|
//! | `package.json` | package identity, `build`/`prepare` scripts, dependencies |
//! | `tsconfig.json` | es2015/commonjs build emitting declarations to `lib/` |
//! | `src/types.ts` | `EventTypes` table, one interface per event, `TrackEvent` union |
//! | `src/Track.ts` | the `Track` client |
//! | `src/index.ts` | barrel re-exporting the client and types |
//! | `README.md` | installation, usage and per-event property lists |
//!
//! # Example
//!
//! ```ignore
//! use track_sdkgen::{generate, ClientConfig, GenerateOptions, NpmBuildRunner};
//!
//! let config = ClientConfig::load("acme.json".as_ref())?;
//! let report = generate(&config, &GenerateOptions::default(), &NpmBuildRunner::new())?;
//! println!("SDK generated successfully in {}", report.out_dir.display());
//! ```

pub mod artifact;
pub mod emit;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod validate;

pub use artifact::{ArtifactKind, GeneratedArtifact};
pub use emit::emit_artifacts;
pub use error::{GeneratorError, Result};
pub use generator::{generate, GenerateOptions, GenerationReport, DEFAULT_OUT_DIR};
pub use pipeline::{BuildRunner, NpmBuildRunner};
pub use render::render_all;
pub use schema::{ClientConfig, EventDefinition};
pub use validate::validate;
