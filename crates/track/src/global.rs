// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide client instance.
//!
//! Applications that want a single shared client call [`Track::initialize`]
//! once at startup and [`Track::get_instance`] everywhere else. Code that can
//! pass a [`TrackClient`] around does not need this module.

use std::sync::{PoisonError, RwLock};

use tracing::warn;

use crate::client::{TrackClient, TrackClientBuilder};
use crate::config::TrackConfig;
use crate::error::{Result, TrackError};

/// Holds at most one initialized client.
///
/// The first successful initialization wins; later calls return the existing
/// client unchanged.
#[derive(Debug, Default)]
pub struct TrackRegistry {
	slot: RwLock<Option<TrackClient>>,
}

impl TrackRegistry {
	pub const fn new() -> Self {
		Self {
			slot: RwLock::new(None),
		}
	}

	/// Builds and stores a client from `config` unless one already exists.
	pub fn initialize(&self, config: TrackConfig) -> Result<TrackClient> {
		self.initialize_with(TrackClientBuilder::new().config(config))
	}

	/// Like [`initialize`](Self::initialize), but from a prepared builder.
	pub fn initialize_with(&self, builder: TrackClientBuilder) -> Result<TrackClient> {
		let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
		if let Some(existing) = slot.as_ref() {
			warn!("Track already initialized; ignoring new configuration");
			return Ok(existing.clone());
		}

		let client = builder.build()?;
		*slot = Some(client.clone());
		Ok(client)
	}

	/// Returns the stored client.
	pub fn get_instance(&self) -> Result<TrackClient> {
		self
			.slot
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
			.ok_or(TrackError::NotInitialized)
	}

	pub fn is_initialized(&self) -> bool {
		self
			.slot
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.is_some()
	}

	/// Drops the stored client so the next `initialize` takes effect.
	///
	/// Clones already handed out keep working.
	pub fn reset(&self) {
		*self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
	}
}

static REGISTRY: TrackRegistry = TrackRegistry::new();

/// Static entry point backed by a process-wide [`TrackRegistry`].
pub struct Track;

impl Track {
	/// Creates the shared client. Calls after the first success are ignored.
	pub fn initialize(config: TrackConfig) -> Result<TrackClient> {
		REGISTRY.initialize(config)
	}

	pub fn initialize_with(builder: TrackClientBuilder) -> Result<TrackClient> {
		REGISTRY.initialize_with(builder)
	}

	/// Returns the shared client, or [`TrackError::NotInitialized`].
	pub fn get_instance() -> Result<TrackClient> {
		REGISTRY.get_instance()
	}

	pub fn is_initialized() -> bool {
		REGISTRY.is_initialized()
	}

	pub fn reset() {
		REGISTRY.reset()
	}
}
