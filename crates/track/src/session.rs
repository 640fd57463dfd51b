// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory session tracking.
//!
//! A session starts when the client is built and lasts as long as the client.
//! It is never persisted. Screen views append to an ordered path history.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use track_core::{PlatformInfo, SessionData, SessionId};

/// Holds the current session's id, start time and visited screens.
#[derive(Debug)]
pub struct SessionTracker {
	id: SessionId,
	started_at: DateTime<Utc>,
	path_history: RwLock<Vec<String>>,
	platform: PlatformInfo,
}

impl SessionTracker {
	pub fn new() -> Self {
		Self::with_platform(PlatformInfo::current())
	}

	pub fn with_platform(platform: PlatformInfo) -> Self {
		Self {
			id: SessionId::new(),
			started_at: Utc::now(),
			path_history: RwLock::new(Vec::new()),
			platform,
		}
	}

	pub fn id(&self) -> &SessionId {
		&self.id
	}

	pub fn started_at(&self) -> DateTime<Utc> {
		self.started_at
	}

	/// Appends a screen name to the path history.
	pub async fn record_screen(&self, name: &str) {
		self.path_history.write().await.push(name.to_string());
	}

	/// Copies the current state into a [`SessionData`].
	pub async fn snapshot(&self, user_id: Option<String>) -> SessionData {
		SessionData {
			session_id: self.id.clone(),
			start_time: self.started_at,
			path_history: self.path_history.read().await.clone(),
			user_id,
			platform: self.platform.clone(),
		}
	}
}

impl Default for SessionTracker {
	fn default() -> Self {
		Self::new()
	}
}
