// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storage backends for the tracked user id.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Fixed key the current user id is stored under.
pub const USER_ID_KEY: &str = "@track_user_id";

/// Errors raised by an [`IdentityStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	#[error("IO error: {0}")]
	Io(String),

	#[error("Serialization error: {0}")]
	Serde(String),

	#[error("Backend error: {0}")]
	Backend(String),
}

impl From<std::io::Error> for StorageError {
	fn from(err: std::io::Error) -> Self {
		StorageError::Io(err.to_string())
	}
}

impl From<serde_json::Error> for StorageError {
	fn from(err: serde_json::Error) -> Self {
		StorageError::Serde(err.to_string())
	}
}

/// A string key-value store used to remember the user id.
///
/// The client only ever touches [`USER_ID_KEY`], but stores are keyed so a
/// single file can be shared with other small pieces of state.
#[async_trait]
pub trait IdentityStore: Send + Sync + std::fmt::Debug {
	async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

	async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

	async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keeps values for the life of the process only.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
	values: tokio::sync::RwLock<HashMap<String, String>>,
}

impl MemoryIdentityStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
	async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.values.read().await.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self
			.values
			.write()
			.await
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	async fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.values.write().await.remove(key);
		Ok(())
	}
}

/// Persists values in a JSON object file.
///
/// Writes go to a temporary sibling file that is renamed into place, and the
/// file is restricted to 0600 on Unix.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
	path: PathBuf,
}

impl FileIdentityStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	async fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
		if !fs::try_exists(&self.path).await? {
			return Ok(HashMap::new());
		}

		let contents = fs::read_to_string(&self.path).await?;
		if contents.trim().is_empty() {
			return Ok(HashMap::new());
		}
		Ok(serde_json::from_str(&contents)?)
	}

	async fn write_all(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).await?;
		}

		let contents = serde_json::to_string_pretty(values)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path).await?;
		file.write_all(contents.as_bytes()).await?;
		file.sync_all().await?;
		drop(file);

		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			let perms = std::fs::Permissions::from_mode(0o600);
			if let Err(e) = fs::set_permissions(&temp_path, perms).await {
				warn!(path = ?temp_path, error = %e, "Failed to set identity file permissions to 0600");
			}
		}

		fs::rename(&temp_path, &self.path).await?;

		debug!(path = ?self.path, "Identity store written");
		Ok(())
	}
}

#[async_trait]
impl IdentityStore for FileIdentityStore {
	async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.read_all().await?.remove(key))
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut values = self.read_all().await?;
		values.insert(key.to_string(), value.to_string());
		self.write_all(&values).await
	}

	async fn remove(&self, key: &str) -> Result<(), StorageError> {
		let mut values = self.read_all().await?;
		if values.remove(key).is_none() {
			return Ok(());
		}
		self.write_all(&values).await
	}
}
