// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Track client for sending events and managing the user id.

use std::sync::Arc;

use chrono::Utc;
use track_core::{validate_event, PlatformInfo, Properties, SessionData, SessionId, TrackEvent};
use tracing::{debug, error, info};

use crate::config::TrackConfig;
use crate::error::{Result, TrackError};
use crate::identity::{IdentityStore, MemoryIdentityStore, USER_ID_KEY};
use crate::interactions::{self, Conversion, ElementInteraction};
use crate::sender::{EventSender, HttpEventSender};
use crate::session::SessionTracker;

/// Builder for constructing a [`TrackClient`].
pub struct TrackClientBuilder {
	config: Option<TrackConfig>,
	api_key: Option<String>,
	api_url: Option<String>,
	debug: Option<bool>,
	session_tracking: Option<bool>,
	request_timeout: Option<std::time::Duration>,
	identity_store: Option<Arc<dyn IdentityStore>>,
	sender: Option<Arc<dyn EventSender>>,
}

impl TrackClientBuilder {
	pub fn new() -> Self {
		Self {
			config: None,
			api_key: None,
			api_url: None,
			debug: None,
			session_tracking: None,
			request_timeout: None,
			identity_store: None,
			sender: None,
		}
	}

	/// Starts from a complete configuration; individual setters still override it.
	pub fn config(mut self, config: TrackConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Sets the API key sent as the bearer token.
	pub fn api_key(mut self, key: impl Into<String>) -> Self {
		self.api_key = Some(key.into());
		self
	}

	/// Sets the collection API base URL.
	///
	/// Example: `https://api.track.com`
	pub fn api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = Some(url.into());
		self
	}

	/// Enables diagnostic logging of every send and failure.
	pub fn debug(mut self, enabled: bool) -> Self {
		self.debug = Some(enabled);
		self
	}

	/// Enables or disables the in-memory session (default: enabled).
	pub fn with_session_tracking(mut self, enabled: bool) -> Self {
		self.session_tracking = Some(enabled);
		self
	}

	/// Sets a per-request timeout. Without one a hung request hangs the caller.
	pub fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	/// Sets where the user id is kept (default: in memory).
	pub fn identity_store(mut self, store: Arc<dyn IdentityStore>) -> Self {
		self.identity_store = Some(store);
		self
	}

	/// Replaces the HTTP transport.
	pub fn sender(mut self, sender: Arc<dyn EventSender>) -> Self {
		self.sender = Some(sender);
		self
	}

	/// Builds the client, validating the key and URL.
	pub fn build(self) -> Result<TrackClient> {
		let mut config = match (self.config, self.api_key) {
			(Some(config), Some(key)) => TrackConfig {
				api_key: key.into(),
				..config
			},
			(Some(config), None) => config,
			(None, Some(key)) => TrackConfig::new(key),
			(None, None) => return Err(TrackError::InvalidApiKey),
		};
		if let Some(url) = self.api_url {
			config.api_url = url;
		}
		if let Some(debug) = self.debug {
			config.debug = debug;
		}
		if let Some(enabled) = self.session_tracking {
			config.session_tracking = enabled;
		}
		if let Some(timeout) = self.request_timeout {
			config.request_timeout = Some(timeout);
		}

		if config.api_key.is_blank() {
			return Err(TrackError::InvalidApiKey);
		}
		config.api_url = normalize_api_url(&config.api_url)?;

		let sender = match self.sender {
			Some(sender) => sender,
			None => {
				let mut builder = track_common_http::builder();
				if let Some(timeout) = config.request_timeout {
					builder = builder.timeout(timeout);
				}
				let http_client = builder.build()?;
				Arc::new(HttpEventSender::new(
					http_client,
					config.api_key.clone(),
					config.events_url(),
				))
			}
		};

		let session = config.session_tracking.then(|| {
			SessionTracker::with_platform(
				PlatformInfo::current().with_user_agent(track_common_http::user_agent()),
			)
		});

		let identity = self
			.identity_store
			.unwrap_or_else(|| Arc::new(MemoryIdentityStore::new()));

		if config.debug {
			info!(
				api_url = %config.api_url,
				session_tracking = config.session_tracking,
				"Track client initialized"
			);
		}

		Ok(TrackClient {
			inner: Arc::new(TrackClientInner {
				config,
				sender,
				identity,
				session,
			}),
		})
	}
}

impl Default for TrackClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn normalize_api_url(url: &str) -> Result<String> {
	let parsed =
		reqwest::Url::parse(url).map_err(|e| TrackError::InvalidBaseUrl(format!("{url}: {e}")))?;
	if !matches!(parsed.scheme(), "http" | "https") {
		return Err(TrackError::InvalidBaseUrl(format!(
			"{url}: scheme must be http or https"
		)));
	}
	Ok(url.trim_end_matches('/').to_string())
}

struct TrackClientInner {
	config: TrackConfig,
	sender: Arc<dyn EventSender>,
	identity: Arc<dyn IdentityStore>,
	session: Option<SessionTracker>,
}

/// Client that sends events to the Track collection API.
///
/// Each call to [`track_event`](Self::track_event) is one HTTP request. There
/// is no batching, queueing or retry: a failure is returned to the caller and
/// the event is gone.
///
/// Cloning is cheap and clones share the user id and session.
///
/// # Example
///
/// ```ignore
/// use track::{TrackClient, TrackEvent, Properties};
///
/// let client = TrackClient::builder()
///     .api_key("trk_live_xxx")
///     .api_url("https://api.track.com")
///     .debug(true)
///     .build()?;
///
/// client.set_user_id("user_123").await?;
/// client.track_screen("Home", Properties::new()).await?;
/// client.track_event(TrackEvent::new("product_view")
///     .with_properties(Properties::new().insert("productId", "123"))
/// ).await?;
/// ```
#[derive(Clone)]
pub struct TrackClient {
	inner: Arc<TrackClientInner>,
}

impl std::fmt::Debug for TrackClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TrackClient")
			.field("config", &self.inner.config)
			.field("identity", &self.inner.identity)
			.field("session", &self.inner.session)
			.finish_non_exhaustive()
	}
}

impl TrackClient {
	pub fn builder() -> TrackClientBuilder {
		TrackClientBuilder::new()
	}

	/// Builds a client straight from a configuration.
	pub fn new(config: TrackConfig) -> Result<Self> {
		TrackClientBuilder::new().config(config).build()
	}

	pub fn config(&self) -> &TrackConfig {
		&self.inner.config
	}

	fn debug_enabled(&self) -> bool {
		self.inner.config.debug
	}

	/// Sends one event.
	///
	/// Before sending, the event is completed with:
	/// - `timestamp`: kept if set on the event, otherwise the current time
	/// - `userId`: kept if set on the event, otherwise the stored user id
	/// - `sessionId`: kept if set on the event, otherwise the current session
	///
	/// A non-2xx response becomes [`TrackError::ServerError`] with the status
	/// and response body.
	pub async fn track_event(&self, event: TrackEvent) -> Result<()> {
		let event_name = event.name.clone();
		let result = self.send_enriched(event).await;

		if let Err(e) = &result {
			if self.debug_enabled() {
				error!(
					error = %e,
					event_name = %event_name,
					api_url = %self.inner.config.api_url,
					"Error sending event"
				);
			}
		}

		result
	}

	async fn send_enriched(&self, event: TrackEvent) -> Result<()> {
		validate_event(&event)?;
		let event = self.enrich(event).await;

		if self.debug_enabled() {
			debug!(
				url = %self.inner.config.events_url(),
				event = ?event,
				"Sending event"
			);
		}

		self.inner.sender.send(&event).await?;

		if self.debug_enabled() {
			debug!(event_name = %event.name, "Event sent successfully");
		}
		Ok(())
	}

	async fn enrich(&self, mut event: TrackEvent) -> TrackEvent {
		if event.timestamp.is_none() {
			event.timestamp = Some(Utc::now());
		}
		if event.user_id.is_none() {
			event.user_id = self.get_user_id().await;
		}
		if event.session_id.is_none() {
			event.session_id = self.session_id().map(|id| id.to_string());
		}
		event
	}

	/// Stores the user id attached to subsequent events.
	///
	/// Storage failures are returned.
	pub async fn set_user_id(&self, user_id: &str) -> Result<()> {
		match self.inner.identity.set(USER_ID_KEY, user_id).await {
			Ok(()) => {
				if self.debug_enabled() {
					debug!(user_id = %user_id, "User ID set");
				}
				Ok(())
			}
			Err(e) => {
				if self.debug_enabled() {
					error!(error = %e, "Error saving user ID");
				}
				Err(e.into())
			}
		}
	}

	/// Returns the stored user id.
	///
	/// Storage failures read as "no user id".
	pub async fn get_user_id(&self) -> Option<String> {
		match self.inner.identity.get(USER_ID_KEY).await {
			Ok(user_id) => {
				if self.debug_enabled() {
					debug!(user_id = ?user_id, "Retrieved user ID");
				}
				user_id
			}
			Err(e) => {
				if self.debug_enabled() {
					error!(error = %e, "Error retrieving user ID");
				}
				None
			}
		}
	}

	/// Forgets the stored user id. Storage failures are returned.
	pub async fn clear_user_id(&self) -> Result<()> {
		match self.inner.identity.remove(USER_ID_KEY).await {
			Ok(()) => {
				if self.debug_enabled() {
					debug!("User ID cleared");
				}
				Ok(())
			}
			Err(e) => {
				if self.debug_enabled() {
					error!(error = %e, "Error clearing user ID");
				}
				Err(e.into())
			}
		}
	}

	/// Records a screen in the session path history and sends a `screen_view` event.
	pub async fn track_screen(&self, name: &str, properties: Properties) -> Result<()> {
		if let Some(session) = &self.inner.session {
			session.record_screen(name).await;
		}
		self
			.track_event(interactions::screen_view(name, properties))
			.await
	}

	/// Sends a `user_action` event.
	pub async fn track_user(&self, action: &str, properties: Properties) -> Result<()> {
		self
			.track_event(interactions::user_action(action, properties))
			.await
	}

	/// Sends a `conversion` event.
	pub async fn track_conversion(&self, conversion: Conversion) -> Result<()> {
		self.track_event(conversion.into_event()).await
	}

	/// Sends an `element_interaction` event.
	pub async fn track_element_interaction(&self, interaction: ElementInteraction) -> Result<()> {
		self.track_event(interaction.into_event()).await
	}

	/// Current session id, or `None` when session tracking is off.
	pub fn session_id(&self) -> Option<&SessionId> {
		self.inner.session.as_ref().map(SessionTracker::id)
	}

	/// Snapshot of the session, or `None` when session tracking is off.
	///
	/// Makes no network call.
	pub async fn session_data(&self) -> Option<SessionData> {
		let session = self.inner.session.as_ref()?;
		let user_id = self.get_user_id().await;
		Some(session.snapshot(user_id).await)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::identity::StorageError;
	use async_trait::async_trait;
	use tokio::sync::Mutex;

	#[derive(Default)]
	struct RecordingSender {
		events: Mutex<Vec<TrackEvent>>,
	}

	impl RecordingSender {
		async fn sent(&self) -> Vec<TrackEvent> {
			self.events.lock().await.clone()
		}
	}

	#[async_trait]
	impl EventSender for RecordingSender {
		async fn send(&self, event: &TrackEvent) -> Result<()> {
			self.events.lock().await.push(event.clone());
			Ok(())
		}
	}

	#[derive(Debug)]
	struct BrokenStore;

	#[async_trait]
	impl IdentityStore for BrokenStore {
		async fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
			Err(StorageError::Backend("unavailable".to_string()))
		}

		async fn set(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
			Err(StorageError::Backend("unavailable".to_string()))
		}

		async fn remove(&self, _key: &str) -> std::result::Result<(), StorageError> {
			Err(StorageError::Backend("unavailable".to_string()))
		}
	}

	fn client_with(sender: Arc<RecordingSender>) -> TrackClient {
		TrackClient::builder()
			.api_key("test-key")
			.sender(sender)
			.build()
			.unwrap()
	}

	#[test]
	fn builder_requires_api_key() {
		let result = TrackClient::builder().api_url("https://example.com").build();
		assert!(matches!(result, Err(TrackError::InvalidApiKey)));
	}

	#[test]
	fn builder_rejects_blank_api_key() {
		let result = TrackClient::builder().api_key("  ").build();
		assert!(matches!(result, Err(TrackError::InvalidApiKey)));
	}

	#[test]
	fn builder_rejects_non_http_url() {
		let result = TrackClient::builder()
			.api_key("k")
			.api_url("ftp://example.com")
			.build();
		assert!(matches!(result, Err(TrackError::InvalidBaseUrl(_))));

		let result = TrackClient::builder().api_key("k").api_url("not a url").build();
		assert!(matches!(result, Err(TrackError::InvalidBaseUrl(_))));
	}

	#[test]
	fn builder_applies_defaults() {
		let client = TrackClient::builder().api_key("k").build().unwrap();
		assert_eq!(client.config().api_url, crate::DEFAULT_API_URL);
		assert!(!client.config().debug);
		assert!(client.session_id().is_some());
	}

	#[test]
	fn builder_normalizes_api_url() {
		let client = TrackClient::builder()
			.api_key("k")
			.api_url("https://example.com/")
			.build()
			.unwrap();
		assert_eq!(client.config().api_url, "https://example.com");
	}

	#[test]
	fn builder_setters_override_config() {
		let client = TrackClient::builder()
			.config(TrackConfig::new("from-config").with_debug(false))
			.debug(true)
			.with_session_tracking(false)
			.build()
			.unwrap();
		assert_eq!(client.config().api_key.expose(), "from-config");
		assert!(client.config().debug);
		assert!(client.session_id().is_none());
	}

	#[tokio::test]
	async fn track_event_adds_timestamp_and_session() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());

		client.track_event(TrackEvent::new("x")).await.unwrap();

		let sent = sender.sent().await;
		assert_eq!(sent.len(), 1);
		assert!(sent[0].timestamp.is_some());
		assert_eq!(
			sent[0].session_id.as_deref(),
			Some(client.session_id().unwrap().to_string().as_str())
		);
		assert!(sent[0].user_id.is_none());
	}

	#[tokio::test]
	async fn event_timestamp_wins() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());
		let ts = Utc::now() - chrono::Duration::hours(1);

		client
			.track_event(TrackEvent::new("x").with_timestamp(ts))
			.await
			.unwrap();

		assert_eq!(sender.sent().await[0].timestamp, Some(ts));
	}

	#[tokio::test]
	async fn stored_user_id_fills_in_but_event_value_wins() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());
		client.set_user_id("stored").await.unwrap();

		client.track_event(TrackEvent::new("a")).await.unwrap();
		client
			.track_event(TrackEvent::new("b").with_user_id("explicit"))
			.await
			.unwrap();

		let sent = sender.sent().await;
		assert_eq!(sent[0].user_id.as_deref(), Some("stored"));
		assert_eq!(sent[1].user_id.as_deref(), Some("explicit"));
	}

	#[tokio::test]
	async fn empty_event_name_is_rejected_before_sending() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());

		let result = client.track_event(TrackEvent::new("")).await;
		assert!(matches!(result, Err(TrackError::ValidationFailed(_))));
		assert!(sender.sent().await.is_empty());
	}

	#[tokio::test]
	async fn user_id_set_get_clear() {
		let client = client_with(Arc::new(RecordingSender::default()));

		client.set_user_id("u1").await.unwrap();
		assert_eq!(client.get_user_id().await.as_deref(), Some("u1"));

		client.clear_user_id().await.unwrap();
		assert_eq!(client.get_user_id().await, None);
	}

	#[tokio::test]
	async fn user_id_is_stored_verbatim() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());

		client.set_user_id("").await.unwrap();
		assert_eq!(client.get_user_id().await.as_deref(), Some(""));

		client.set_user_id(" padded ").await.unwrap();
		client.track_event(TrackEvent::new("a")).await.unwrap();
		assert_eq!(sender.sent().await[0].user_id.as_deref(), Some(" padded "));
	}

	#[tokio::test]
	async fn storage_reads_degrade_and_writes_propagate() {
		let sender = Arc::new(RecordingSender::default());
		let client = TrackClient::builder()
			.api_key("k")
			.debug(true)
			.identity_store(Arc::new(BrokenStore))
			.sender(sender.clone())
			.build()
			.unwrap();

		assert_eq!(client.get_user_id().await, None);
		assert!(matches!(
			client.set_user_id("u1").await,
			Err(TrackError::Storage(_))
		));
		assert!(matches!(
			client.clear_user_id().await,
			Err(TrackError::Storage(_))
		));

		client.track_event(TrackEvent::new("still_sent")).await.unwrap();
		assert_eq!(sender.sent().await.len(), 1);
	}

	#[tokio::test]
	async fn track_screen_builds_path_history() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());

		client.track_screen("Home", Properties::new()).await.unwrap();
		client.track_screen("Profile", Properties::new()).await.unwrap();

		let data = client.session_data().await.unwrap();
		assert_eq!(data.path_history, vec!["Home", "Profile"]);

		let sent = sender.sent().await;
		assert_eq!(sent[0].name, crate::SCREEN_VIEW_EVENT);
		assert_eq!(sent[1].page_title.as_deref(), Some("Profile"));
	}

	#[tokio::test]
	async fn session_data_includes_user_id() {
		let client = client_with(Arc::new(RecordingSender::default()));
		client.set_user_id("u9").await.unwrap();

		let data = client.session_data().await.unwrap();
		assert_eq!(data.user_id.as_deref(), Some("u9"));
		assert_eq!(&data.session_id, client.session_id().unwrap());
	}

	#[tokio::test]
	async fn session_disabled_still_sends_screen_views() {
		let sender = Arc::new(RecordingSender::default());
		let client = TrackClient::builder()
			.api_key("k")
			.with_session_tracking(false)
			.sender(sender.clone())
			.build()
			.unwrap();

		client.track_screen("Home", Properties::new()).await.unwrap();

		assert!(client.session_data().await.is_none());
		let sent = sender.sent().await;
		assert_eq!(sent.len(), 1);
		assert!(sent[0].session_id.is_none());
	}

	#[tokio::test]
	async fn helper_events_delegate_to_track_event() {
		let sender = Arc::new(RecordingSender::default());
		let client = client_with(sender.clone());

		client.track_user("login", Properties::new()).await.unwrap();
		client
			.track_conversion(Conversion::new("purchase").value(10.0, "USD"))
			.await
			.unwrap();
		client
			.track_element_interaction(ElementInteraction::new("cta", "button", "tap"))
			.await
			.unwrap();

		let names: Vec<String> = sender.sent().await.into_iter().map(|e| e.name).collect();
		assert_eq!(
			names,
			vec![
				crate::USER_ACTION_EVENT,
				crate::CONVERSION_EVENT,
				crate::ELEMENT_INTERACTION_EVENT
			]
		);
	}

	#[test]
	fn debug_output_redacts_api_key() {
		let client = TrackClient::builder().api_key("super-secret").build().unwrap();
		assert!(!format!("{client:?}").contains("super-secret"));
	}
}
