// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event delivery.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use track_core::{ApiKey, TrackEvent};

use crate::error::{Result, TrackError};

/// Delivers one fully-enriched event to the collection endpoint.
///
/// Implementations send exactly once: no queueing, no retry.
#[async_trait::async_trait]
pub trait EventSender: Send + Sync {
	async fn send(&self, event: &TrackEvent) -> Result<()>;
}

/// Sends events as `POST {api_url}/api/events` with a bearer token.
pub struct HttpEventSender {
	http_client: Client,
	api_key: ApiKey,
	url: String,
}

impl HttpEventSender {
	pub fn new(http_client: Client, api_key: ApiKey, url: impl Into<String>) -> Self {
		Self {
			http_client,
			api_key,
			url: url.into(),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

#[async_trait::async_trait]
impl EventSender for HttpEventSender {
	async fn send(&self, event: &TrackEvent) -> Result<()> {
		let body = serde_json::to_vec(event)?;

		let response = self
			.http_client
			.post(&self.url)
			.header(CONTENT_TYPE, "application/json")
			.header(AUTHORIZATION, self.api_key.bearer())
			.body(body)
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(TrackError::ServerError {
				status: response.status().as_u16(),
				message: response.text().await.unwrap_or_default(),
			});
		}

		Ok(())
	}
}
