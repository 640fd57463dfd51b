// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust client for the Track event collection API.
//!
//! Each tracked event is sent as its own `POST {api_url}/api/events` request
//! with a bearer API key. The client fills in a timestamp, the stored user id
//! and the current session id before sending.
//!
//! # Quick Start
//!
//! ```ignore
//! use track::{Track, TrackConfig, TrackEvent, Properties};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Once at startup
//!     Track::initialize(TrackConfig::new("trk_live_xxx").with_debug(true))?;
//!
//!     // Anywhere else
//!     let track = Track::get_instance()?;
//!     track.set_user_id("user_123").await?;
//!     track.track_event(TrackEvent::new("product_view")
//!         .with_properties(Properties::new()
//!             .insert("productId", "123")
//!             .insert("price", 99.99))
//!     ).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Delivery
//!
//! There is no queue and no retry. `track_event` resolves once the server has
//! answered; a non-2xx answer is returned as [`TrackError::ServerError`] and
//! the event is not resent.
//!
//! # User ID
//!
//! The user id lives in an [`IdentityStore`] under [`USER_ID_KEY`]. The default
//! store is in memory; use [`FileIdentityStore`] to keep it across restarts.
//! An id set on the event itself takes precedence over the stored one.
//!
//! # Sessions
//!
//! With session tracking on (the default), each client holds a session id and
//! the ordered list of screens passed to [`TrackClient::track_screen`].

mod client;
mod config;
mod error;
mod global;
mod identity;
mod interactions;
mod sender;
mod session;

pub use client::{TrackClient, TrackClientBuilder};
pub use config::{
	TrackConfig, DEFAULT_API_URL, ENV_API_KEY, ENV_API_URL, ENV_DEBUG, EVENTS_PATH,
};
pub use error::{Result, TrackError};
pub use global::{Track, TrackRegistry};
pub use identity::{
	FileIdentityStore, IdentityStore, MemoryIdentityStore, StorageError, USER_ID_KEY,
};
pub use interactions::{
	Conversion, ElementInteraction, CONVERSION_EVENT, ELEMENT_INTERACTION_EVENT, SCREEN_VIEW_EVENT,
	USER_ACTION_EVENT,
};
pub use sender::{EventSender, HttpEventSender};
pub use session::SessionTracker;

pub use track_core::{ApiKey, PlatformInfo, Properties, SessionData, SessionId, TrackEvent};
