// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Track event SDK.
//!
//! This crate holds the data model shared by the runtime client and anything
//! that needs to produce or inspect tracked events:
//!
//! - [`TrackEvent`]: a single event with its well-known optional fields
//! - [`Properties`]: the open, string-keyed property map attached to events
//! - [`SessionId`] / [`SessionData`]: in-memory session snapshots
//! - [`ApiKey`]: a redacting wrapper for the SDK credential
//! - [`PlatformInfo`]: descriptors of the host the SDK runs on

pub mod api_key;
pub mod error;
pub mod event;
pub mod platform;
pub mod properties;
pub mod session;

pub use api_key::{ApiKey, REDACTED};
pub use error::{CoreError, Result};
pub use event::{validate_event, validate_event_name, TrackEvent, MAX_PROPERTIES_SIZE};
pub use platform::PlatformInfo;
pub use properties::Properties;
pub use session::{SessionData, SessionId};
