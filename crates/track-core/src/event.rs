// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The tracked event record and its validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::properties::Properties;

/// Maximum serialized size of an event's properties (1MB).
pub const MAX_PROPERTIES_SIZE: usize = 1024 * 1024;

/// A single event sent to the collection endpoint.
///
/// Only `name` is mandatory. Every other field is optional and omitted from
/// the wire format when unset. Field names serialize in camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
	pub name: String,
	#[serde(default, skip_serializing_if = "Properties::is_empty")]
	pub properties: Properties,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timestamp: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub plan_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub element_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub element_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub element_text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub element_category: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub conversion_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub funnel_step: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub item_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub item_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub item_category: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content_id: Option<String>,
}

impl TrackEvent {
	/// Creates an event with only a name set.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn with_properties(mut self, properties: Properties) -> Self {
		self.properties = properties;
		self
	}

	pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.timestamp = Some(timestamp);
		self
	}

	pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
		self.user_id = Some(user_id.into());
		self
	}

	pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
		self.session_id = Some(session_id.into());
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	pub fn with_value(mut self, value: f64) -> Self {
		self.value = Some(value);
		self
	}

	pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = Some(currency.into());
		self
	}
}

/// Returns `true` if `name` is usable as an event name.
///
/// Names are free-form; the only requirement is that something is there.
pub fn validate_event_name(name: &str) -> bool {
	!name.trim().is_empty()
}

/// Validates an event at the serialization boundary.
pub fn validate_event(event: &TrackEvent) -> Result<()> {
	if !validate_event_name(&event.name) {
		return Err(CoreError::EmptyEventName);
	}

	if !event.properties.is_empty() {
		let size = serde_json::to_vec(&event.properties)
			.map_err(|e| CoreError::Unserializable(e.to_string()))?
			.len();
		if size > MAX_PROPERTIES_SIZE {
			return Err(CoreError::PropertiesTooLarge {
				size,
				max: MAX_PROPERTIES_SIZE,
			});
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use proptest::prelude::*;

	#[test]
	fn minimal_event_serializes_only_name() {
		let json = serde_json::to_value(TrackEvent::new("app_open")).unwrap();
		assert_eq!(json, serde_json::json!({"name": "app_open"}));
	}

	#[test]
	fn fields_serialize_in_camel_case() {
		let event = TrackEvent {
			name: "purchase".to_string(),
			user_id: Some("u1".to_string()),
			page_title: Some("Checkout".to_string()),
			conversion_type: Some("order".to_string()),
			value: Some(19.5),
			..Default::default()
		};
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["userId"], "u1");
		assert_eq!(json["pageTitle"], "Checkout");
		assert_eq!(json["conversionType"], "order");
		assert_eq!(json["value"], 19.5);
		assert!(json.get("sessionId").is_none());
	}

	#[test]
	fn timestamp_serializes_as_rfc3339() {
		let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
		let json = serde_json::to_value(TrackEvent::new("x").with_timestamp(ts)).unwrap();
		assert_eq!(json["timestamp"], "2024-05-01T12:30:00Z");
	}

	#[test]
	fn properties_nest_under_properties_key() {
		let event =
			TrackEvent::new("search").with_properties(Properties::new().insert("query", "shoes"));
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["properties"]["query"], "shoes");
	}

	#[test]
	fn deserializes_from_camel_case() {
		let event: TrackEvent =
			serde_json::from_str(r#"{"name":"x","itemId":"i1","funnelStep":"cart"}"#).unwrap();
		assert_eq!(event.item_id.as_deref(), Some("i1"));
		assert_eq!(event.funnel_step.as_deref(), Some("cart"));
	}

	#[test]
	fn rejects_empty_name() {
		assert_eq!(
			validate_event(&TrackEvent::new("")),
			Err(CoreError::EmptyEventName)
		);
		assert_eq!(
			validate_event(&TrackEvent::new("   ")),
			Err(CoreError::EmptyEventName)
		);
	}

	#[test]
	fn rejects_oversized_properties() {
		let blob = "x".repeat(MAX_PROPERTIES_SIZE + 1);
		let event = TrackEvent::new("big").with_properties(Properties::new().insert("blob", blob));
		assert!(matches!(
			validate_event(&event),
			Err(CoreError::PropertiesTooLarge { .. })
		));
	}

	proptest! {
		#[test]
		fn any_non_blank_name_is_valid(name in "[a-zA-Z0-9_ ]{0,10}[a-zA-Z0-9_][a-zA-Z0-9_ ]{0,10}") {
			prop_assert!(validate_event(&TrackEvent::new(name)).is_ok());
		}
	}
}
