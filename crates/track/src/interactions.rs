// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Builders for the well-known event shapes.

use track_core::{Properties, TrackEvent};

/// Event name used for screen views.
pub const SCREEN_VIEW_EVENT: &str = "screen_view";
/// Event name used for user actions.
pub const USER_ACTION_EVENT: &str = "user_action";
/// Event name used for conversions.
pub const CONVERSION_EVENT: &str = "conversion";
/// Event name used for UI element interactions.
pub const ELEMENT_INTERACTION_EVENT: &str = "element_interaction";

pub(crate) fn screen_view(name: &str, properties: Properties) -> TrackEvent {
	TrackEvent {
		name: SCREEN_VIEW_EVENT.to_string(),
		properties,
		category: Some("navigation".to_string()),
		page_title: Some(name.to_string()),
		page_type: Some("screen".to_string()),
		..Default::default()
	}
}

pub(crate) fn user_action(action: &str, properties: Properties) -> TrackEvent {
	TrackEvent::new(USER_ACTION_EVENT)
		.with_properties(properties)
		.with_category("user")
		.with_action(action)
}

/// A completed goal, e.g. a purchase or a signup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
	pub conversion_type: String,
	pub value: Option<f64>,
	pub currency: Option<String>,
	pub funnel_step: Option<String>,
	pub item_id: Option<String>,
	pub item_name: Option<String>,
	pub properties: Properties,
}

impl Conversion {
	pub fn new(conversion_type: impl Into<String>) -> Self {
		Self {
			conversion_type: conversion_type.into(),
			..Default::default()
		}
	}

	pub fn value(mut self, value: f64, currency: impl Into<String>) -> Self {
		self.value = Some(value);
		self.currency = Some(currency.into());
		self
	}

	pub fn funnel_step(mut self, step: impl Into<String>) -> Self {
		self.funnel_step = Some(step.into());
		self
	}

	pub fn item(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
		self.item_id = Some(id.into());
		self.item_name = Some(name.into());
		self
	}

	pub fn properties(mut self, properties: Properties) -> Self {
		self.properties = properties;
		self
	}

	pub fn into_event(self) -> TrackEvent {
		TrackEvent {
			name: CONVERSION_EVENT.to_string(),
			properties: self.properties,
			category: Some("conversion".to_string()),
			conversion_type: Some(self.conversion_type),
			value: self.value,
			currency: self.currency,
			funnel_step: self.funnel_step,
			item_id: self.item_id,
			item_name: self.item_name,
			..Default::default()
		}
	}
}

/// A tap, click or similar interaction with a UI element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementInteraction {
	pub element_id: String,
	pub element_type: String,
	pub action: String,
	pub element_text: Option<String>,
	pub element_category: Option<String>,
	pub properties: Properties,
}

impl ElementInteraction {
	pub fn new(
		element_id: impl Into<String>,
		element_type: impl Into<String>,
		action: impl Into<String>,
	) -> Self {
		Self {
			element_id: element_id.into(),
			element_type: element_type.into(),
			action: action.into(),
			..Default::default()
		}
	}

	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.element_text = Some(text.into());
		self
	}

	pub fn category(mut self, category: impl Into<String>) -> Self {
		self.element_category = Some(category.into());
		self
	}

	pub fn properties(mut self, properties: Properties) -> Self {
		self.properties = properties;
		self
	}

	pub fn into_event(self) -> TrackEvent {
		TrackEvent {
			name: ELEMENT_INTERACTION_EVENT.to_string(),
			properties: self.properties,
			category: Some("interaction".to_string()),
			action: Some(self.action),
			element_id: Some(self.element_id),
			element_type: Some(self.element_type),
			element_text: self.element_text,
			element_category: self.element_category,
			..Default::default()
		}
	}
}
