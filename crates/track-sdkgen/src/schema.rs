// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Generator input: the client configuration and its event taxonomy.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::render::naming;

/// One trackable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
	/// Canonical event name sent on the wire, e.g. `product_view`.
	pub name: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub required_properties: Vec<String>,
	#[serde(default)]
	pub optional_properties: Vec<String>,
}

impl EventDefinition {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			category: String::new(),
			description: String::new(),
			required_properties: Vec::new(),
			optional_properties: Vec::new(),
		}
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = category.into();
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_required<I, S>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.required_properties = properties.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_optional<I, S>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.optional_properties = properties.into_iter().map(Into::into).collect();
		self
	}
}

/// The generator's sole input.
///
/// Events keep the order they appear in the JSON file; every rendered
/// artifact follows that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
	pub client_name: String,
	pub package_name: String,
	pub version: String,
	#[serde(default)]
	pub events: IndexMap<String, EventDefinition>,
}

impl ClientConfig {
	pub fn new(
		client_name: impl Into<String>,
		package_name: impl Into<String>,
		version: impl Into<String>,
	) -> Self {
		Self {
			client_name: client_name.into(),
			package_name: package_name.into(),
			version: version.into(),
			events: IndexMap::new(),
		}
	}

	pub fn with_event(mut self, key: impl Into<String>, event: EventDefinition) -> Self {
		self.events.insert(key.into(), event);
		self
	}

	/// Reads and parses a configuration file. Does not validate it.
	pub fn load(path: &Path) -> Result<Self> {
		let content =
			std::fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
		Self::from_json(&content)
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Generated interface names, in event order.
	pub fn type_names(&self) -> impl Iterator<Item = String> + '_ {
		self.events.keys().map(|key| naming::event_type_name(key))
	}
}
