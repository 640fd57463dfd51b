// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Checks a [`ClientConfig`] before anything is rendered.
//!
//! Every problem is collected so a single run reports all of them.

use std::collections::{HashMap, HashSet};

use crate::error::{GeneratorError, Result};
use crate::render::naming::{constant_name, event_type_name, is_identifier};
use crate::render::types::BASE_EVENT_FIELDS;
use crate::schema::{ClientConfig, EventDefinition};

const MAX_PACKAGE_NAME_LEN: usize = 214;

pub fn validate(config: &ClientConfig) -> Result<()> {
	let mut problems = Vec::new();

	if config.client_name.trim().is_empty() {
		problems.push("clientName must not be empty".to_string());
	} else if config.client_name.chars().any(char::is_control) {
		problems.push("clientName must not contain control characters".to_string());
	}

	if !is_valid_package_name(&config.package_name) {
		problems.push(format!(
			"packageName {:?} is not a valid npm package name",
			config.package_name
		));
	}

	if let Err(e) = semver::Version::parse(&config.version) {
		problems.push(format!("version {:?} is not semver: {e}", config.version));
	}

	let mut type_names: HashMap<String, &str> = HashMap::new();
	let mut constants: HashMap<String, &str> = HashMap::new();
	for (key, event) in &config.events {
		if !is_identifier(key) {
			problems.push(format!("event key {key:?} must be a TypeScript identifier"));
			continue;
		}

		let type_name = event_type_name(key);
		if let Some(previous) = type_names.insert(type_name.clone(), key) {
			problems.push(format!(
				"event keys {previous:?} and {key:?} both generate {type_name}"
			));
		}

		let constant = constant_name(key);
		if let Some(previous) = constants.insert(constant.clone(), key) {
			problems.push(format!(
				"event keys {previous:?} and {key:?} both map to EventTypes.{constant}"
			));
		}

		check_event(key, event, &mut problems);
	}

	if problems.is_empty() {
		Ok(())
	} else {
		Err(GeneratorError::Invalid(problems))
	}
}

fn check_event(key: &str, event: &EventDefinition, problems: &mut Vec<String>) {
	if event.name.trim().is_empty() {
		problems.push(format!("event {key:?}: name must not be empty"));
	}

	let required = check_property_list(
		key,
		"requiredProperties",
		&event.required_properties,
		problems,
	);
	let optional = check_property_list(
		key,
		"optionalProperties",
		&event.optional_properties,
		problems,
	);

	for prop in event
		.required_properties
		.iter()
		.filter(|p| optional.contains(p.as_str()))
	{
		problems.push(format!(
			"event {key:?}: property {prop:?} is both required and optional"
		));
	}

	for prop in required.union(&optional) {
		if BASE_EVENT_FIELDS.contains(prop) {
			problems.push(format!(
				"event {key:?}: property {prop:?} is reserved by the base event"
			));
		}
	}
}

fn check_property_list<'a>(
	key: &str,
	list_name: &str,
	properties: &'a [String],
	problems: &mut Vec<String>,
) -> HashSet<&'a str> {
	let mut seen = HashSet::new();
	for prop in properties {
		if prop.trim().is_empty() {
			problems.push(format!("event {key:?}: {list_name} contains an empty name"));
		} else if !seen.insert(prop.as_str()) {
			problems.push(format!("event {key:?}: {list_name} lists {prop:?} twice"));
		}
	}
	seen
}

/// npm rules: lowercase, at most 214 characters, URL-safe characters, an
/// optional `@scope/` prefix, no leading `.` or `_`.
pub fn is_valid_package_name(name: &str) -> bool {
	if name.is_empty() || name.len() > MAX_PACKAGE_NAME_LEN {
		return false;
	}

	let bare = match name.strip_prefix('@') {
		Some(scoped) => match scoped.split_once('/') {
			Some((scope, bare)) if is_valid_name_part(scope) => bare,
			_ => return false,
		},
		None => name,
	};

	is_valid_name_part(bare) && !bare.starts_with('.') && !bare.starts_with('_')
}

fn is_valid_name_part(part: &str) -> bool {
	!part.is_empty()
		&& part
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-._~".contains(c))
}
