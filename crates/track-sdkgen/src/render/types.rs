// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Renders `src/types.ts`: the event name table, one interface per event and
//! the `TrackEvent` union.

use indexmap::IndexMap;

use super::naming::{constant_name, event_type_name, property_key, string_literal};
use super::GENERATED_HEADER;
use crate::schema::{ClientConfig, EventDefinition};

/// TypeScript type used for every declared event property.
pub const PROPERTY_TYPE: &str = "string | number";

/// Fields every generated event carries through `BaseEvent`.
pub const BASE_EVENT_FIELDS: &[&str] = &["name", "timestamp", "userId", "sessionId", "properties"];

const BASE_EVENT: &str = "\
export type EventProperties = Record<string, string | number | boolean | null>;

export interface BaseEvent<N extends string = string> {
  name: N;
  timestamp?: string;
  userId?: string;
  sessionId?: string;
  properties?: EventProperties;
}
";

const SUPPORT_TYPES: &str = "\
export interface TrackConfig {
  apiKey: string;
  apiUrl?: string;
  debug?: boolean;
}
";

pub fn render(config: &ClientConfig) -> String {
	let mut out = String::new();
	out.push_str(GENERATED_HEADER);
	out.push('\n');

	out.push_str(&render_event_table(&config.events));
	out.push('\n');
	out.push_str("export type EventName = (typeof EventTypes)[keyof typeof EventTypes];\n\n");
	out.push_str(BASE_EVENT);

	for (key, event) in &config.events {
		out.push('\n');
		out.push_str(&render_interface(key, event));
	}

	out.push('\n');
	out.push_str(&render_union(config.events.keys()));
	out.push('\n');
	out.push_str(SUPPORT_TYPES);
	out
}

fn render_event_table(events: &IndexMap<String, EventDefinition>) -> String {
	if events.is_empty() {
		return "export const EventTypes = {} as const;\n".to_string();
	}

	let mut out = String::from("export const EventTypes = {\n");
	for (key, event) in events {
		out.push_str(&format!(
			"  {}: {},\n",
			constant_name(key),
			string_literal(&event.name)
		));
	}
	out.push_str("} as const;\n");
	out
}

/// Required properties first, then optional, each in declaration order.
pub fn render_interface(key: &str, event: &EventDefinition) -> String {
	let header = format!(
		"export interface {} extends BaseEvent<typeof EventTypes.{}>",
		event_type_name(key),
		constant_name(key)
	);

	if event.required_properties.is_empty() && event.optional_properties.is_empty() {
		return format!("{header} {{}}\n");
	}

	let mut out = format!("{header} {{\n");
	for prop in &event.required_properties {
		out.push_str(&format!("  {}: {PROPERTY_TYPE};\n", property_key(prop)));
	}
	for prop in &event.optional_properties {
		out.push_str(&format!("  {}?: {PROPERTY_TYPE};\n", property_key(prop)));
	}
	out.push_str("}\n");
	out
}

fn render_union<'a>(keys: impl Iterator<Item = &'a String>) -> String {
	let members: Vec<String> = keys.map(|key| event_type_name(key)).collect();
	if members.is_empty() {
		"export type TrackEvent = BaseEvent;\n".to_string()
	} else {
		format!("export type TrackEvent = {};\n", members.join(" | "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shop_config() -> ClientConfig {
		ClientConfig::new("Shop", "shop-track", "1.0.0")
			.with_event(
				"productView",
				EventDefinition::new("product_view")
					.with_required(["productId", "productName"])
					.with_optional(["price"]),
			)
			.with_event("appOpen", EventDefinition::new("app_open"))
	}

	fn property_lines(rendered: &str) -> Vec<&str> {
		rendered
			.lines()
			.filter(|line| line.starts_with("  ") && line.ends_with(';'))
			.map(str::trim)
			.collect()
	}

	#[test]
	fn required_then_optional_in_order() {
		let event = EventDefinition::new("e")
			.with_required(["a", "b"])
			.with_optional(["c"]);
		let rendered = render_interface("sample", &event);

		assert_eq!(
			property_lines(&rendered),
			vec![
				"a: string | number;",
				"b: string | number;",
				"c?: string | number;"
			]
		);
	}

	#[test]
	fn event_without_properties_has_no_fields() {
		let rendered = render_interface("appOpen", &EventDefinition::new("app_open"));
		assert_eq!(
			rendered,
			"export interface AppOpenEvent extends BaseEvent<typeof EventTypes.APPOPEN> {}\n"
		);
		assert!(property_lines(&rendered).is_empty());
	}

	#[test]
	fn non_identifier_properties_are_quoted() {
		let event = EventDefinition::new("e").with_required(["item-id"]);
		let rendered = render_interface("e", &event);
		assert!(rendered.contains("  'item-id': string | number;\n"));
	}

	#[test]
	fn renders_table_interfaces_and_union() {
		let rendered = render(&shop_config());

		assert!(rendered.contains(
			"export const EventTypes = {\n  PRODUCTVIEW: 'product_view',\n  APPOPEN: 'app_open',\n} as const;\n"
		));
		assert!(rendered.contains(
			"export interface ProductViewEvent extends BaseEvent<typeof EventTypes.PRODUCTVIEW> {\n"
		));
		assert!(rendered.contains("export type TrackEvent = ProductViewEvent | AppOpenEvent;\n"));

		let view = rendered.find("ProductViewEvent extends").unwrap();
		let open = rendered.find("AppOpenEvent extends").unwrap();
		assert!(view < open);
	}

	#[test]
	fn event_names_are_escaped() {
		let config = ClientConfig::new("Shop", "shop", "1.0.0")
			.with_event("quote", EventDefinition::new("it's"));
		assert!(render(&config).contains("  QUOTE: 'it\\'s',\n"));
	}

	#[test]
	fn no_events_degrades_to_base_event() {
		let rendered = render(&ClientConfig::new("Empty", "empty", "0.1.0"));
		assert!(rendered.contains("export const EventTypes = {} as const;\n"));
		assert!(rendered.contains("export type TrackEvent = BaseEvent;\n"));
	}

	#[test]
	fn output_is_deterministic() {
		let config = shop_config();
		assert_eq!(render(&config), render(&config.clone()));
	}

	#[test]
	fn base_event_declares_reserved_fields() {
		let rendered = render(&shop_config());
		for field in BASE_EVENT_FIELDS {
			let declared = rendered.contains(&format!("  {field}: N;"))
				|| rendered.contains(&format!("  {field}?: "));
			assert!(declared, "BaseEvent is missing {field}");
		}
	}
}
