// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use super::naming::{inline_code, property_key, string_literal};
use crate::schema::{ClientConfig, EventDefinition};

/// Renders `README.md`: installation, usage and one section per event.
pub fn render(config: &ClientConfig) -> String {
	let name = &config.client_name;
	let package = &config.package_name;

	let mut out = format!(
		"# {name} Tracking SDK

Custom tracking SDK for {name}.

## Installation

```bash
npm install {package}
# or
yarn add {package}
```

## Usage

### Initialize the SDK

```typescript
import {{ Track }} from '{package}';

Track.initialize({{
  apiKey: 'your-api-key',
  debug: true, // Enable debug mode for detailed logging
  apiUrl: 'https://your-api-url.com' // Your API endpoint
}});
```

### Track Events

```typescript
const track = Track.getInstance();

try {{
{example}
}} catch (error) {{
  console.error('Failed to track event:', error);
}}
```

## Available Events
",
		example = usage_example(config),
	);

	if config.events.is_empty() {
		out.push_str("\nNo events are defined.\n");
	}
	for event in config.events.values() {
		out.push('\n');
		out.push_str(&render_event(event));
	}

	out.push_str("\n## License\n\nMIT\n");
	out
}

fn usage_example(config: &ClientConfig) -> String {
	let Some(event) = config.events.values().next() else {
		return "  await track.trackEvent({ name: 'app_open' });".to_string();
	};

	let mut lines = vec![format!("    name: {},", string_literal(&event.name))];
	for prop in &event.required_properties {
		lines.push(format!("    {}: '...',", property_key(prop)));
	}
	format!("  await track.trackEvent({{\n{}\n  }});", lines.join("\n"))
}

fn render_event(event: &EventDefinition) -> String {
	let mut out = format!("### {}\n\n", event.name);
	if !event.category.is_empty() {
		out.push_str(&format!("Category: {}\n\n", inline_code(&event.category)));
	}
	if !event.description.is_empty() {
		out.push_str(&format!("{}\n\n", event.description));
	}
	out.push_str("Required properties:\n");
	out.push_str(&property_list(&event.required_properties));
	out.push_str("\nOptional properties:\n");
	out.push_str(&property_list(&event.optional_properties));
	out
}

fn property_list(properties: &[String]) -> String {
	if properties.is_empty() {
		return "- None\n".to_string();
	}
	properties
		.iter()
		.map(|p| format!("- {}\n", inline_code(p)))
		.collect()
}
