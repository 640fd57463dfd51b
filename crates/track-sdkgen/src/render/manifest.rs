// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Renders `package.json` and `tsconfig.json`.

use serde_json::{json, Value};

use crate::error::Result;
use crate::schema::ClientConfig;

pub fn package_json(config: &ClientConfig) -> Value {
	json!({
		"name": config.package_name,
		"version": config.version,
		"description": format!("Custom tracking SDK for {}", config.client_name),
		"main": "lib/index.js",
		"types": "lib/index.d.ts",
		"scripts": {
			"build": "tsc",
			"prepare": "npm run build"
		},
		"peerDependencies": {
			"react-native": ">=0.60.0"
		},
		"devDependencies": {
			"typescript": "^4.5.0",
			"@types/react-native": "^0.60.0"
		}
	})
}

pub fn tsconfig_json() -> Value {
	json!({
		"compilerOptions": {
			"target": "es2015",
			"module": "commonjs",
			"declaration": true,
			"outDir": "./lib",
			"strict": true,
			"esModuleInterop": true,
			"skipLibCheck": true,
			"forceConsistentCasingInFileNames": true,
			"jsx": "react-native"
		},
		"include": ["src"],
		"exclude": ["node_modules", "**/__tests__/*"]
	})
}

/// Pretty-printed with two-space indentation and a trailing newline.
pub fn to_text(value: &Value) -> Result<String> {
	let mut text = serde_json::to_string_pretty(value)?;
	text.push('\n');
	Ok(text)
}
