// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identifier and literal helpers for emitted TypeScript.

/// Upper-cases the first character and leaves the rest untouched.
///
/// `productView` becomes `ProductView`.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Interface name generated for an event key.
pub fn event_type_name(key: &str) -> String {
	format!("{}Event", capitalize(key))
}

/// Key used for an event in the `EventTypes` constant table.
pub fn constant_name(key: &str) -> String {
	key.to_uppercase()
}

/// Whether `s` is a plain TypeScript identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted TypeScript string literal.
pub fn string_literal(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	out.push('\'');
	for c in s.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{2028}' => out.push_str("\\u2028"),
			'\u{2029}' => out.push_str("\\u2029"),
			c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
			c => out.push(c),
		}
	}
	out.push('\'');
	out
}

/// Property key as written in an interface or object literal.
///
/// Identifiers are emitted bare, anything else is quoted.
pub fn property_key(name: &str) -> String {
	if is_identifier(name) {
		name.to_string()
	} else {
		string_literal(name)
	}
}

/// Text safe to place inside a Markdown inline code span.
pub fn inline_code(s: &str) -> String {
	if s.contains('`') {
		format!("`` {s} ``")
	} else {
		format!("`{s}`")
	}
}
