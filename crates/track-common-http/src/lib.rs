// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Track SDK.
//!
//! Every client built here carries the same User-Agent so the collection
//! endpoint can tell SDK traffic apart. Events are sent once; there is no
//! retry helper.

mod client;

pub use client::{builder, user_agent, SDK_NAME, SDK_VERSION};
