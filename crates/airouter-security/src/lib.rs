// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Privacy controls for the airouter task router.
//!
//! Redacts personally identifiable information from participant notes and
//! prompts before they reach a model or a log line, and checks outbound
//! inference endpoints before a client is pointed at them.

pub mod endpoint;
pub mod pii;

pub use endpoint::{build_client, is_local_addr, validate_endpoint};
pub use pii::{DEFAULT_PREVIEW_LEN, contains_pii, preview, sanitize, sanitize_json};
