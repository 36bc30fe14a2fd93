// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable router backends.

pub mod provider;

pub use provider::Provider;
