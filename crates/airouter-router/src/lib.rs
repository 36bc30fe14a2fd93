// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider routing for the airouter task router.
//!
//! Orchestrates a task: policy validation > provider selection > attempt >
//! mock fallback. See [`TaskRunner::run_task`].

pub mod registry;
pub mod runner;
pub mod selector;

pub use registry::{ProviderRegistry, Unavailable};
pub use runner::TaskRunner;
pub use selector::{Selection, select, select_provider, validate_policy};
