// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the airouter task router.
//!
//! This crate provides the task/policy/result data model, the
//! [`RouterError`] type, and the [`Provider`] trait that every backend
//! (mock, local inference, paid stubs) implements.

pub mod error;
pub mod traits;
pub mod types;

pub use error::RouterError;
pub use traits::Provider;
pub use types::{
    Capability, HealthStatus, Policy, PreferProvider, ProviderKind, Task, TaskContext, TaskResult,
};
