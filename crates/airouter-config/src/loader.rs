// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./airouter.toml` > `~/.config/airouter/airouter.toml`
//! > `/etc/airouter/airouter.toml` with environment variable overrides via the
//! `AIROUTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::RouterConfig;

/// System-wide config file location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/airouter/airouter.toml";

/// Config file name looked up in the working directory and the user config dir.
pub const LOCAL_CONFIG_FILE: &str = "airouter.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("airouter").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/airouter/airouter.toml` (system-wide)
/// 3. `~/.config/airouter/airouter.toml` (user XDG config)
/// 4. `./airouter.toml` (local directory)
/// 5. `AIROUTER_*` environment variables
pub fn load_config() -> Result<RouterConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RouterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RouterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `AIROUTER_OLLAMA_BASE_URL` must map to `ollama.base_url`,
/// not `ollama.base.url`.
pub fn env_provider() -> Env {
    Env::prefixed("AIROUTER_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to its dotted config path.
///
/// `execution_enabled` -> `execution.enabled`,
/// `ollama_base_url` -> `ollama.base_url`.
pub fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 4] = ["execution", "ollama", "mock", "logging"];

    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
