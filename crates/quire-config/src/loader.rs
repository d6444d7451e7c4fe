// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the hierarchy `./quire.toml` > `~/.config/quire/quire.toml` >
//! `/etc/quire/quire.toml` with environment variable overrides via the
//! `QUIRE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::QuireConfig;

/// Top-level sections an environment variable may address.
const ENV_SECTIONS: &[&str] = &["server", "publication", "plugins", "github", "token"];

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/quire/quire.toml`
/// 3. `~/.config/quire/quire.toml`
/// 4. `./quire.toml`
/// 5. `QUIRE_*` environment variables
pub fn load_config() -> Result<QuireConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<QuireConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuireConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QuireConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuireConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(QuireConfig::default()))
        .merge(Toml::file("/etc/quire/quire.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("quire/quire.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("quire.toml"))
        .merge(env_provider())
}

/// Maps `QUIRE_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `QUIRE_PUBLICATION_MEDIA_ENDPOINT` lands on `publication.media_endpoint`.
fn env_provider() -> Env {
    Env::prefixed("QUIRE_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
