// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde attributes cannot express: URL shapes,
//! required GitHub coordinates, duplicate plugin ids and bounded lifetimes.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{CategoriesSetting, QuireConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const DAY_SECS: u64 = 24 * 60 * 60;
/// Upper bound for `publication.categories_cache_ttl_secs`.
pub const MAX_CATEGORIES_CACHE_TTL_SECS: u64 = 365 * DAY_SECS;
/// Upper bound for `token.code_lifetime_secs`.
pub const MAX_CODE_LIFETIME_SECS: u64 = DAY_SECS;
/// Upper bound for `token.token_lifetime_secs`.
pub const MAX_TOKEN_LIFETIME_SECS: u64 = 10 * 365 * DAY_SECS;

/// Validate a deserialized configuration.
///
/// Collects every violation rather than stopping at the first.
pub fn validate_config(config: &QuireConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::validation("server.host must not be empty"));
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "server.log_level `{}` must be one of: {}",
            config.server.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    let publication = &config.publication;
    if !is_http_url(&publication.me) {
        errors.push(ConfigError::validation(format!(
            "publication.me `{}` must be an http:// or https:// URL",
            publication.me
        )));
    }

    if !publication.media_path.starts_with('/') {
        errors.push(ConfigError::validation(format!(
            "publication.media_path `{}` must start with `/`",
            publication.media_path
        )));
    }

    if let Some(CategoriesSetting::Remote { url }) = &publication.categories
        && !is_http_url(url)
    {
        errors.push(ConfigError::validation(format!(
            "publication.categories.url `{url}` must be an http:// or https:// URL"
        )));
    }

    check_duration(
        &mut errors,
        "publication.categories_cache_ttl_secs",
        publication.categories_cache_ttl_secs,
        MAX_CATEGORIES_CACHE_TTL_SECS,
    );

    let mut seen = HashSet::new();
    for id in &config.plugins.enabled {
        if !seen.insert(id.as_str()) {
            errors.push(ConfigError::validation(format!(
                "plugins.enabled lists `{id}` more than once"
            )));
        }
    }

    if config.plugins.is_enabled("github") {
        if config.github.user.trim().is_empty() {
            errors.push(ConfigError::validation(
                "github.user is required when the github store is enabled",
            ));
        }
        if config.github.repo.trim().is_empty() {
            errors.push(ConfigError::validation(
                "github.repo is required when the github store is enabled",
            ));
        }
        if !is_http_url(&config.github.base_url) {
            errors.push(ConfigError::validation(format!(
                "github.base_url `{}` must be an http:// or https:// URL",
                config.github.base_url
            )));
        }
    }

    check_duration(
        &mut errors,
        "token.code_lifetime_secs",
        config.token.code_lifetime_secs,
        MAX_CODE_LIFETIME_SECS,
    );
    check_duration(
        &mut errors,
        "token.token_lifetime_secs",
        config.token.token_lifetime_secs,
        MAX_TOKEN_LIFETIME_SECS,
    );

    if let Some(key) = &config.token.signing_key
        && !(key.len() == 64 && key.chars().all(|c| c.is_ascii_hexdigit()))
    {
        errors.push(ConfigError::validation(
            "token.signing_key must be 64 hex characters (a 32-byte Ed25519 seed)",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Durations must be positive and small enough to add to a timestamp.
fn check_duration(errors: &mut Vec<ConfigError>, key: &str, value: u64, max: u64) {
    if value == 0 {
        errors.push(ConfigError::validation(format!(
            "{key} must be greater than zero"
        )));
    } else if value > max {
        errors.push(ConfigError::validation(format!(
            "{key} must be at most {max} seconds, got {value}"
        )));
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}
