// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup diagnostics for `quire.toml`.
//!
//! Figment reports extraction failures in its own terms; these are turned
//! into [`ConfigError`]s carrying a stable miette code and, for misspelled
//! keys, the closest valid key.

#![allow(unused_assignments)] // emitted by the miette derive

use figment::error::Kind;
use miette::{Diagnostic, GraphicalReportHandler};
use thiserror::Error;

/// Jaro-Winkler score a valid key must exceed to be offered as a fix.
const SUGGESTION_THRESHOLD: f64 = 0.75;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("`{key}` is not a recognised setting")]
    #[diagnostic(
        code(quire::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        /// Comma-separated keys accepted at this position.
        valid_keys: String,
    },

    #[error("`{key}` has the wrong type ({detail})")]
    #[diagnostic(code(quire::config::invalid_type), help("use a value of type {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    #[error("`{key}` is required")]
    #[diagnostic(
        code(quire::config::missing_key),
        help("set `{key}` in quire.toml or through a QUIRE_ environment variable")
    )]
    MissingKey { key: String },

    /// The file parsed but a value is unusable.
    #[error("invalid setting: {message}")]
    #[diagnostic(code(quire::config::validation))]
    Validation { message: String },

    #[error("could not load configuration: {0}")]
    #[diagnostic(code(quire::config::other))]
    Other(String),
}

impl ConfigError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ConfigError::Validation {
            message: message.into(),
        }
    }

    fn from_figment(error: &figment::Error) -> Self {
        match &error.kind {
            Kind::UnknownField(field, accepted) => ConfigError::UnknownKey {
                key: field.clone(),
                suggestion: suggest_key(field, accepted),
                valid_keys: accepted.join(", "),
            },
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: qualified(&error.path, field),
            },
            Kind::InvalidType(found, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("got {found}"),
                expected: expected.clone(),
            },
            _ => ConfigError::Other(error.to_string()),
        }
    }
}

/// `publication` + `me` -> `publication.me`.
fn qualified(path: &[String], field: &str) -> String {
    path.iter()
        .map(String::as_str)
        .chain(std::iter::once(field))
        .collect::<Vec<_>>()
        .join(".")
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    let accepted = format!("accepted here: {valid_keys}");
    match suggestion {
        Some(key) => format!("did you mean `{key}`? {accepted}"),
        None => accepted,
    }
}

/// Flattens a figment error chain into one diagnostic per failure.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter().map(|e| ConfigError::from_figment(&e)).collect()
}

/// The accepted key closest to `unknown`, if any is close enough.
pub fn suggest_key(unknown: &str, accepted: &[&str]) -> Option<String> {
    let (score, best) = accepted
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .max_by(|a, b| a.0.total_cmp(&b.0))?;
    (score > SUGGESTION_THRESHOLD).then(|| best.to_string())
}

/// Writes every diagnostic to stderr with miette's graphical renderer.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{rendered}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspelled_repo_suggests_repo() {
        let accepted = &["base_url", "user", "repo", "branch", "token"];
        assert_eq!(suggest_key("rpeo", accepted).as_deref(), Some("repo"));
    }

    #[test]
    fn misspelled_media_path_suggests_media_path() {
        let accepted = &["me", "timezone", "media_path", "media_endpoint"];
        assert_eq!(
            suggest_key("media_pth", accepted).as_deref(),
            Some("media_path")
        );
    }

    #[test]
    fn unrelated_key_gets_no_suggestion() {
        assert_eq!(suggest_key("zzzzzz", &["host", "port", "log_level"]), None);
        assert_eq!(suggest_key("anything", &[]), None);
    }

    #[test]
    fn missing_key_is_qualified_with_its_section() {
        assert_eq!(qualified(&["publication".into()], "me"), "publication.me");
        assert_eq!(qualified(&[], "server"), "server");
    }
}
