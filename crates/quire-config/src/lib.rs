// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Quire publishing backend.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), a system/user/local file hierarchy, `QUIRE_`
//! environment overrides, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use quire_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Publishing {}", config.publication.me);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    CategoriesSetting, GithubConfig, PluginsConfig, PublicationSettings, QuireConfig,
    ServerConfig, TokenConfig,
};

/// Load configuration from the file hierarchy and validate it.
///
/// Figment errors become diagnostics with typo suggestions; a successful
/// extraction is then checked by [`validation::validate_config`].
pub fn load_and_validate() -> Result<QuireConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific file (plus env) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<QuireConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<QuireConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(loaded: Result<QuireConfig, figment::Error>) -> Result<QuireConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                me = %config.publication.me,
                store = %config.publication.store,
                preset = %config.publication.preset,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
